pub mod utils;

use std::time::Duration;

use anyhow::Context;
use tokio::time::timeout;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use service::{http, Config as ServiceConfig, ServiceState};

const FINAL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Initialize logging, panic handler, and build info reporting.
/// Returns guards that must be kept alive for the duration of the program.
fn init_logging(
    service_config: &ServiceConfig,
) -> Vec<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::fmt::format::FmtSpan;

    let mut guards = Vec::new();

    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(stdout_guard);

    let stdout_env_filter = EnvFilter::builder()
        .with_default_directive(service_config.log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(stdout_writer)
        .with_filter(stdout_env_filter);

    if let Some(log_dir) = &service_config.log_dir {
        if let Err(e) = std::fs::create_dir_all(log_dir) {
            eprintln!(
                "Warning: Failed to create log directory {:?}: {}",
                log_dir, e
            );
        }

        let file_appender = tracing_appender::rolling::daily(log_dir, "grandline.log");
        let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);
        guards.push(file_guard);

        let file_env_filter = EnvFilter::builder()
            .with_default_directive(service_config.log_level.into())
            .from_env_lossy();

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(file_env_filter);

        tracing_subscriber::registry()
            .with(stdout_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(stdout_layer).init();
    }

    utils::register_panic_logger();
    utils::report_build_info();

    guards
}

/// Runs the archive API until a shutdown signal arrives or the server exits.
pub async fn spawn_service(service_config: &ServiceConfig) -> anyhow::Result<()> {
    let _guards = init_logging(service_config);

    let (graceful_waiter, shutdown_rx) =
        utils::graceful_shutdown_blocker().context("failed to install signal handlers")?;

    let state = ServiceState::from_config(service_config)
        .await
        .context("failed to set up service state")?;
    tracing::info!(
        "Serving {} on {}",
        state.store().data_dir().display(),
        service_config.listen_addr
    );

    let mut api_config = http::Config::new(service_config.listen_addr);
    api_config.log_level = service_config.log_level;

    let mut api_handle = tokio::spawn(http::run_api(api_config, state, shutdown_rx));

    let shutdown_requested = tokio::select! {
        _ = graceful_waiter => true,
        result = &mut api_handle => {
            result
                .context("API server task panicked")?
                .context("API server error")?;
            false
        }
    };

    if shutdown_requested && timeout(FINAL_SHUTDOWN_TIMEOUT, api_handle).await.is_err() {
        anyhow::bail!(
            "failed to shut down within {} seconds",
            FINAL_SHUTDOWN_TIMEOUT.as_secs()
        );
    }

    Ok(())
}
