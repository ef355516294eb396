use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

use service::Config as ServiceConfig;

use crate::config::{parse_log_level, AppConfig, ConfigError};
use crate::process::spawn_service;

#[derive(Args, Debug, Clone, Default)]
pub struct Serve {
    /// Port to listen on (default from config, then 5328)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the collection files (default from config, then ./data)
    #[arg(long, env = "GRANDLINE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "GRANDLINE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Serve {
    /// Merge flags over the file config.
    fn service_config(&self, app: AppConfig) -> Result<ServiceConfig, ConfigError> {
        let port = self.port.unwrap_or(app.port);
        let log_level = parse_log_level(self.log_level.as_deref().unwrap_or(&app.log_level))?;

        Ok(ServiceConfig {
            data_dir: self.data_dir.clone().unwrap_or(app.data_dir),
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port),
            log_level,
            log_dir: self.log_dir.clone().or(app.log_dir),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("service failed: {0}")]
    Failed(#[from] anyhow::Error),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let app = AppConfig::load(ctx.config_path.as_deref())?;
        let config = self.service_config(app)?;

        spawn_service(&config).await?;
        Ok("service stopped".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Serve::default()
            .service_config(AppConfig::default())
            .unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:5328");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_flags_override_file() {
        let app = AppConfig {
            port: 9000,
            data_dir: PathBuf::from("/srv/archive"),
            log_level: "warn".to_string(),
            log_dir: Some(PathBuf::from("/var/log/grandline")),
        };
        let serve = Serve {
            port: Some(7000),
            data_dir: None,
            log_level: Some("debug".to_string()),
            log_dir: None,
        };

        let config = serve.service_config(app).unwrap();
        assert_eq!(config.listen_addr.port(), 7000);
        assert_eq!(config.data_dir, PathBuf::from("/srv/archive"));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/grandline")));
    }

    #[test]
    fn test_bad_log_level() {
        let serve = Serve {
            log_level: Some("loud".to_string()),
            ..Serve::default()
        };
        assert!(serve.service_config(AppConfig::default()).is_err());
    }
}
