use std::path::PathBuf;

use clap::Args;

use service::http::api::backup::BackupRequest;
use service::http::api::client::ApiError;

#[derive(Args, Debug, Clone)]
pub struct Backup {
    /// Bearer token presented to the service
    #[arg(long, env = "GRANDLINE_TOKEN")]
    pub token: String,

    /// Write the backup document here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("failed to encode backup: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Backup {
    type Error = BackupError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let request = BackupRequest {
            token: self.token.clone(),
        };
        let document = ctx.client.call(request).await?;
        let pretty = serde_json::to_string_pretty(&document)?;

        match &self.out {
            Some(path) => {
                tokio::fs::write(path, pretty.as_bytes())
                    .await
                    .map_err(|source| BackupError::Write {
                        path: path.clone(),
                        source,
                    })?;
                Ok(format!(
                    "Backup of {} collections written to {}",
                    document.len(),
                    path.display()
                ))
            }
            None => Ok(pretty),
        }
    }
}
