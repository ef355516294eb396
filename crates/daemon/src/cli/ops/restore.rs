use std::path::PathBuf;

use clap::Args;
use serde_json::Value;

use service::http::api::client::ApiError;
use service::http::api::restore::RestoreRequest;

#[derive(Args, Debug, Clone)]
pub struct Restore {
    /// Backup document to restore (a JSON object keyed by collection)
    pub file: PathBuf,

    /// Bearer token presented to the service
    #[arg(long, env = "GRANDLINE_TOKEN")]
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid backup document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("backup document must be a JSON object")]
    NotAnObject,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Restore {
    type Error = RestoreError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let raw = tokio::fs::read(&self.file)
            .await
            .map_err(|source| RestoreError::Read {
                path: self.file.clone(),
                source,
            })?;

        let Value::Object(document) = serde_json::from_slice(&raw)? else {
            return Err(RestoreError::NotAnObject);
        };

        let request = RestoreRequest {
            token: self.token.clone(),
            document,
        };
        let response = ctx.client.call(request).await?;
        Ok(response.message)
    }
}
