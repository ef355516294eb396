use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};
use url::Url;

use super::client::ApiRequest;
use crate::http::error_response;
use crate::store::{Collection, StoreError};
use crate::ServiceState;

/// All four collections keyed by `pirates`, `marines`, `world-gov` and
/// `bounties`.
pub type BackupResponse = Map<String, Value>;

/// Client-side request for a full backup.
#[derive(Debug, Clone)]
pub struct BackupRequest {
    pub token: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
) -> Result<Json<BackupResponse>, BackupError> {
    let mut backup = Map::new();

    // Either every collection makes it into the backup or none does.
    for collection in Collection::ALL {
        let document = state.store().load(collection).await.map_err(|e| {
            tracing::error!("Error creating backup: {}", e);
            BackupError::Store(e)
        })?;
        backup.insert(collection.key().to_string(), document);
    }

    tracing::info!(collections = backup.len(), "backup created");
    Ok(Json(backup))
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("Failed to create backup: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for BackupError {
    fn into_response(self) -> Response {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}

impl ApiRequest for BackupRequest {
    type Response = BackupResponse;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, url::ParseError> {
        let full_url = base_url.join("/api/backup")?;
        Ok(client.get(full_url).bearer_auth(self.token))
    }
}
