//! Sparse restore: only the collections named in the body are replaced.
//!
//! Writes happen one collection at a time in a fixed order with no rollback.
//! If a write fails partway, the collections already written stay written.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder};
use serde_json::{Map, Value};
use url::Url;

use super::client::ApiRequest;
use super::MessageResponse;
use crate::http::error_response;
use crate::http::extract::JsonBody;
use crate::store::{Collection, StoreError};
use crate::ServiceState;

/// Client-side request restoring any subset of the collections.
#[derive(Debug, Clone)]
pub struct RestoreRequest {
    pub token: String,
    pub document: Map<String, Value>,
}

pub async fn handler(
    State(state): State<ServiceState>,
    JsonBody(body): JsonBody,
) -> Result<Json<MessageResponse>, RestoreError> {
    let Value::Object(mut document) = body else {
        return Err(RestoreError::NotAnObject);
    };

    let mut restored = Vec::new();
    for collection in Collection::ALL {
        let Some(value) = document.remove(collection.key()) else {
            continue;
        };

        state.store().write(collection, &value).await.map_err(|e| {
            tracing::error!(?restored, "Error restoring data: {}", e);
            RestoreError::Store(e)
        })?;
        restored.push(collection.key());
    }

    tracing::info!(?restored, "restore complete");
    Ok(Json(MessageResponse::new("Data restored successfully")))
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("Restore body must be a JSON object")]
    NotAnObject,
    #[error("Failed to restore data: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for RestoreError {
    fn into_response(self) -> Response {
        let status = match self {
            RestoreError::NotAnObject => StatusCode::BAD_REQUEST,
            RestoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

impl ApiRequest for RestoreRequest {
    type Response = MessageResponse;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, url::ParseError> {
        let full_url = base_url.join("/api/restore")?;
        Ok(client
            .post(full_url)
            .bearer_auth(self.token)
            .json(&self.document))
    }
}
