use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::client::ApiRequest;
use crate::store::{Collection, Store, StoreError};
use crate::ServiceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCounts {
    pub pirates: usize,
    pub marines: usize,
    pub world_gov: usize,
    pub bounties: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_counts: Option<DataCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl HealthResponse {
    fn healthy(data_counts: DataCounts) -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: Some(crate::VERSION.to_string()),
            data_counts: Some(data_counts),
            error: None,
            timestamp: timestamp(),
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            version: None,
            data_counts: None,
            error: Some(error),
            timestamp: timestamp(),
        }
    }
}

/// Client-side request for the health report.
#[derive(Debug, Clone, Default)]
pub struct HealthRequest;

#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Response {
    match data_counts(state.store()).await {
        Ok(counts) => (StatusCode::OK, Json(HealthResponse::healthy(counts))).into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::unhealthy(e.to_string())),
            )
                .into_response()
        }
    }
}

async fn data_counts(store: &Store) -> Result<DataCounts, StoreError> {
    Ok(DataCounts {
        pirates: record_count(&store.load(Collection::Pirates).await?),
        marines: record_count(&store.load(Collection::Marines).await?),
        world_gov: record_count(&store.load(Collection::WorldGov).await?),
        bounties: bounty_count(&store.load(Collection::Bounties).await?),
    })
}

/// Number of records in a document: array length, object key count, or zero.
fn record_count(document: &Value) -> usize {
    match document {
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
        _ => 0,
    }
}

/// Length of `topBounties`, or zero when the document is not an object.
fn bounty_count(document: &Value) -> usize {
    document
        .as_object()
        .and_then(|fields| fields.get("topBounties"))
        .map(record_count)
        .unwrap_or(0)
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl ApiRequest for HealthRequest {
    type Response = HealthResponse;

    fn build_request(
        self,
        base_url: &Url,
        client: &Client,
    ) -> Result<RequestBuilder, url::ParseError> {
        let full_url = base_url.join("/api/health")?;
        Ok(client.get(full_url))
    }
}
