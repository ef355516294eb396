//! Read and full-replace handlers shared by the four collections.
//!
//! Every collection exposes the same pair of operations: a public `GET`
//! returning the whole document, and a gated `POST`/`PUT` replacing it. The
//! body may be any JSON value; ids and entity shapes are not checked.

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, MethodRouter};
use axum::Json;
use serde_json::Value;

use super::MessageResponse;
use crate::http::auth::require_bearer;
use crate::http::error_response;
use crate::http::extract::JsonBody;
use crate::store::{Collection, StoreError};
use crate::ServiceState;

/// Route table: path under `/api` for each collection.
pub const ROUTES: [(&str, Collection); 4] = [
    ("/pirates", Collection::Pirates),
    ("/marines", Collection::Marines),
    ("/world-gov", Collection::WorldGov),
    ("/bounties/top", Collection::Bounties),
];

/// Build the method router for one collection: open reads, gated writes.
pub fn route(collection: Collection) -> MethodRouter<ServiceState> {
    let read = get(move |State(state): State<ServiceState>| read_handler(state, collection));

    let replace = move |State(state): State<ServiceState>, JsonBody(body): JsonBody| {
        replace_handler(state, collection, body)
    };
    let write = post(replace.clone())
        .put(replace)
        .route_layer(middleware::from_fn(require_bearer));

    read.merge(write)
}

fn updated_message(collection: Collection) -> &'static str {
    match collection {
        Collection::Pirates => "Pirates data updated successfully",
        Collection::Marines => "Marines data updated successfully",
        Collection::WorldGov => "World Government data updated successfully",
        Collection::Bounties => "Top bounties data updated successfully",
    }
}

async fn read_handler(state: ServiceState, collection: Collection) -> Json<Value> {
    Json(state.store().read(collection).await)
}

async fn replace_handler(
    state: ServiceState,
    collection: Collection,
    body: Value,
) -> Result<Json<MessageResponse>, ReplaceError> {
    state
        .store()
        .write(collection, &body)
        .await
        .map_err(|e| {
            tracing::error!(%collection, "failed to replace collection: {}", e);
            ReplaceError::Store(e)
        })?;

    tracing::info!(%collection, "collection replaced");
    Ok(Json(MessageResponse::new(updated_message(collection))))
}

#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("Failed to write data: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ReplaceError {
    fn into_response(self) -> Response {
        error_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_covers_every_collection() {
        for collection in Collection::ALL {
            assert_eq!(
                ROUTES.iter().filter(|(_, c)| *c == collection).count(),
                1,
                "{collection} must be routed exactly once"
            );
        }
    }

    #[test]
    fn test_updated_messages() {
        assert_eq!(
            updated_message(Collection::WorldGov),
            "World Government data updated successfully"
        );
        assert_eq!(
            updated_message(Collection::Bounties),
            "Top bounties data updated successfully"
        );
    }
}
