use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use http::Method;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

pub mod backup;
pub mod client;
pub mod collections;
pub mod health;
pub mod restore;

use super::auth::require_bearer;
use crate::ServiceState;

/// Confirmation body returned by every successful write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn router(state: ServiceState) -> Router<ServiceState> {
    let cors_layer = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
        .allow_credentials(false);

    let router = collections::ROUTES
        .into_iter()
        .fold(Router::new(), |router, (path, collection)| {
            router.route(path, collections::route(collection))
        });

    router
        .route(
            "/backup",
            get(backup::handler).route_layer(middleware::from_fn(require_bearer)),
        )
        .route(
            "/restore",
            post(restore::handler).route_layer(middleware::from_fn(require_bearer)),
        )
        .route("/health", get(health::handler))
        .with_state(state)
        .layer(cors_layer)
}
