//! Bearer gate for mutating routes.
//!
//! Only the *shape* of the `Authorization` header is checked: it must start
//! with `Bearer `. The token itself is never verified, so any caller who sends
//! `Authorization: Bearer x` gets through. This is a placeholder gate, not
//! authentication; swap in real token verification before exposing the
//! service beyond a trusted network.
//!
//! # Usage
//!
//! ```rust,ignore
//! use axum::{middleware, routing::post};
//!
//! let write = post(handler).route_layer(middleware::from_fn(require_bearer));
//! ```

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error_response;

/// Case-sensitive scheme prefix the gate looks for.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns true when the headers carry a bearer-shaped credential.
pub fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(BEARER_PREFIX))
}

/// Middleware that rejects requests without a bearer-shaped `Authorization`
/// header before they reach the wrapped handler.
pub async fn require_bearer(request: Request, next: Next) -> Result<Response, AuthRejection> {
    if !has_bearer(request.headers()) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "rejecting request without bearer credential"
        );
        return Err(AuthRejection::MissingBearer);
    }

    Ok(next.run(request).await)
}

#[derive(Debug, thiserror::Error)]
pub enum AuthRejection {
    #[error("Unauthorized")]
    MissingBearer,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::middleware;
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;

    async fn protected_handler() -> &'static str {
        "through"
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(protected_handler).route_layer(middleware::from_fn(require_bearer)),
        )
    }

    async fn status_for(header: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        let request = builder.body(Body::empty()).unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_any_bearer_token_passes() {
        assert_eq!(status_for(Some("Bearer x")).await, StatusCode::OK);
        assert_eq!(
            status_for(Some("Bearer definitely-not-a-real-token")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header_is_rejected() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("Basic abc")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("bearer x")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(Some("Bearer")).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_rejection_body() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Unauthorized");
    }
}
