use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use super::error_response;

/// Any well-formed JSON document, with no schema applied.
///
/// Rejects with 400 when the content type is not JSON or the body does not
/// parse, so handlers never start a write with a bad payload.
#[derive(Debug, Clone)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = JsonBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(JsonBodyRejection::NotJson);
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| JsonBodyRejection::Unreadable(e.status(), e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(JsonBodyRejection::Malformed)?;
        Ok(Self(value))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[derive(Debug, thiserror::Error)]
pub enum JsonBodyRejection {
    #[error("Request must be JSON")]
    NotJson,
    #[error("Malformed JSON body: {0}")]
    Malformed(serde_json::Error),
    #[error("Failed to read request body: {1}")]
    Unreadable(StatusCode, String),
}

impl IntoResponse for JsonBodyRejection {
    fn into_response(self) -> Response {
        let status = match &self {
            JsonBodyRejection::Unreadable(status, _) => *status,
            JsonBodyRejection::NotJson | JsonBodyRejection::Malformed(_) => StatusCode::BAD_REQUEST,
        };
        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_any_json_value() {
        for body in ["[]", "{\"a\": 1}", "\"text\"", "42", "null"] {
            let JsonBody(value) =
                JsonBody::from_request(request(Some("application/json"), body), &())
                    .await
                    .unwrap();
            assert_eq!(value, serde_json::from_str::<Value>(body).unwrap());
        }
    }

    #[tokio::test]
    async fn test_content_type_parameters_and_suffix() {
        let ok = JsonBody::from_request(
            request(Some("application/json; charset=utf-8"), "[]"),
            &(),
        )
        .await;
        assert!(ok.is_ok());

        let ok = JsonBody::from_request(request(Some("application/vnd.api+json"), "[]"), &()).await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_missing_content_type() {
        let err = JsonBody::from_request(request(None, "[]"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, JsonBodyRejection::NotJson));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = JsonBody::from_request(request(Some("text/plain"), "[]"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, JsonBodyRejection::NotJson));
    }

    #[tokio::test]
    async fn test_rejects_malformed_body() {
        let err = JsonBody::from_request(request(Some("application/json"), "{oops"), &())
            .await
            .unwrap_err();
        assert!(matches!(err, JsonBodyRejection::Malformed(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
