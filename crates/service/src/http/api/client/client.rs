use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::error::ApiError;
use super::ApiRequest;

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("Accept", HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(default_headers).build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client)?;
        let response = request_builder.send().await?;

        if response.status().is_success() {
            Ok(response.json::<T::Response>().await?)
        } else {
            Err(ApiError::HttpStatus(
                response.status(),
                response.text().await?,
            ))
        }
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> &Url {
        &self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::api::backup::BackupRequest;
    use crate::http::api::health::HealthRequest;

    #[test]
    fn test_requests_target_api_paths() {
        let remote = Url::parse("http://localhost:5328").unwrap();
        let client = ApiClient::new(&remote).unwrap();

        let request = HealthRequest
            .build_request(client.base_url(), &client.client)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:5328/api/health");
        assert!(request.headers().get("authorization").is_none());

        let request = BackupRequest {
            token: "x".to_string(),
        }
        .build_request(client.base_url(), &client.client)
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(request.url().path(), "/api/backup");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer x");
    }
}
