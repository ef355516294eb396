use clap::Args;

use service::http::api::client::ApiError;
use service::http::api::health::{HealthRequest, HealthResponse, HealthStatus};

#[derive(Args, Debug, Clone)]
pub struct Health;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Render a health report the way an operator reads it.
fn render(report: &HealthResponse) -> String {
    let mut lines = Vec::new();

    match report.status {
        HealthStatus::Healthy => lines.push("status:    healthy".to_string()),
        HealthStatus::Unhealthy => lines.push("status:    UNHEALTHY".to_string()),
    }
    if let Some(version) = &report.version {
        lines.push(format!("version:   {}", version));
    }
    if let Some(counts) = &report.data_counts {
        lines.push(format!("pirates:   {}", counts.pirates));
        lines.push(format!("marines:   {}", counts.marines));
        lines.push(format!("world-gov: {}", counts.world_gov));
        lines.push(format!("bounties:  {}", counts.bounties));
    }
    if let Some(error) = &report.error {
        lines.push(format!("error:     {}", error));
    }
    lines.push(format!("timestamp: {}", report.timestamp));

    lines.join("\n")
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Health {
    type Error = HealthError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let header = format!("Service ({}):", ctx.client.base_url());

        let report = match ctx.client.call(HealthRequest).await {
            Ok(report) => report,
            // An unhealthy service still answers with a report body
            Err(ApiError::HttpStatus(status, body)) => {
                match serde_json::from_str::<HealthResponse>(&body) {
                    Ok(report) => report,
                    Err(_) => return Err(ApiError::HttpStatus(status, body).into()),
                }
            }
            Err(e) => return Err(e.into()),
        };

        Ok(format!("{}\n{}", header, render(&report)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::http::api::health::DataCounts;

    #[test]
    fn test_render_healthy() {
        let report = HealthResponse {
            status: HealthStatus::Healthy,
            version: Some("1.0.0".to_string()),
            data_counts: Some(DataCounts {
                pirates: 3,
                marines: 2,
                world_gov: 4,
                bounties: 1,
            }),
            error: None,
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let out = render(&report);
        assert!(out.starts_with("status:    healthy"));
        assert!(out.contains("pirates:   3"));
        assert!(out.contains("world-gov: 4"));
        assert!(!out.contains("error:"));
    }

    #[test]
    fn test_render_unhealthy() {
        let report = HealthResponse {
            status: HealthStatus::Unhealthy,
            version: None,
            data_counts: None,
            error: Some("bad json".to_string()),
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let out = render(&report);
        assert!(out.contains("UNHEALTHY"));
        assert!(out.contains("error:     bad json"));
        assert!(!out.contains("pirates"));
    }
}
