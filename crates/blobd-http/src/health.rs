//! Liveness report served at `/health`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::body::ResponseBody;
use crate::response::json_response;
use crate::service::HttpConfig;

/// Liveness document returned by the `/health` endpoint.
///
/// The store has no external dependencies to probe, so the status is
/// `"healthy"` whenever the process answers at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall status.
    pub status: String,
    /// Time the report was generated.
    pub timestamp: DateTime<Utc>,
    /// Name of the reporting service.
    pub service: String,
    /// Version of the reporting service.
    pub version: String,
}

impl HealthStatus {
    /// Create a report for the given service identity, timestamped now.
    #[must_use]
    pub fn now(service: &str, version: &str) -> Self {
        Self {
            status: "healthy".to_owned(),
            timestamp: Utc::now(),
            service: service.to_owned(),
            version: version.to_owned(),
        }
    }
}

/// Build the `/health` response.
#[must_use]
pub fn health_response(config: &HttpConfig) -> http::Response<ResponseBody> {
    let report = HealthStatus::now(&config.service_name, &config.service_version);
    let body = match serde_json::to_vec(&report) {
        Ok(bytes) => ResponseBody::from_bytes(bytes),
        Err(_) => ResponseBody::from_string(r#"{"status":"healthy"}"#),
    };
    json_response(http::StatusCode::OK, body)
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    #[test]
    fn test_should_report_healthy_status() {
        let report = HealthStatus::now("blobd", "0.1.0");
        assert_eq!(report.status, "healthy");
        assert_eq!(report.service, "blobd");
        assert_eq!(report.version, "0.1.0");
    }

    #[test]
    fn test_should_serialize_with_lowercase_keys() {
        let report = HealthStatus::now("blobd", "0.1.0");
        let value = serde_json::to_value(&report).expect("report should serialize");
        for key in ["status", "timestamp", "service", "version"] {
            assert!(value.get(key).is_some(), "missing key: {key}");
        }
    }

    #[test]
    fn test_should_serve_health_document() {
        let resp = health_response(&HttpConfig::default());
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json"),
        );

        let body = tokio_test::block_on(resp.into_body().collect())
            .expect("body should collect")
            .to_bytes();
        let report: HealthStatus = serde_json::from_slice(&body).expect("valid JSON body");
        assert_eq!(report.status, "healthy");
        assert_eq!(report.service, "blobd");
    }
}
