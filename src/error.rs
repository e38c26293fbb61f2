//! Error types for the cache service
//!
//! The cache itself never fails; these errors cover request validation and
//! the upstream fetches made on a cache miss.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the cache service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Key not present in the cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    Upstream { url: String, status: u16 },

    /// Upstream could not be reached or its body could not be read
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Upstream { .. } | ServiceError::Transport(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ServiceError::NotFound("k".into()), StatusCode::NOT_FOUND),
            (ServiceError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                ServiceError::Upstream {
                    url: "https://example.com".into(),
                    status: 503,
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ServiceError::NotFound("missing".into()).to_string(),
            "Key not found: missing"
        );
        assert_eq!(
            ServiceError::Upstream {
                url: "https://example.com/x".into(),
                status: 404,
            }
            .to_string(),
            "Upstream returned 404 for https://example.com/x"
        );
    }
}
