use reqwest::StatusCode;
use thiserror::Error;

/// Maximum length for response bodies quoted in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failure modes for one backend call.
///
/// The UI shows different messages for "the backend is not running" and
/// "the backend rejected the request", so transport-level and status-level
/// failures are separate variants.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the backend.
    #[error("backend unreachable: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not the JSON shape we expected.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Anything that fits none of the above.
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Truncate a response body to avoid quoting excessive data
    fn truncate_body(body: &str) -> String {
        if body.chars().count() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let head: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", head, body.len())
        }
    }

    pub fn from_status(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: Self::truncate_body(body),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Unknown(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_keeps_status_and_body() {
        let err = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "name taken");
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(body, "name taken");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_from_status_truncates_long_bodies() {
        let body = "x".repeat(2000);
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            ApiError::Status { body, .. } => {
                assert!(body.len() < 600);
                assert!(body.contains("truncated, 2000 total bytes"));
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::from(serde_err);
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_display_distinguishes_kinds() {
        let network = ApiError::Network("connection refused".to_string());
        assert!(network.to_string().contains("backend unreachable"));

        let status = ApiError::from_status(StatusCode::NOT_FOUND, "");
        assert!(status.to_string().contains("404"));
    }
}
