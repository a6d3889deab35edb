//! Error types for Coupang API operations.
//!
//! One unified error type covers argument validation, transport
//! failures, non-2xx responses, and response parsing. Individual
//! malformed records inside a batch response are *not* errors; they
//! are skipped during parsing (see [`crate::client::parse`]).

use thiserror::Error;

/// Result type for Coupang API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when calling the Coupang affiliate API.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum ApiError {
    /// Caller-supplied argument out of contract. Raised before any
    /// network I/O; recoverable by correcting the input.
    #[error("Invalid parameter: {0}")]
    Validation(String),

    /// Non-success HTTP status. Carries the numeric status code and
    /// the raw response body verbatim so callers can distinguish
    /// cases without string matching.
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The request deadline expired before a response arrived.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The outer response body was not valid JSON, or a single-item
    /// response did not match the expected record shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Missing credentials or client construction failure.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Returns the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error is a 404 response.
    ///
    /// Used by the product-detail lookup to turn "missing product"
    /// into an empty result instead of an error.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns true if this is a pre-I/O validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Convert a reqwest error into the matching [`ApiError`] variant.
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_extraction() {
        let err = ApiError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(err.is_not_found());

        let err = ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_non_status_errors_have_no_code() {
        assert_eq!(ApiError::Transport("refused".to_string()).status_code(), None);
        assert_eq!(ApiError::Parse("bad json".to_string()).status_code(), None);
        assert!(!ApiError::Timeout("deadline".to_string()).is_not_found());
    }

    #[test]
    fn test_validation_classification() {
        assert!(ApiError::Validation("limit".to_string()).is_validation());
        assert!(!ApiError::Parse("x".to_string()).is_validation());
    }

    #[test]
    fn test_status_error_keeps_body_verbatim() {
        let err = ApiError::Status {
            status: 401,
            body: r#"{"rCode":"401","rMessage":"Invalid signature"}"#.to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid signature"));
    }
}
