//! Error types for the spotter client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shared error type for every spotter API operation.
///
/// This is a closed five-way taxonomy: callers (UI layers included) are
/// expected to branch on these variants, so new failure modes are folded
/// into `Other` rather than widening the enum.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// An authenticated operation was attempted with no session present.
    ///
    /// Raised before any request is constructed; no network call is made.
    #[error("no session present; authenticate first")]
    NoAuth,

    /// The server rejected the current session (HTTP 401).
    #[error("server rejected the session")]
    BadAuth,

    /// Any other non-success: a transport-level failure (connectivity,
    /// resolution, timeout) or a non-2xx status.
    #[error("request failed{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Other {
        /// The HTTP status code, when a response was received at all.
        status: Option<u16>,
        message: String,
    },

    /// The server answered with a success status but no usable body.
    #[error("response carried no body where one was expected")]
    BadData,

    /// The body was present but did not match the expected shape.
    #[error("response body could not be decoded: {0}")]
    NoDecode(String),
}

impl ApiError {
    /// Creates an `Other` error from a transport-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Other {
            status: None,
            message: message.into(),
        }
    }

    /// Creates an `Other` error carrying a non-2xx status code.
    pub fn status(status: u16) -> Self {
        Self::Other {
            status: Some(status),
            message: format!("unexpected status {status}"),
        }
    }

    /// Check if this is a missing-session error.
    pub fn is_no_auth(&self) -> bool {
        matches!(self, Self::NoAuth)
    }

    /// Check if this is a rejected-session error.
    pub fn is_bad_auth(&self) -> bool {
        matches!(self, Self::BadAuth)
    }

    /// Check if this is a transport or non-2xx failure.
    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other { .. })
    }

    /// Check if this is a missing-body error.
    pub fn is_bad_data(&self) -> bool {
        matches!(self, Self::BadData)
    }

    /// Check if this is a decode failure.
    pub fn is_no_decode(&self) -> bool {
        matches!(self, Self::NoDecode(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::NoDecode(err.to_string())
    }
}

/// A type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helper_carries_code() {
        let err = ApiError::status(503);
        assert!(err.is_other());
        assert_eq!(
            err,
            ApiError::Other {
                status: Some(503),
                message: "unexpected status 503".to_string(),
            }
        );
    }

    #[test]
    fn test_transport_helper_has_no_status() {
        let err = ApiError::transport("connection refused");
        match err {
            ApiError::Other { status, message } => {
                assert_eq!(status, None);
                assert_eq!(message, "connection refused");
            }
            other => panic!("Expected Other, got {other:?}"),
        }
    }

    #[test]
    fn test_json_error_maps_to_no_decode() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err = ApiError::from(json_err);
        assert!(err.is_no_decode());
    }

    #[test]
    fn test_predicates_are_disjoint() {
        assert!(ApiError::NoAuth.is_no_auth());
        assert!(!ApiError::NoAuth.is_bad_auth());
        assert!(ApiError::BadAuth.is_bad_auth());
        assert!(ApiError::BadData.is_bad_data());
        assert!(!ApiError::BadData.is_no_decode());
    }
}
