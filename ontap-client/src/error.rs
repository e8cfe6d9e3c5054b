//! Error types for the ONTAP client

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the management API
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The query succeeded but matched no record
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client could not be configured
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Errors raised while driving an asynchronous job to completion
///
/// A job that ends in `failure` or runs past the timeout is not an error; it
/// is reported through [`crate::PollResult`].
#[derive(Debug, Error)]
pub enum PollError {
    /// Poll interval or timeout is not usable
    #[error("Invalid poll settings: {0}")]
    InvalidSettings(String),

    /// The mutating request that should have produced a job failed
    #[error("Failed to submit job: {0}")]
    Submit(#[from] ClientError),

    /// Fetching the job state failed; polling stopped
    #[error("Failed to fetch state of job {job_uuid}: {source}")]
    Fetch {
        job_uuid: Uuid,
        #[source]
        source: ClientError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(ClientError::NotFound("qtree".into()).is_not_found());
        assert!(ClientError::api_error(404, "entry doesn't exist").is_not_found());
        assert!(ClientError::api_error(403, "forbidden").is_client_error());
        assert!(!ClientError::api_error(403, "forbidden").is_server_error());
        assert!(ClientError::api_error(503, "busy").is_server_error());
        assert!(!ClientError::ParseError("bad".into()).is_client_error());
    }

    #[test]
    fn test_fetch_error_message_names_job() {
        let job_uuid = Uuid::parse_str("b89bc5dd-94a3-11e8-a7a3-0050568edf84").unwrap();
        let err = PollError::Fetch {
            job_uuid,
            source: ClientError::api_error(500, "internal"),
        };
        let message = err.to_string();
        assert!(message.contains("b89bc5dd-94a3-11e8-a7a3-0050568edf84"));
        assert!(message.contains("status 500"));
    }
}
