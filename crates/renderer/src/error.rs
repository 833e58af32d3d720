//! Errors talking to the content service.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a request to the content service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connection, timeout, or body decoding failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Unexpected status: 503 Service Unavailable");
    }
}
