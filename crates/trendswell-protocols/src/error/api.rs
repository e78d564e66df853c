//! Remote API errors.

use thiserror::Error;

use super::TransportError;

/// Uniform wrapper for failed backend calls: either the transport gave up,
/// or the backend answered with a non-success status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error: HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to encode request body: {0}")]
    Encode(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = ApiError::Status {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("forbidden"));
    }

    #[test]
    fn test_api_error_from_transport() {
        let err: ApiError = TransportError::Network("timed out".to_string()).into();
        assert!(err.to_string().contains("timed out"));
    }
}
