use cardpanel_core::Error;
use thiserror::Error;

/// Errors that can occur while talking to the device
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connection or protocol failure below the API level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// No response within the configured timeout
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// The device answered with an error
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The device answered with a body the panel cannot interpret
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// The configured device address is unusable
    #[error("Invalid device URL: {0}")]
    InvalidUrl(String),
}

impl From<ServiceError> for Error {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Api { status, message } => Error::Transport {
                status: Some(status),
                message,
            },
            ServiceError::InvalidUrl(url) => Error::Config(format!("Invalid device URL: {url}")),
            other => Error::transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status() {
        let err: Error = ServiceError::Api {
            status: 404,
            message: "Card ID 5 not found".to_string(),
        }
        .into();
        assert_eq!(
            err,
            Error::Transport {
                status: Some(404),
                message: "Card ID 5 not found".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Card ID 5 not found");
    }

    #[test]
    fn test_timeout_becomes_transport() {
        let err: Error = ServiceError::Timeout(3000).into();
        assert_eq!(err.to_string(), "Request timeout after 3000ms");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_invalid_url_becomes_config() {
        let err: Error = ServiceError::InvalidUrl("ftp://x".to_string()).into();
        assert!(matches!(err, Error::Config(_)));
    }
}
