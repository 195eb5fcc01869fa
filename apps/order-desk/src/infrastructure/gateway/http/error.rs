//! HTTP gateway error types.

use thiserror::Error;

use crate::application::ports::{GatewayError, TransportFailure};

/// Errors from the HTTP gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpGatewayError {
    /// The configured base URL is not a usable URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL as configured.
        url: String,
        /// Why it was refused.
        reason: String,
    },

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// Connection or protocol failure.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not the JSON we expected.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The service answered with a failure status.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason given by the service.
        detail: Option<String>,
    },
}

impl HttpGatewayError {
    /// Classify a reqwest error.
    pub(super) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<HttpGatewayError> for GatewayError {
    fn from(err: HttpGatewayError) -> Self {
        match err {
            HttpGatewayError::Status { status, detail } => Self::Rejected { status, detail },
            HttpGatewayError::JsonParse(message) => Self::Decode { message },
            other @ (HttpGatewayError::InvalidBaseUrl { .. }
            | HttpGatewayError::Timeout
            | HttpGatewayError::Network(_)) => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

impl From<HttpGatewayError> for TransportFailure {
    fn from(err: HttpGatewayError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_rejected() {
        let err = HttpGatewayError::Status {
            status: 500,
            detail: Some("exchange down".to_string()),
        };
        assert_eq!(
            GatewayError::from(err),
            GatewayError::Rejected {
                status: 500,
                detail: Some("exchange down".to_string())
            }
        );
    }

    #[test]
    fn timeout_maps_to_transport() {
        let gateway_err: GatewayError = HttpGatewayError::Timeout.into();
        assert!(matches!(gateway_err, GatewayError::Transport { .. }));

        let failure: TransportFailure = HttpGatewayError::Timeout.into();
        assert_eq!(failure.message, "request timed out");
    }

    #[test]
    fn json_parse_maps_to_decode() {
        let gateway_err: GatewayError = HttpGatewayError::JsonParse("eof".to_string()).into();
        assert!(matches!(gateway_err, GatewayError::Decode { .. }));
    }
}
