//! Remote API error types.

use thiserror::Error;

/// Failure talking to the remote user API.
///
/// Every variant is terminal for the operation that produced it: no retry,
/// no backoff, and no local state mutation happens on failure.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode response: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a non-2xx status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a body decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether the failure happened before a response arrived.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ApiError::status(500).to_string(), "server returned HTTP 500");
        assert_eq!(ApiError::Timeout.to_string(), "request timed out");
    }

    #[test]
    fn test_transport_classification() {
        assert!(ApiError::Timeout.is_transport_error());
        assert!(ApiError::transport("connection refused").is_transport_error());
        assert!(!ApiError::status(404).is_transport_error());
        assert!(!ApiError::decode("bad json").is_transport_error());
    }
}
