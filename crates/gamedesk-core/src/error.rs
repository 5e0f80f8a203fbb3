//! Error types shared by the request client, the session guard and the
//! typed API layer.
//!
//! - [`StatusError`] - the single error every backend call resolves to
//! - [`ErrorKind`] - classification callers match on
//! - [`TransportError`] - lower-level failures before a status is known
//! - [`StorageError`] - durable credential storage failures

use thiserror::Error;

/// Status used when a failure never produced an HTTP status.
pub const GENERIC_FAILURE_STATUS: u16 = 500;

/// Message used when a failing response carried an empty body.
pub const REQUEST_FAILED_MESSAGE: &str = "Request failed";

/// Message used when a lower-level failure carried no description.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// How a caller should react to a [`StatusError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401: the credential is no longer valid.
    Unauthorized,
    /// 404: the requested entity does not exist.
    NotFound,
    /// Any other 4xx, shown verbatim to the user.
    Client,
    /// 5xx, network or decoding failures.
    Server,
}

impl ErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            400..=499 => Self::Client,
            _ => Self::Server,
        }
    }
}

/// Typed error carrying a human-readable message and a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (status {status})")]
pub struct StatusError {
    pub message: String,
    pub status: u16,
}

impl StatusError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Build the error for a non-success response from its body text.
    pub fn from_response(body: &str, status: u16) -> Self {
        let message = if body.trim().is_empty() {
            REQUEST_FAILED_MESSAGE
        } else {
            body
        };
        Self::new(message, status)
    }

    /// Wrap a failure that happened below the HTTP layer.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::new(UNEXPECTED_ERROR_MESSAGE, GENERIC_FAILURE_STATUS)
        } else {
            Self::new(message, GENERIC_FAILURE_STATUS)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Unauthorized
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Text suitable for a user-facing notification.
    ///
    /// Server failures with an empty message fall back to a generic text.
    pub fn user_message(&self) -> &str {
        if self.message.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl From<TransportError> for StatusError {
    fn from(err: TransportError) -> Self {
        Self::unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(format!("JSON parse error: {err}"))
    }
}

/// Failures raised by a transport before a response status was read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Browser window or fetch API not available.
    #[error("browser fetch API not available")]
    Unavailable,
    /// The request could not be constructed.
    #[error("failed to build request: {0}")]
    Build(String),
    /// The request was sent but failed (DNS, CORS, connection reset).
    #[error("{0}")]
    Network(String),
    /// The response body could not be read.
    #[error("failed to read response: {0}")]
    Body(String),
}

/// Durable credential storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage backend not available (private mode, no window).
    #[error("credential storage not available")]
    Unavailable,
    /// Failed to write the credential.
    #[error("failed to save credential")]
    SaveFailed,
    /// Failed to remove the credential.
    #[error("failed to remove credential")]
    RemoveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_status() {
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(400), ErrorKind::Client);
        assert_eq!(ErrorKind::from_status(422), ErrorKind::Client);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Server);
    }

    #[test]
    fn test_from_response_uses_body() {
        let err = StatusError::from_response("boom", 500);
        assert_eq!(err, StatusError::new("boom", 500));
    }

    #[test]
    fn test_from_response_empty_body_falls_back() {
        let err = StatusError::from_response("", 403);
        assert_eq!(err.message, REQUEST_FAILED_MESSAGE);
        assert_eq!(err.status, 403);
        assert_eq!(err.kind(), ErrorKind::Client);
    }

    #[test]
    fn test_transport_error_becomes_server_error() {
        let err: StatusError = TransportError::Network("connection refused".into()).into();
        assert_eq!(err.status, GENERIC_FAILURE_STATUS);
        assert_eq!(err.message, "connection refused");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn test_unexpected_without_message() {
        let err = StatusError::unexpected("  ");
        assert_eq!(err.message, UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(err.status, 500);
    }

    #[test]
    fn test_display_includes_status() {
        let err = StatusError::new("Unauthenticated.", 401);
        assert_eq!(err.to_string(), "Unauthenticated. (status 401)");
        assert!(err.is_unauthorized());
        assert!(!err.is_not_found());
    }
}
