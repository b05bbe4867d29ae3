use std::fmt;
use thiserror::Error;

/// The error type for ptvsign operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration is missing fields or carries invalid values
    ConfigInvalid,

    /// Credentials are missing or malformed
    CredentialInvalid,

    /// Request cannot be built (bad path, reserved parameter, etc.)
    RequestInvalid,

    /// A transport mode name is not part of the known mode table
    ModeInvalid,

    /// Network failure or non-success HTTP status from the service
    TransportFailed,

    /// Response body is not the JSON the caller asked for
    DecodeFailed,

    /// Unexpected errors (I/O, internal invariant violations, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised before any network traffic happened
    pub fn is_local_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ConfigInvalid
                | ErrorKind::CredentialInvalid
                | ErrorKind::RequestInvalid
                | ErrorKind::ModeInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a mode invalid error
    pub fn mode_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ModeInvalid, message)
    }

    /// Create a transport failed error
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFailed, message)
    }

    /// Create a decode failed error
    pub fn decode_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecodeFailed, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ModeInvalid => write!(f, "invalid transport mode"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
            ErrorKind::DecodeFailed => write!(f, "decode failed"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::decode_failed(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_preserved() {
        let err = Error::transport_failed("GET /v3/route_types returned 403");
        assert_eq!(err.kind(), ErrorKind::TransportFailed);
        assert_eq!(err.to_string(), "GET /v3/route_types returned 403");
    }

    #[test]
    fn test_local_errors() {
        assert!(Error::config_invalid("x").is_local_error());
        assert!(Error::credential_invalid("x").is_local_error());
        assert!(Error::request_invalid("x").is_local_error());
        assert!(Error::mode_invalid("x").is_local_error());
        assert!(!Error::transport_failed("x").is_local_error());
        assert!(!Error::decode_failed("x").is_local_error());
    }
}
