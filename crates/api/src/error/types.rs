//! Error type definitions for key operations

use thiserror::Error as ThisError;

/// Primary error type for elliptic-curve key operations
///
/// Every failure is reported synchronously by the call that caused it and
/// leaves the key entity in its prior state.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The caller passed a nonsensical parameter (e.g. `CurveId::None`)
    #[error("invalid argument: {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// The operation needs key material the entity does not hold
    #[error("invalid state: {context}: {message}")]
    InvalidState {
        context: &'static str,
        message: String,
    },

    /// Malformed or wrong-family input during import
    #[error("parse error: {context}: {message}")]
    ParseError {
        context: &'static str,
        message: String,
    },

    /// Curve or algorithm not compiled into this build
    #[error("{feature} is not supported in this build")]
    UnsupportedFeature { feature: &'static str },
}

/// Coarse classification of [`Error`], convenient for matching in callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    ParseError,
    UnsupportedFeature,
}

/// Result type for key operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an [`Error::InvalidArgument`]
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Build an [`Error::InvalidState`]
    pub fn invalid_state(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidState {
            context,
            message: message.into(),
        }
    }

    /// Build an [`Error::ParseError`]
    pub fn parse(context: &'static str, message: impl Into<String>) -> Self {
        Self::ParseError {
            context,
            message: message.into(),
        }
    }

    /// Build an [`Error::UnsupportedFeature`]
    pub fn unsupported(feature: &'static str) -> Self {
        Self::UnsupportedFeature { feature }
    }

    /// The taxonomy class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::ParseError { .. } => ErrorKind::ParseError,
            Self::UnsupportedFeature { .. } => ErrorKind::UnsupportedFeature,
        }
    }

    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::InvalidState { message, .. } => Self::InvalidState { context, message },
            Self::ParseError { message, .. } => Self::ParseError { context, message },
            Self::UnsupportedFeature { feature } => Self::UnsupportedFeature { feature },
        }
    }
}
