//! Error type definitions for secc operations

use std::string::String;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Internal arithmetic was asked to do something undefined (e.g. invert zero)
    InvalidOperand,
    /// A point is off the curve, outside the subgroup or the identity
    InvalidPoint,
    /// Caller input has the wrong structure, length or alphabet
    MalformedInput,
    /// A ciphertext tag did not verify
    AuthenticationFailure,
    /// The operating-system random source failed
    RandomSourceExhausted,
}

/// Primary error type for secc operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Undefined arithmetic on internal values
    #[error("invalid operand in {context}: {message}")]
    InvalidOperand {
        context: &'static str,
        message: String,
    },

    /// Invalid or unusable curve point
    #[error("invalid point in {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Structurally malformed caller input
    #[error("malformed input for {context}: {message}")]
    MalformedInput {
        context: &'static str,
        message: String,
    },

    /// Authentication tag mismatch
    #[error("authentication failed in {context}: {message}")]
    AuthenticationFailure {
        context: &'static str,
        message: String,
    },

    /// Random source failure
    #[error("random source exhausted in {context}: {message}")]
    RandomSourceExhausted {
        context: &'static str,
        message: String,
    },
}

/// Result type for secc operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for [`Error::InvalidOperand`]
    pub fn invalid_operand(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidOperand { context, message: message.into() }
    }

    /// Shorthand for [`Error::InvalidPoint`]
    pub fn invalid_point(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPoint { context, message: message.into() }
    }

    /// Shorthand for [`Error::MalformedInput`]
    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedInput { context, message: message.into() }
    }

    /// Shorthand for [`Error::AuthenticationFailure`]
    pub fn authentication(context: &'static str, message: impl Into<String>) -> Self {
        Self::AuthenticationFailure { context, message: message.into() }
    }

    /// Shorthand for [`Error::RandomSourceExhausted`]
    pub fn random_source(context: &'static str, message: impl Into<String>) -> Self {
        Self::RandomSourceExhausted { context, message: message.into() }
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperand { .. } => ErrorKind::InvalidOperand,
            Self::InvalidPoint { .. } => ErrorKind::InvalidPoint,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::AuthenticationFailure { .. } => ErrorKind::AuthenticationFailure,
            Self::RandomSourceExhausted { .. } => ErrorKind::RandomSourceExhausted,
        }
    }

    /// Fatal errors indicate a broken invariant or environment and must not be retried.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::InvalidOperand | ErrorKind::RandomSourceExhausted
        )
    }

    /// Where the error was raised
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidOperand { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::MalformedInput { context, .. }
            | Self::AuthenticationFailure { context, .. }
            | Self::RandomSourceExhausted { context, .. } => context,
        }
    }

    /// Human-readable detail
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidOperand { message, .. }
            | Self::InvalidPoint { message, .. }
            | Self::MalformedInput { message, .. }
            | Self::AuthenticationFailure { message, .. }
            | Self::RandomSourceExhausted { message, .. } => message,
        }
    }

    /// Replace the context, keeping kind and message
    pub fn with_context(mut self, new_context: &'static str) -> Self {
        match &mut self {
            Self::InvalidOperand { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::MalformedInput { context, .. }
            | Self::AuthenticationFailure { context, .. }
            | Self::RandomSourceExhausted { context, .. } => *context = new_context,
        }
        self
    }

    /// Replace the message, keeping kind and context
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidOperand { message, .. }
            | Self::InvalidPoint { message, .. }
            | Self::MalformedInput { message, .. }
            | Self::AuthenticationFailure { message, .. }
            | Self::RandomSourceExhausted { message, .. } => *message = new_message.into(),
        }
        self
    }
}
