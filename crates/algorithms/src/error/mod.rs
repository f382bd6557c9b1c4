//! Error handling for cryptographic primitives

use std::borrow::Cow;

use secc_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Parameter validation error
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Text that is not a valid encoding
    #[error("invalid encoding for {context}: {details}")]
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// Why decoding failed
        details: Cow<'static, str>,
    },

    /// Arithmetic without a defined result, such as inverting zero
    #[error("invalid operand in {operation}: {details}")]
    InvalidOperand {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// A point that must not be used
    #[error("invalid point on {curve}: {reason}")]
    InvalidPoint {
        /// Curve the point was checked against
        curve: &'static str,
        /// Which check failed
        reason: &'static str,
    },

    /// Authentication failure (e.g. MAC tag verification)
    #[error("authentication failed for {algorithm}")]
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// The random number generator returned an error
    #[error("random source failure: {details}")]
    RandomSource {
        /// Error reported by the generator
        details: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::Encoding {
            context,
            details: details.into(),
        }
    }

    /// Shorthand to create an InvalidPoint error
    pub fn point(curve: &'static str, reason: &'static str) -> Self {
        Error::InvalidPoint { curve, reason }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSource {
            details: err.to_string(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => {
                CoreError::malformed("parameter", format!("{}: {}", name, reason))
            }
            Error::Length { context, expected, actual } => CoreError::malformed(
                context,
                format!("expected {} bytes, got {}", expected, actual),
            ),
            Error::Encoding { context, details } => CoreError::malformed(context, details),
            Error::InvalidOperand { operation, details } => {
                CoreError::invalid_operand(operation, details)
            }
            Error::InvalidPoint { curve, reason } => CoreError::invalid_point(curve, reason),
            Error::Authentication { algorithm } => {
                CoreError::authentication(algorithm, "authentication failed")
            }
            Error::RandomSource { details } => CoreError::random_source("rng", details),
        }
    }
}

pub use secc_api::error::ResultExt;

pub mod validate;
