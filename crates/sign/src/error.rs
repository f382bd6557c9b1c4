//! Error types for the signature crate

use core::fmt;

use secc_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid signature size
    InvalidSignatureSize {
        /// Expected byte length
        expected: usize,
        /// Received byte length
        actual: usize,
    },

    /// A signature component outside [0, n)
    InvalidSignature(&'static str),

    /// Invalid key
    InvalidKey(String),

    /// Underlying primitive failure
    Primitive(AlgoError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidSignature(msg) => write!(f, "Invalid signature: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::Primitive(err) => write!(f, "Primitive error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::InvalidPoint { .. } => Error::InvalidKey(err.to_string()),
            _ => Error::Primitive(err),
        }
    }
}

// Convert to api::Error
impl From<Error> for secc_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidSignatureSize { expected, actual } => secc_api::Error::malformed(
                "signature",
                format!("expected {} bytes, got {}", expected, actual),
            ),
            Error::InvalidSignature(msg) => secc_api::Error::malformed("signature", msg),
            Error::InvalidKey(msg) => secc_api::Error::invalid_point("sign", msg),
            Error::Primitive(err) => err.into(),
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
