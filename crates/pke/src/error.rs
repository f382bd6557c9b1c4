//! Error handling for PKE operations.

use core::fmt;

use secc_algorithms::error::Error as PrimitiveError;
use secc_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// Failure reported by a primitive
    Primitive(PrimitiveError),
    /// Failure reported through the public API
    Api(CoreError),
    /// Ciphertext bytes that do not split into point, payload and tag
    InvalidCiphertextFormat(&'static str),
    /// ECDH produced the identity
    DegenerateSharedSecret(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
            Error::DegenerateSharedSecret(reason) => {
                write!(f, "PKE shared secret is degenerate: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidCiphertextFormat(reason) => CoreError::malformed("ECIES", reason),
            Error::DegenerateSharedSecret(reason) => CoreError::invalid_point("ECIES", reason),
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
