//! Public API traits and types for the secc library
//!
//! This crate provides the public API surface for the secc ecosystem: the
//! error type shared by every layer, the engine traits and the text types
//! that cross the library boundary.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};
pub use types::*;

pub use traits::{Pke, Signature, StreamCipher};
