//! Error handling for the secc ecosystem

pub mod traits;
pub mod types;

pub use types::{Error, ErrorKind, Result};

pub use traits::ResultExt;
