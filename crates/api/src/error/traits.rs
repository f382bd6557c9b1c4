//! Context helpers for results crossing into the public error type

use super::types::{Error, Result};

/// Relabel the error of a result while converting it to [`Error`]
pub trait ResultExt<T> {
    /// Replace the error's context, keeping its kind and message
    fn with_context(self, context: &'static str) -> Result<T>;

    /// Replace the error's message, keeping its kind and context
    fn with_message(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_message(message))
    }
}
