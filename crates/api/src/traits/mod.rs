//! Trait definitions implemented by the secc engines

pub mod pke;
pub mod signature;
pub mod symmetric;

pub use pke::Pke;
pub use signature::Signature;
pub use symmetric::StreamCipher;
