//! Public Key Encryption (PKE) schemes for the secc library.
//!
//! One scheme is provided: ECIES over any registered curve, with an
//! HKDF-SHA256 key schedule, AES-256-CTR and a truncated HMAC-SHA256 tag.

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{
    Ecies, EciesP192, EciesP224, EciesP256, EciesPublicKey, EciesSecp160r1, EciesSecp256k1,
    EciesSecretKey,
};
pub use error::{Error, Result};
