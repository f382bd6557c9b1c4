//! Digital Signature Schemes
//!
//! Schnorr signatures over the curves registered in `secc-algorithms`,
//! with deterministic nonces and `e ∥ s` encoding.

pub mod error;
pub mod schnorr;

pub use error::{Error, Result};
pub use schnorr::{
    Schnorr, SchnorrP192, SchnorrP224, SchnorrP256, SchnorrPublicKey, SchnorrSecp160r1,
    SchnorrSecp256k1, SchnorrSecretKey, SchnorrSignature,
};
