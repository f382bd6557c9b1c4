//! Constant-time elliptic curve primitives for the secc library
//!
//! This crate holds everything below the protocol layer:
//!
//! - [`field`]: Montgomery arithmetic over the base and scalar fields
//! - [`ec`]: curve registry, projective points, scalars and key pairs
//! - [`codec`]: the printable base-90 text codec
//! - [`cipher`]: AES-256 in counter mode
//! - [`kdf`]: hash-to-scalar, signing nonces, challenges and ECIES keys
//!
//! Secret-dependent code paths (field arithmetic, scalar multiplication,
//! tag comparison) run in constant time. The codec handles public data only.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

pub mod field;
pub use field::{FieldElement, FieldParams};

pub mod ec;
pub use ec::{Curve, CurveId, DefaultCurve, KeyPair, Point, Scalar};

pub mod codec;

pub mod cipher;
pub use cipher::Aes256Ctr;

pub mod kdf;
