//! # secc
//!
//! Elliptic-curve encryption and signatures with printable keys.
//!
//! ## Usage
//!
//! ```no_run
//! let (private, public) = secc::generate_keypair()?;
//!
//! let ciphertext = secc::encrypt(b"attack at dawn", &public)?;
//! assert_eq!(secc::decrypt(&ciphertext, &private, &public)?, b"attack at dawn");
//!
//! let signature = secc::sign(b"attack at dawn", &private)?;
//! assert!(secc::verify(b"attack at dawn", &signature, &public)?);
//! # Ok::<(), secc::api::Error>(())
//! ```
//!
//! Other curves are selected with the type parameter of [`Ecc`]:
//!
//! ```no_run
//! use secc::{algorithms::ec::NistP256, Ecc};
//!
//! let (private, public) = Ecc::<NistP256>::generate_keypair()?;
//! let ecc = Ecc::<NistP256>::new(private, &public)?;
//! let signature = ecc.sign(b"hello")?;
//! assert!(ecc.verify(b"hello", &signature)?);
//! # Ok::<(), secc::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for [`PublicKeyText`] and [`SignatureText`]
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `secc-api`: error type, traits and key text types
//! - `secc-params`: curve domain parameters and protocol constants
//! - `secc-algorithms`: field and curve arithmetic, codec, AES-CTR, KDFs
//! - `secc-pke`: ECIES
//! - `secc-sign`: Schnorr signatures

#![forbid(unsafe_code)]

// Core re-exports
pub use secc_algorithms as algorithms;
pub use secc_api as api;
pub use secc_params as params;
pub use secc_pke as pke;
pub use secc_sign as sign;

mod ecc;

pub use ecc::{
    decode_ciphertext, decrypt, encode_ciphertext, encrypt, generate_keypair, public_keygen, sign,
    verify, Ecc,
};
pub use secc_algorithms::ec::{Curve, CurveId, DefaultCurve};
pub use secc_api::{PrivateKeyText, PublicKeyText, SignatureText};

/// Build the constant tables of every registered curve.
///
/// Optional: each curve initialises itself on first use. Calling this up
/// front moves that cost out of the first operation. Idempotent.
pub fn init() {
    secc_algorithms::ec::init_all();
    tracing::debug!("secc curve tables ready");
}

/// Common imports for secc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{Pke, Signature, StreamCipher};

    // Re-export key text types
    pub use crate::api::{PrivateKeyText, PublicKeyText, SignatureText};

    // Facade and curves
    pub use crate::algorithms::ec::{
        Curve, CurveId, DefaultCurve, NistP192, NistP224, NistP256, Secp160r1, Secp256k1,
    };
    pub use crate::Ecc;
}
