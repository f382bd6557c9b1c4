//! Elliptic curve groups over prime fields
//!
//! Points use projective coordinates with complete addition formulas;
//! scalar multiplication runs a fixed 4-bit window.

pub mod curve;
pub mod keys;
pub mod point;
pub mod scalar;

pub use curve::{
    init_all, BaseElement, Curve, CurveId, DefaultCurve, NistP192, NistP224, NistP256,
    OrderElement, Secp160r1, Secp256k1,
};
pub use keys::KeyPair;
pub use point::Point;
pub use scalar::Scalar;
