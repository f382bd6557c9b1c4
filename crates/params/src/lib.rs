//! Constant values for secc cryptographic operations
//!
//! Curve domain parameters, protocol labels and the sizes shared by the
//! algorithm, encryption and signature crates.

#![no_std]

pub mod codec;
pub mod curves;
pub mod protocol;
pub mod sizes;

pub use curves::{EcParams, Modulus};
