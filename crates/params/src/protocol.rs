//! Protocol labels and sizes for key derivation, ECIES and Schnorr

use crate::sizes::{AES256_KEY_SIZE, HMAC_SHA256_KEY_SIZE, SHA256_OUTPUT_SIZE};

/// Domain label prefixed to private material before hashing it to a scalar
pub const KEYGEN_LABEL: &[u8] = b"secc-keygen-v1";

/// Domain label prefixed to the message when deriving a signing nonce
pub const NONCE_LABEL: &[u8] = b"secc-nonce-v1";

/// HKDF info string for ECIES key material
pub const ECIES_KDF_INFO: &[u8] = b"secc-ecies-v1";

/// Length of the key material expanded from the ECIES shared secret
pub const ECIES_KEY_MATERIAL_SIZE: usize = AES256_KEY_SIZE + HMAC_SHA256_KEY_SIZE;

/// Truncated HMAC-SHA256 tag length appended to every ECIES ciphertext
pub const ECIES_TAG_SIZE: usize = 16;

/// Random bytes drawn for the private material of a generated keypair
pub const PRIVATE_MATERIAL_SIZE: usize = 32;

const _: () = assert!(ECIES_TAG_SIZE <= SHA256_OUTPUT_SIZE);
