//! Digest, cipher and MAC sizes used by the protocol layers

/// SHA-256 digest length, the untruncated HMAC-SHA256 tag
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-512 digest length; hash-to-scalar and nonce outputs are reduced from this many bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// AES-256 key length
pub const AES256_KEY_SIZE: usize = 32;

/// AES block and CTR counter length
pub const AES_BLOCK_SIZE: usize = 16;

/// Length of the ECIES MAC key
pub const HMAC_SHA256_KEY_SIZE: usize = 32;
