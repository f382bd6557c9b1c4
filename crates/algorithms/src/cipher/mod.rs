//! AES-256 in counter mode
//!
//! The whole 16-byte counter block is a single big-endian 128-bit counter
//! that wraps modulo 2^128, as in NIST SP 800-38A. Keys are single use in
//! ECIES, so the counter starts at zero unless a block is supplied.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256, Block};
use secc_params::sizes::{AES256_KEY_SIZE, AES_BLOCK_SIZE};
use zeroize::Zeroize;

use secc_api::traits::StreamCipher;

use crate::error::{validate, Error, Result};

/// AES-256-CTR keystream generator
pub struct Aes256Ctr {
    cipher: Aes256,
    counter_block: [u8; AES_BLOCK_SIZE],
    keystream: [u8; AES_BLOCK_SIZE],
    keystream_pos: usize,
}

impl Aes256Ctr {
    /// Create a cipher with a zero counter block
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_counter(key, [0u8; AES_BLOCK_SIZE])
    }

    /// Create a cipher starting from an explicit counter block
    pub fn with_counter(key: &[u8], counter_block: [u8; AES_BLOCK_SIZE]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let cipher = Aes256::new_from_slice(key).map_err(|_| Error::Length {
            context: "AES-256 key",
            expected: AES256_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Aes256Ctr {
            cipher,
            counter_block,
            keystream: [0u8; AES_BLOCK_SIZE],
            // forces a fresh block on first use
            keystream_pos: AES_BLOCK_SIZE,
        })
    }

    fn refill(&mut self) {
        let mut block = Block::clone_from_slice(&self.counter_block);
        self.cipher.encrypt_block(&mut block);
        self.keystream.copy_from_slice(&block);
        block.as_mut_slice().zeroize();

        let next = u128::from_be_bytes(self.counter_block).wrapping_add(1);
        self.counter_block = next.to_be_bytes();
        self.keystream_pos = 0;
    }

    /// XOR keystream into `data`, continuing where the previous call stopped
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.keystream_pos == AES_BLOCK_SIZE {
                self.refill();
            }
            *byte ^= self.keystream[self.keystream_pos];
            self.keystream_pos += 1;
        }
    }
}

impl StreamCipher for Aes256Ctr {
    const KEY_SIZE: usize = AES256_KEY_SIZE;

    fn name() -> &'static str {
        "AES-256-CTR"
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> secc_api::Result<()> {
        self.process(data);
        Ok(())
    }
}

impl Drop for Aes256Ctr {
    fn drop(&mut self) {
        self.counter_block.zeroize();
        self.keystream.zeroize();
    }
}
