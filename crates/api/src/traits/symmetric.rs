//! Symmetric cipher traits

use crate::Result;

/// A keystream cipher that encrypts and decrypts in place
pub trait StreamCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// XOR the next keystream bytes into `data`
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt a buffer in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Decrypt a buffer in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }
}
