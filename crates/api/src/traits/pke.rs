//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Public Key Encryption schemes.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey: Zeroize;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: AsRef<[u8]> + Clone;

    /// Returns the PKE algorithm name.
    fn name() -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext message for the recipient's public key.
    ///
    /// A fresh ephemeral key is drawn from `rng` on every call, so two
    /// encryptions of the same plaintext differ.
    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext with the recipient's secret key.
    ///
    /// Returns the plaintext only when the authentication tag verifies;
    /// nothing is decrypted otherwise.
    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &[u8]) -> Result<Vec<u8>>;
}
