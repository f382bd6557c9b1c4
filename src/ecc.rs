//! Text-in, text-out facade over the ECIES and Schnorr engines
//!
//! Keys and signatures cross this boundary as fixed-width codec text.
//! Ciphertexts are raw bytes; [`encode_ciphertext`] and
//! [`decode_ciphertext`] give them a printable form.

use core::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use secc_algorithms::codec;
use secc_algorithms::ec::{Curve, DefaultCurve, KeyPair, Point, Scalar};
use secc_algorithms::kdf::hash_to_scalar;
use secc_api::{
    Error, PrivateKeyText, PublicKeyText, Result, ResultExt, SecretBytes, SignatureText,
};
use secc_params::protocol::{ECIES_TAG_SIZE, PRIVATE_MATERIAL_SIZE};
use secc_pke::Ecies;
use secc_sign::{Schnorr, SchnorrSignature};

fn require_input(context: &'static str, bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::malformed(context, "input is empty"));
    }
    Ok(())
}

fn decode_public<C: Curve>(text: &PublicKeyText) -> Result<Point<C>> {
    let bytes = codec::decode_fixed(text.as_str(), C::point_bytes())
        .with_context("public key text")?;
    Point::<C>::from_compressed(&bytes).map_err(|e| {
        tracing::warn!(curve = C::PARAMS.name, error = %e, "rejected public key text");
        Error::from(e)
    })
}

fn encode_public<C: Curve>(point: &Point<C>) -> PublicKeyText {
    PublicKeyText::new(codec::encode_fixed(&point.to_compressed()))
}

/// Keys for one party on curve `C`.
///
/// Either half may be absent. Operations that need a missing half fail with
/// [`secc_api::ErrorKind::MalformedInput`].
pub struct Ecc<C: Curve = DefaultCurve> {
    private: Option<PrivateKeyText>,
    public: Option<Point<C>>,
}

impl<C: Curve> Ecc<C> {
    /// Both halves; the public key text is decoded and validated here.
    ///
    /// The two halves are not checked against each other.
    pub fn new(private: impl Into<PrivateKeyText>, public: &PublicKeyText) -> Result<Self> {
        let private = private.into();
        require_input("private key", private.as_bytes())?;
        Ok(Ecc {
            private: Some(private),
            public: Some(decode_public(public)?),
        })
    }

    /// A verification and encryption context
    pub fn from_public(public: &PublicKeyText) -> Result<Self> {
        Ok(Ecc {
            private: None,
            public: Some(decode_public(public)?),
        })
    }

    /// A signing context
    pub fn from_private(private: impl Into<PrivateKeyText>) -> Result<Self> {
        let private = private.into();
        require_input("private key", private.as_bytes())?;
        Ok(Ecc {
            private: Some(private),
            public: None,
        })
    }

    /// Draw 32 bytes of private material from the OS and return both keys as text
    pub fn generate_keypair() -> Result<(PrivateKeyText, PublicKeyText)> {
        Self::generate_keypair_with(&mut OsRng)
    }

    /// [`Ecc::generate_keypair`] with an explicit random source
    pub fn generate_keypair_with<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> Result<(PrivateKeyText, PublicKeyText)> {
        let material = SecretBytes::<PRIVATE_MATERIAL_SIZE>::try_random(rng)?;
        let private = PrivateKeyText::new(codec::encode_fixed(material.as_ref()));
        let public = Self::public_keygen(&private)?;
        tracing::debug!(curve = C::PARAMS.name, "generated keypair");
        Ok((private, public))
    }

    /// Public key text for any private material; deterministic
    pub fn public_keygen(private: &PrivateKeyText) -> Result<PublicKeyText> {
        require_input("private key", private.as_bytes())?;
        Ok(encode_public(&KeyPair::<C>::derive_public(private.as_bytes())))
    }

    /// The public key text, if this context has one
    pub fn public_key(&self) -> Option<PublicKeyText> {
        self.public.as_ref().map(encode_public)
    }

    fn require_public(&self, operation: &'static str) -> Result<&Point<C>> {
        self.public
            .as_ref()
            .ok_or_else(|| Error::malformed(operation, "no public key supplied"))
    }

    fn require_private(&self, operation: &'static str) -> Result<Scalar<C>> {
        self.private
            .as_ref()
            .map(|text| hash_to_scalar::<C>(text.as_bytes()))
            .ok_or_else(|| Error::malformed(operation, "no private key supplied"))
    }

    /// Encrypt to this context's public key with a fresh OS-drawn ephemeral key
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_with(plaintext, &mut OsRng)
    }

    /// [`Ecc::encrypt`] with an explicit random source
    pub fn encrypt_with<R: CryptoRng + RngCore>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        require_input("encrypt", plaintext)?;
        let public = self.require_public("encrypt")?;
        Ok(Ecies::<C>::encrypt_to(public, plaintext, rng)?)
    }

    /// Decrypt a ciphertext addressed to this context; both halves are required
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        require_input("decrypt", ciphertext)?;
        self.require_public("decrypt")?;
        let secret = self.require_private("decrypt")?;
        Ok(Ecies::<C>::decrypt_with(&secret, ciphertext)?)
    }

    /// Sign `message`, returning fixed-width signature text
    pub fn sign(&self, message: &[u8]) -> Result<SignatureText> {
        require_input("sign", message)?;
        let secret = self.require_private("sign")?;
        let signature = Schnorr::<C>::sign_with(&secret, message)?;
        Ok(SignatureText::new(codec::encode_fixed(&signature.to_bytes())))
    }

    /// Verify signature text against this context's public key.
    ///
    /// Text that does not decode to a signature is `Ok(false)`; only missing
    /// inputs are errors.
    pub fn verify(&self, message: &[u8], signature: &SignatureText) -> Result<bool> {
        require_input("verify", message)?;
        let public = self.require_public("verify")?;
        let bytes = match codec::decode_fixed(signature.as_str(), SchnorrSignature::<C>::byte_len()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(curve = C::PARAMS.name, error = %e, "undecodable signature text");
                return Ok(false);
            }
        };
        Ok(Schnorr::<C>::verify_bytes(public, message, &bytes))
    }
}

impl<C: Curve> fmt::Debug for Ecc<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ecc")
            .field("curve", &C::PARAMS.name)
            .field("private", &self.private)
            .field("public", &self.public_key())
            .finish()
    }
}

/// Printable form of a raw ciphertext.
///
/// The radix conversion is quadratic in the ciphertext length. Kilobyte
/// payloads are cheap; megabyte payloads take seconds and are better kept
/// as raw bytes.
pub fn encode_ciphertext(ciphertext: &[u8]) -> String {
    codec::encode(ciphertext)
}

/// Parse the printable form of a ciphertext on curve `C`, rejecting text
/// that decodes to fewer bytes than an ephemeral point and a tag.
///
/// Quadratic in the text length, like [`encode_ciphertext`].
pub fn decode_ciphertext<C: Curve>(text: &str) -> Result<Vec<u8>> {
    let bytes = codec::decode(text)?;
    let min = C::point_bytes() + ECIES_TAG_SIZE;
    if bytes.len() < min {
        return Err(Error::malformed(
            "ciphertext text",
            format!("decodes to {} bytes, need at least {}", bytes.len(), min),
        ));
    }
    Ok(bytes)
}

/// Random keypair on the default curve
pub fn generate_keypair() -> Result<(PrivateKeyText, PublicKeyText)> {
    Ecc::<DefaultCurve>::generate_keypair()
}

/// Public key text for private material on the default curve
pub fn public_keygen(private_key: &PrivateKeyText) -> Result<PublicKeyText> {
    Ecc::<DefaultCurve>::public_keygen(private_key)
}

/// Encrypt to a public key on the default curve
pub fn encrypt(plaintext: &[u8], public_key: &PublicKeyText) -> Result<Vec<u8>> {
    Ecc::<DefaultCurve>::from_public(public_key)?.encrypt(plaintext)
}

/// Decrypt with a key pair on the default curve
pub fn decrypt(
    ciphertext: &[u8],
    private_key: &PrivateKeyText,
    public_key: &PublicKeyText,
) -> Result<Vec<u8>> {
    Ecc::<DefaultCurve>::new(private_key.clone(), public_key)?.decrypt(ciphertext)
}

/// Sign with a private key on the default curve
pub fn sign(message: &[u8], private_key: &PrivateKeyText) -> Result<SignatureText> {
    Ecc::<DefaultCurve>::from_private(private_key.clone())?.sign(message)
}

/// Verify signature text on the default curve
pub fn verify(message: &[u8], signature: &SignatureText, public_key: &PublicKeyText) -> Result<bool> {
    Ecc::<DefaultCurve>::from_public(public_key)?.verify(message, signature)
}
