//! Elliptic Curve Integrated Encryption Scheme (ECIES)
//!
//! Wire format: `R ∥ C ∥ T` where
//!
//! - `R` is the compressed ephemeral point (`field_bytes + 1` bytes),
//! - `C` is the AES-256-CTR encryption of the plaintext (same length),
//! - `T` is HMAC-SHA256(R ∥ C) truncated to 16 bytes.
//!
//! Both symmetric keys come from HKDF-SHA256 over the x-coordinate of the
//! shared point, salted with `R`. The tag is checked before any payload
//! byte is decrypted.

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use secc_algorithms::ec::{Curve, NistP192, NistP224, NistP256, Point, Scalar, Secp160r1, Secp256k1};
use secc_algorithms::{kdf, Aes256Ctr, KeyPair};
use secc_api::error::Error as ApiError;
use secc_api::traits::Pke;
use secc_params::protocol::ECIES_TAG_SIZE;

use crate::error::{Error as PkeError, Result as PkeResult};

/// Borrowed view of the three ciphertext components
#[derive(Clone, Copy, Debug)]
pub(crate) struct EciesCiphertextComponents<'a> {
    pub ephemeral_public_key: &'a [u8],
    pub payload: &'a [u8],
    pub tag: &'a [u8],
}

impl<'a> EciesCiphertextComponents<'a> {
    pub fn split<C: Curve>(bytes: &'a [u8]) -> PkeResult<Self> {
        let point_len = C::point_bytes();
        if bytes.len() < point_len + ECIES_TAG_SIZE {
            return Err(PkeError::InvalidCiphertextFormat(
                "shorter than ephemeral point plus tag",
            ));
        }
        let (ephemeral_public_key, rest) = bytes.split_at(point_len);
        let (payload, tag) = rest.split_at(rest.len() - ECIES_TAG_SIZE);
        Ok(EciesCiphertextComponents {
            ephemeral_public_key,
            payload,
            tag,
        })
    }
}

/// Affine x-coordinate of the shared point, rejecting the identity
fn shared_x<C: Curve>(shared: &Point<C>) -> PkeResult<Zeroizing<Vec<u8>>> {
    match shared.to_affine() {
        Some((x, _)) => Ok(Zeroizing::new(x.to_be_bytes())),
        None => Err(PkeError::DegenerateSharedSecret("ECDH resulted in point at infinity")),
    }
}

/// ECIES over curve `C`
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecies<C: Curve>(PhantomData<C>);

impl<C: Curve> Ecies<C> {
    /// Minimum ciphertext length: the ephemeral point and the tag around an empty payload
    pub fn overhead() -> usize {
        C::point_bytes() + ECIES_TAG_SIZE
    }

    /// Encrypt `plaintext` to `recipient` with a fresh ephemeral key from `rng`
    pub fn encrypt_to<R: RngCore + CryptoRng>(
        recipient: &Point<C>,
        plaintext: &[u8],
        rng: &mut R,
    ) -> PkeResult<Vec<u8>> {
        if let Err(e) = recipient.validate() {
            tracing::warn!(curve = C::PARAMS.name, error = %e, "rejected recipient public key");
            return Err(e.into());
        }
        let ephemeral = Scalar::<C>::random(rng)?;
        Self::encrypt_with_ephemeral(recipient, &ephemeral, plaintext)
    }

    /// Encrypt with a caller-chosen ephemeral scalar; the recipient point must already be validated
    pub(crate) fn encrypt_with_ephemeral(
        recipient: &Point<C>,
        ephemeral: &Scalar<C>,
        plaintext: &[u8],
    ) -> PkeResult<Vec<u8>> {
        let r_bytes = Point::<C>::mul_base(ephemeral.as_element()).to_compressed();
        let z_bytes = shared_x(&recipient.mul(ephemeral.as_element()))?;
        let keys = kdf::derive_ecies_keys(&z_bytes, &r_bytes)?;

        let mut out = Vec::with_capacity(r_bytes.len() + plaintext.len() + ECIES_TAG_SIZE);
        out.extend_from_slice(&r_bytes);
        out.extend_from_slice(plaintext);
        Aes256Ctr::new(keys.cipher_key())?.process(&mut out[r_bytes.len()..]);

        let tag = kdf::mac_tag(keys.mac_key(), &r_bytes, &out[r_bytes.len()..])?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    /// Decrypt `ciphertext` with the recipient's private scalar
    pub fn decrypt_with(secret: &Scalar<C>, ciphertext: &[u8]) -> PkeResult<Vec<u8>> {
        let parts = EciesCiphertextComponents::split::<C>(ciphertext).map_err(|e| {
            tracing::warn!(curve = C::PARAMS.name, len = ciphertext.len(), "ciphertext too short");
            e
        })?;

        let r_point = Point::<C>::from_compressed(parts.ephemeral_public_key).map_err(|e| {
            tracing::warn!(curve = C::PARAMS.name, error = %e, "rejected ephemeral public key");
            PkeError::from(e)
        })?;

        let z_bytes = shared_x(&r_point.mul(secret.as_element())).map_err(|e| {
            tracing::warn!(curve = C::PARAMS.name, "degenerate shared secret");
            e
        })?;
        let keys = kdf::derive_ecies_keys(&z_bytes, parts.ephemeral_public_key)?;

        if let Err(e) = kdf::verify_tag(keys.mac_key(), parts.ephemeral_public_key, parts.payload, parts.tag) {
            tracing::warn!(curve = C::PARAMS.name, "ciphertext tag mismatch");
            return Err(e.into());
        }

        let mut plaintext = parts.payload.to_vec();
        Aes256Ctr::new(keys.cipher_key())?.process(&mut plaintext);
        Ok(plaintext)
    }
}

/// Recipient public key: a validated compressed point
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EciesPublicKey<C: Curve>(Point<C>);

impl<C: Curve> EciesPublicKey<C> {
    /// Wrap a point after checking it is usable
    pub fn new(point: Point<C>) -> PkeResult<Self> {
        point.validate()?;
        Ok(EciesPublicKey(point))
    }

    /// Parse a compressed point
    pub fn from_bytes(bytes: &[u8]) -> PkeResult<Self> {
        Ok(EciesPublicKey(Point::from_compressed(bytes)?))
    }

    /// Compressed encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed()
    }

    /// The underlying point
    pub fn point(&self) -> &Point<C> {
        &self.0
    }
}

impl<C: Curve> fmt::Debug for EciesPublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EciesPublicKey<{}>({:02x?})", C::PARAMS.name, self.to_bytes())
    }
}

/// Recipient secret key
#[derive(Clone)]
pub struct EciesSecretKey<C: Curve>(Scalar<C>);

impl<C: Curve> EciesSecretKey<C> {
    /// Wrap a private scalar
    pub fn new(secret: Scalar<C>) -> Self {
        EciesSecretKey(secret)
    }

    /// The private scalar
    pub fn scalar(&self) -> &Scalar<C> {
        &self.0
    }
}

impl<C: Curve> Zeroize for EciesSecretKey<C> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<C: Curve> fmt::Debug for EciesSecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EciesSecretKey").field(&self.0).finish()
    }
}

impl<C: Curve> Pke for Ecies<C> {
    type PublicKey = EciesPublicKey<C>;
    type SecretKey = EciesSecretKey<C>;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        match C::ID {
            secc_algorithms::CurveId::Secp160r1 => "ECIES-secp160r1-HKDF-SHA256-AES256CTR-HMAC",
            secc_algorithms::CurveId::NistP192 => "ECIES-P192-HKDF-SHA256-AES256CTR-HMAC",
            secc_algorithms::CurveId::NistP224 => "ECIES-P224-HKDF-SHA256-AES256CTR-HMAC",
            secc_algorithms::CurveId::NistP256 => "ECIES-P256-HKDF-SHA256-AES256CTR-HMAC",
            secc_algorithms::CurveId::Secp256k1 => "ECIES-secp256k1-HKDF-SHA256-AES256CTR-HMAC",
        }
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> secc_api::Result<(Self::PublicKey, Self::SecretKey)> {
        let pair = KeyPair::<C>::generate(rng).map_err(|e| ApiError::from(PkeError::from(e)))?;
        Ok((EciesPublicKey(*pair.public()), EciesSecretKey(pair.secret().clone())))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> secc_api::Result<Self::Ciphertext> {
        Self::encrypt_to(&pk_recipient.0, plaintext, rng).map_err(ApiError::from)
    }

    fn decrypt(sk_recipient: &Self::SecretKey, ciphertext: &[u8]) -> secc_api::Result<Vec<u8>> {
        Self::decrypt_with(&sk_recipient.0, ciphertext).map_err(ApiError::from)
    }
}

/// ECIES over secp160r1
pub type EciesSecp160r1 = Ecies<Secp160r1>;
/// ECIES over NIST P-192
pub type EciesP192 = Ecies<NistP192>;
/// ECIES over NIST P-224
pub type EciesP224 = Ecies<NistP224>;
/// ECIES over NIST P-256
pub type EciesP256 = Ecies<NistP256>;
/// ECIES over secp256k1
pub type EciesSecp256k1 = Ecies<Secp256k1>;
