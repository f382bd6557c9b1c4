//! Schnorr signatures with deterministic nonces
//!
//! Signing with private scalar d and public point Q = d·G:
//!
//! 1. k = HMAC-SHA512(d, label ∥ M) mod n
//! 2. R = k·G
//! 3. e = SHA-512(R ∥ M) mod n, with R compressed
//! 4. s = k − e·d mod n
//!
//! Verification recomputes R' = s·G + e·Q and accepts iff
//! SHA-512(R' ∥ M) mod n equals e.

mod signature;

use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use secc_algorithms::ec::{Curve, CurveId, NistP192, NistP224, NistP256, Point, Scalar, Secp160r1, Secp256k1};
use secc_algorithms::{kdf, KeyPair};
use secc_api::error::Error as ApiError;
use secc_api::Signature as SignatureTrait;

use crate::error::{Error, Result};

pub use signature::SchnorrSignature;

/// Schnorr over curve `C`
#[derive(Debug, Clone, Copy, Default)]
pub struct Schnorr<C: Curve>(PhantomData<C>);

impl<C: Curve> Schnorr<C> {
    /// Sign `message` with the private scalar
    pub fn sign_with(secret: &Scalar<C>, message: &[u8]) -> Result<SchnorrSignature<C>> {
        let k = kdf::signing_nonce(secret, message)?;
        let r_bytes = Point::<C>::mul_base(k.as_element()).to_compressed();
        let e = kdf::challenge::<C>(&r_bytes, message);
        let s = k.as_element().sub(&e.mul(secret.as_element()));
        Ok(SchnorrSignature { e, s })
    }

    /// Check a signature; every failure is `false`
    pub fn verify_with(public: &Point<C>, message: &[u8], signature: &SchnorrSignature<C>) -> bool {
        if let Err(e) = public.validate() {
            tracing::warn!(curve = C::PARAMS.name, error = %e, "rejected verification key");
            return false;
        }
        let r_prime = Point::<C>::mul_base(&signature.s).add(&public.mul(&signature.e));
        if bool::from(r_prime.is_identity()) {
            return false;
        }
        let e_prime = kdf::challenge::<C>(&r_prime.to_compressed(), message);
        bool::from(e_prime.ct_eq(&signature.e))
    }

    /// Parse and check an encoded signature
    pub fn verify_bytes(public: &Point<C>, message: &[u8], signature: &[u8]) -> bool {
        match SchnorrSignature::<C>::from_bytes(signature) {
            Ok(sig) => Self::verify_with(public, message, &sig),
            Err(e) => {
                tracing::warn!(curve = C::PARAMS.name, error = %e, "undecodable signature");
                false
            }
        }
    }
}

/// Verification key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SchnorrPublicKey<C: Curve>(Point<C>);

impl<C: Curve> SchnorrPublicKey<C> {
    /// Wrap a point after checking it is usable
    pub fn new(point: Point<C>) -> Result<Self> {
        point.validate()?;
        Ok(SchnorrPublicKey(point))
    }

    /// Parse a compressed point
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(SchnorrPublicKey(Point::from_compressed(bytes)?))
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

impl<C: Curve> fmt::Debug for SchnorrPublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrPublicKey<{}>({:02x?})", C::PARAMS.name, self.to_bytes())
    }
}

/// Signing key
#[derive(Clone)]
pub struct SchnorrSecretKey<C: Curve>(Scalar<C>);

impl<C: Curve> SchnorrSecretKey<C> {
    /// Wrap a private scalar
    pub fn new(secret: Scalar<C>) -> Self {
        SchnorrSecretKey(secret)
    }

    /// The private scalar
    pub fn scalar(&self) -> &Scalar<C> {
        &self.0
    }
}

impl<C: Curve> Zeroize for SchnorrSecretKey<C> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<C: Curve> fmt::Debug for SchnorrSecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchnorrSecretKey").field(&self.0).finish()
    }
}

impl<C: Curve> SignatureTrait for Schnorr<C> {
    type PublicKey = SchnorrPublicKey<C>;
    type SecretKey = SchnorrSecretKey<C>;
    type SignatureData = SchnorrSignature<C>;

    fn name() -> &'static str {
        match C::ID {
            CurveId::Secp160r1 => "Schnorr-secp160r1-SHA512",
            CurveId::NistP192 => "Schnorr-P192-SHA512",
            CurveId::NistP224 => "Schnorr-P224-SHA512",
            CurveId::NistP256 => "Schnorr-P256-SHA512",
            CurveId::Secp256k1 => "Schnorr-secp256k1-SHA512",
        }
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> secc_api::Result<(Self::PublicKey, Self::SecretKey)> {
        let pair = KeyPair::<C>::generate(rng).map_err(|e| ApiError::from(Error::from(e)))?;
        Ok((SchnorrPublicKey(*pair.public()), SchnorrSecretKey(pair.secret().clone())))
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> secc_api::Result<Self::SignatureData> {
        Self::sign_with(&secret_key.0, message).map_err(ApiError::from)
    }

    fn verify(message: &[u8], signature: &Self::SignatureData, public_key: &Self::PublicKey) -> bool {
        Self::verify_with(&public_key.0, message, signature)
    }
}

/// Schnorr over secp160r1
pub type SchnorrSecp160r1 = Schnorr<Secp160r1>;
/// Schnorr over NIST P-192
pub type SchnorrP192 = Schnorr<NistP192>;
/// Schnorr over NIST P-224
pub type SchnorrP224 = Schnorr<NistP224>;
/// Schnorr over NIST P-256
pub type SchnorrP256 = Schnorr<NistP256>;
/// Schnorr over secp256k1
pub type SchnorrSecp256k1 = Schnorr<Secp256k1>;
