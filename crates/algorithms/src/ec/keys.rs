//! Key pairs: one private scalar and its public point

use core::fmt;

use rand::{CryptoRng, RngCore};

use crate::error::Result;
use crate::kdf::hash_to_scalar;

use super::curve::Curve;
use super::point::Point;
use super::scalar::Scalar;

/// A private scalar d and public point Q = d·G.
///
/// Immutable after creation; the scalar is wiped when the pair is dropped.
pub struct KeyPair<C: Curve> {
    secret: Scalar<C>,
    public: Point<C>,
}

impl<C: Curve> KeyPair<C> {
    /// Generate a keypair with a uniform scalar from `rng`
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let secret = Scalar::random(rng)?;
        tracing::debug!(curve = C::PARAMS.name, "generated random keypair");
        Ok(Self::from_scalar(secret))
    }

    /// Build the pair for a known scalar
    pub fn from_scalar(secret: Scalar<C>) -> Self {
        let public = Point::mul_base(secret.as_element());
        KeyPair { secret, public }
    }

    /// Derive the pair deterministically from arbitrary private material
    pub fn from_material(private_material: &[u8]) -> Self {
        Self::from_scalar(hash_to_scalar::<C>(private_material))
    }

    /// Public point for private material; the same input always gives the same point
    pub fn derive_public(private_material: &[u8]) -> Point<C> {
        Self::from_material(private_material).public
    }

    /// Pair known private material with a compressed public point.
    ///
    /// The two halves are not cross-checked here; see [`KeyPair::is_consistent`].
    pub fn load(private_material: &[u8], public_encoding: &[u8]) -> Result<Self> {
        let public = Point::from_compressed(public_encoding)?;
        Ok(KeyPair {
            secret: hash_to_scalar::<C>(private_material),
            public,
        })
    }

    /// The private scalar
    pub fn secret(&self) -> &Scalar<C> {
        &self.secret
    }

    /// The public point
    pub fn public(&self) -> &Point<C> {
        &self.public
    }

    /// Does the stored public point equal d·G?
    pub fn is_consistent(&self) -> bool {
        Point::mul_base(self.secret.as_element()) == self.public
    }
}

impl<C: Curve> fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret", &self.secret)
            .field("public", &self.public)
            .finish()
    }
}
