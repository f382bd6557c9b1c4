//! Secret scalar values

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Error, Result};
use crate::field::MAX_BYTES;

use super::curve::{Curve, OrderElement};

/// Upper bound on rejection-sampling rounds before the source is declared broken.
///
/// Each round succeeds with probability above 1/2 on every registered curve.
const MAX_SAMPLING_ROUNDS: usize = 256;

/// Private scalar: an integer in [1, n−1], zeroed on drop
pub struct Scalar<C: Curve>(OrderElement<C>);

impl<C: Curve> Scalar<C> {
    /// Draw a uniform scalar in [1, n−1] by rejection sampling
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let len = C::order_bytes();
        let excess_bits = len * 8 - C::PARAMS.n.bits;
        let mut buf = Zeroizing::new([0u8; MAX_BYTES]);
        for _ in 0..MAX_SAMPLING_ROUNDS {
            rng.try_fill_bytes(&mut buf[..len])?;
            buf[0] &= 0xff >> excess_bits;
            let candidate = OrderElement::<C>::from_be_bytes_ct(&buf[..len]);
            let valid = candidate.is_some() & !candidate.unwrap_or(OrderElement::<C>::zero()).is_zero();
            if bool::from(valid) {
                return Ok(Scalar(candidate.unwrap_or(OrderElement::<C>::zero())));
            }
        }
        Err(Error::RandomSource {
            details: "scalar rejection sampling did not terminate".into(),
        })
    }

    /// Reduce 64 uniformly distributed bytes mod n, mapping zero to one
    pub fn from_wide_bytes(wide: &[u8; 2 * MAX_BYTES]) -> Self {
        let reduced = OrderElement::<C>::from_be_bytes_wide(wide);
        let one = OrderElement::<C>::one();
        Scalar(OrderElement::<C>::conditional_select(&reduced, &one, reduced.is_zero()))
    }

    /// Wrap a field element, rejecting zero
    pub fn from_element(element: OrderElement<C>) -> Result<Self> {
        validate::nonzero("scalar", element.is_zero())?;
        Ok(Scalar(element))
    }

    /// Parse a big-endian scalar of exactly `order_bytes` bytes
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("scalar", bytes.len(), C::order_bytes())?;
        let element = OrderElement::<C>::from_be_bytes(bytes)?;
        Self::from_element(element)
    }

    /// Big-endian encoding, `order_bytes` long
    pub fn to_be_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_be_bytes())
    }

    /// The underlying element of the scalar field
    pub fn as_element(&self) -> &OrderElement<C> {
        &self.0
    }
}

impl<C: Curve> Clone for Scalar<C> {
    fn clone(&self) -> Self {
        Scalar(self.0)
    }
}

impl<C: Curve> ConstantTimeEq for Scalar<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<C: Curve> PartialEq for Scalar<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for Scalar<C> {}

impl<C: Curve> Zeroize for Scalar<C> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<C: Curve> Drop for Scalar<C> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<C: Curve> ZeroizeOnDrop for Scalar<C> {}

impl<C: Curve> fmt::Debug for Scalar<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>[REDACTED]", C::PARAMS.name)
    }
}
