//! Schnorr signature value and its byte encoding

use core::fmt;

use secc_algorithms::ec::{Curve, OrderElement};

use crate::error::{Error, Result};

/// A signature (e, s): challenge and response, each an integer mod n.
///
/// Either component may be zero; both are below n.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature<C: Curve> {
    pub(crate) e: OrderElement<C>,
    pub(crate) s: OrderElement<C>,
}

impl<C: Curve> SchnorrSignature<C> {
    /// Encoded length: two big-endian scalars
    pub fn byte_len() -> usize {
        2 * C::order_bytes()
    }

    /// The challenge e
    pub fn challenge(&self) -> &OrderElement<C> {
        &self.e
    }

    /// The response s
    pub fn response(&self) -> &OrderElement<C> {
        &self.s
    }

    /// `e ∥ s`
    pub fn to_bytes(&self) -> Vec<u8> {
        let n = C::order_bytes();
        let mut out = vec![0u8; 2 * n];
        self.e.write_be_bytes(&mut out[..n]);
        self.s.write_be_bytes(&mut out[n..]);
        out
    }

    /// Parse `e ∥ s`, rejecting wrong lengths and components not below n
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let n = C::order_bytes();
        if bytes.len() != 2 * n {
            return Err(Error::InvalidSignatureSize {
                expected: 2 * n,
                actual: bytes.len(),
            });
        }
        let e = OrderElement::<C>::from_be_bytes(&bytes[..n])
            .map_err(|_| Error::InvalidSignature("challenge not below group order"))?;
        let s = OrderElement::<C>::from_be_bytes(&bytes[n..])
            .map_err(|_| Error::InvalidSignature("response not below group order"))?;
        Ok(SchnorrSignature { e, s })
    }
}

impl<C: Curve> fmt::Debug for SchnorrSignature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSignature<{}>({:02x?})", C::PARAMS.name, self.to_bytes())
    }
}
