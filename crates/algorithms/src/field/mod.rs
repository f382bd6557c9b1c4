//! Prime-field arithmetic in Montgomery form
//!
//! Elements are four little-endian 64-bit limbs holding `x·R mod m` with
//! R = 2²⁵⁶. Every registered curve fits in 256 bits, so a single
//! implementation, parameterised by a [`FieldParams`] marker, serves both the
//! base fields and the scalar fields.
//!
//! All arithmetic is constant time in operand values. The only
//! variable-time routine is [`FieldElement::pow_vartime`], whose running time
//! depends on the (public) exponent alone.

use core::fmt;
use core::marker::PhantomData;

use secc_params::Modulus;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Number of 64-bit limbs in a field element
pub const LIMBS: usize = 4;

/// Largest encoded size of a field element in bytes
pub const MAX_BYTES: usize = LIMBS * 8;

/// Compile-time description of a prime field
pub trait FieldParams: 'static + Send + Sync {
    /// Name used in error messages
    const NAME: &'static str;
    /// The prime modulus and its Montgomery constants
    const MODULUS: Modulus;
}

/// a + b + carry, returning (sum, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// a − b − borrow, returning (difference, borrow)
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// a + b·c + carry, returning (low, high)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract m from (hi‖r) when the value is at least m.
///
/// Requires (hi‖r) < 2m.
#[inline(always)]
fn reduce_once(r: [u64; LIMBS], hi: u64, m: &[u64; LIMBS]) -> [u64; LIMBS] {
    let mut d = [0u64; LIMBS];
    let mut borrow = 0;
    for i in 0..LIMBS {
        (d[i], borrow) = sbb(r[i], m[i], borrow);
    }
    let use_diff = Choice::from(((hi | (borrow ^ 1)) & 1) as u8);
    let mut out = [0u64; LIMBS];
    for i in 0..LIMBS {
        out[i] = u64::conditional_select(&r[i], &d[i], use_diff);
    }
    out
}

/// Montgomery product a·b·R⁻¹ mod m (CIOS).
///
/// Requires a·b < m·R, which holds whenever one operand is below m.
fn mont_mul(a: &[u64; LIMBS], b: &[u64; LIMBS], m: &Modulus) -> [u64; LIMBS] {
    let mut t = [0u64; LIMBS + 2];
    for i in 0..LIMBS {
        let mut carry = 0;
        for j in 0..LIMBS {
            (t[j], carry) = mac(t[j], a[j], b[i], carry);
        }
        (t[LIMBS], t[LIMBS + 1]) = adc(t[LIMBS], carry, 0);

        let q = t[0].wrapping_mul(m.inv);
        let (_, mut carry) = mac(t[0], q, m.limbs[0], 0);
        for j in 1..LIMBS {
            (t[j - 1], carry) = mac(t[j], q, m.limbs[j], carry);
        }
        let (top, c) = adc(t[LIMBS], carry, 0);
        t[LIMBS - 1] = top;
        t[LIMBS] = t[LIMBS + 1] + c;
    }
    reduce_once([t[0], t[1], t[2], t[3]], t[LIMBS], &m.limbs)
}

/// Big-endian bytes (at most 32) into little-endian limbs
fn limbs_from_be(bytes: &[u8]) -> [u64; LIMBS] {
    let mut buf = [0u8; MAX_BYTES];
    buf[MAX_BYTES - bytes.len()..].copy_from_slice(bytes);
    let mut limbs = [0u64; LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let off = MAX_BYTES - 8 * (i + 1);
        let mut word = [0u8; 8];
        word.copy_from_slice(&buf[off..off + 8]);
        *limb = u64::from_be_bytes(word);
    }
    buf.zeroize();
    limbs
}

/// Constant-time `a < b` on limb arrays
fn ct_lt(a: &[u64; LIMBS], b: &[u64; LIMBS]) -> Choice {
    let mut borrow = 0;
    for i in 0..LIMBS {
        (_, borrow) = sbb(a[i], b[i], borrow);
    }
    Choice::from(borrow as u8)
}

/// Shift a limb array right by `n < 256` bits
pub(crate) fn shr_limbs(x: &[u64; LIMBS], n: u32) -> [u64; LIMBS] {
    let words = (n / 64) as usize;
    let bits = n % 64;
    let mut out = [0u64; LIMBS];
    for i in 0..LIMBS - words {
        out[i] = x[i + words] >> bits;
        if bits > 0 && i + words + 1 < LIMBS {
            out[i] |= x[i + words + 1] << (64 - bits);
        }
    }
    out
}

/// Subtract a small value from a limb array that is known to be larger
pub(crate) fn sub_small(x: &[u64; LIMBS], v: u64) -> [u64; LIMBS] {
    let mut out = [0u64; LIMBS];
    let mut borrow = v;
    for i in 0..LIMBS {
        (out[i], borrow) = sbb(x[i], borrow, 0);
    }
    out
}

/// Add a small value to a limb array that does not overflow
pub(crate) fn add_small(x: &[u64; LIMBS], v: u64) -> [u64; LIMBS] {
    let mut out = [0u64; LIMBS];
    let mut carry = v;
    for i in 0..LIMBS {
        (out[i], carry) = adc(x[i], carry, 0);
    }
    out
}

/// Element of the prime field described by `P`, in Montgomery form
pub struct FieldElement<P: FieldParams> {
    limbs: [u64; LIMBS],
    _field: PhantomData<P>,
}

impl<P: FieldParams> Clone for FieldElement<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams> Copy for FieldElement<P> {}

impl<P: FieldParams> Default for FieldElement<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FieldParams> FieldElement<P> {
    #[inline(always)]
    const fn from_montgomery(limbs: [u64; LIMBS]) -> Self {
        FieldElement {
            limbs,
            _field: PhantomData,
        }
    }

    /// Encoded byte length of an element
    pub const fn byte_len() -> usize {
        P::MODULUS.bytes
    }

    /// Bit length of the modulus
    pub const fn bit_len() -> usize {
        P::MODULUS.bits
    }

    /// The additive identity
    pub const fn zero() -> Self {
        Self::from_montgomery([0; LIMBS])
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    /// Lift a small integer into the field
    pub fn from_u64(v: u64) -> Self {
        Self::from_canonical_limbs(&[v, 0, 0, 0])
    }

    /// Limbs that are already reduced below the modulus
    pub fn from_canonical_limbs(limbs: &[u64; LIMBS]) -> Self {
        Self::from_montgomery(mont_mul(limbs, &P::MODULUS.r2, &P::MODULUS))
    }

    /// Canonical (non-Montgomery) little-endian limbs
    pub fn to_canonical_limbs(&self) -> [u64; LIMBS] {
        mont_mul(&self.limbs, &[1, 0, 0, 0], &P::MODULUS)
    }

    /// Parse big-endian bytes of exactly [`Self::byte_len`] bytes.
    ///
    /// Values at or above the modulus are rejected without branching on the value.
    pub fn from_be_bytes_ct(bytes: &[u8]) -> CtOption<Self> {
        debug_assert_eq!(bytes.len(), P::MODULUS.bytes);
        let mut limbs = limbs_from_be(bytes);
        let in_range = ct_lt(&limbs, &P::MODULUS.limbs);
        let fe = Self::from_canonical_limbs(&limbs);
        limbs.zeroize();
        CtOption::new(fe, in_range)
    }

    /// Parse a canonical big-endian encoding
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(P::NAME, bytes.len(), P::MODULUS.bytes)?;
        Option::from(Self::from_be_bytes_ct(bytes))
            .ok_or_else(|| Error::param(P::NAME, "value is not below the modulus"))
    }

    /// Reduce a 64-byte big-endian integer modulo m
    pub fn from_be_bytes_wide(bytes: &[u8; 2 * MAX_BYTES]) -> Self {
        let mut hi = limbs_from_be(&bytes[..MAX_BYTES]);
        let mut lo = limbs_from_be(&bytes[MAX_BYTES..]);
        // Montgomery form of lo + hi·R is mont_mul(lo, R²) + mont_mul(hi, R³).
        let lo_m = mont_mul(&lo, &P::MODULUS.r2, &P::MODULUS);
        let hi_m = mont_mul(&hi, &P::MODULUS.r3, &P::MODULUS);
        hi.zeroize();
        lo.zeroize();
        Self::from_montgomery(lo_m).add(&Self::from_montgomery(hi_m))
    }

    /// Write the canonical big-endian encoding into `out`
    pub fn write_be_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), P::MODULUS.bytes);
        let mut canonical = self.to_canonical_limbs();
        let mut buf = [0u8; MAX_BYTES];
        for (i, limb) in canonical.iter().enumerate() {
            let off = MAX_BYTES - 8 * (i + 1);
            buf[off..off + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out.copy_from_slice(&buf[MAX_BYTES - P::MODULUS.bytes..]);
        canonical.zeroize();
        buf.zeroize();
    }

    /// Canonical big-endian encoding
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; P::MODULUS.bytes];
        self.write_be_bytes(&mut out);
        out
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Is the canonical value odd?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical_limbs()[0] & 1) as u8)
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = [0u64; LIMBS];
        let mut carry = 0;
        for i in 0..LIMBS {
            (sum[i], carry) = adc(self.limbs[i], other.limbs[i], carry);
        }
        Self::from_montgomery(reduce_once(sum, carry, &P::MODULUS.limbs))
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; LIMBS];
        let mut borrow = 0;
        for i in 0..LIMBS {
            (diff[i], borrow) = sbb(self.limbs[i], other.limbs[i], borrow);
        }
        // Add m back when the subtraction wrapped.
        let mask = 0u64.wrapping_sub(borrow);
        let mut carry = 0;
        for i in 0..LIMBS {
            (diff[i], carry) = adc(diff[i], P::MODULUS.limbs[i] & mask, carry);
        }
        Self::from_montgomery(diff)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Double the element
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_montgomery(mont_mul(&self.limbs, &other.limbs, &P::MODULUS))
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Raise to a public exponent given as little-endian limbs.
    ///
    /// Runs in time dependent on the exponent only.
    pub fn pow_vartime(&self, exp: &[u64; LIMBS]) -> Self {
        let mut acc = Self::one();
        for limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();
                if (limb >> bit) & 1 == 1 {
                    acc = acc.mul(self);
                }
            }
        }
        acc
    }

    /// Fermat inverse x^(m−2); zero maps to zero
    pub fn invert_or_zero(&self) -> Self {
        self.pow_vartime(&sub_small(&P::MODULUS.limbs, 2))
    }

    /// Multiplicative inverse
    ///
    /// Inverting zero is an internal consistency failure.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::InvalidOperand {
                operation: "field inversion",
                details: "zero has no inverse",
            });
        }
        Ok(self.invert_or_zero())
    }

    /// Square root, if one exists
    ///
    /// Uses x^((m+1)/4) when m ≡ 3 mod 4 and constant-time Tonelli-Shanks otherwise.
    pub fn sqrt(&self) -> CtOption<Self> {
        let m = &P::MODULUS;
        let candidate = if m.limbs[0] & 3 == 3 {
            self.pow_vartime(&shr_limbs(&add_small(&m.limbs, 1), 2))
        } else {
            self.sqrt_tonelli_shanks()
        };
        CtOption::new(candidate, candidate.square().ct_eq(self))
    }

    fn sqrt_tonelli_shanks(&self) -> Self {
        let m = &P::MODULUS;
        // m − 1 = q · 2^c1 with q odd
        let m_minus_1 = sub_small(&m.limbs, 1);
        let mut c1 = 0u32;
        for limb in m_minus_1.iter() {
            if *limb == 0 {
                c1 += 64;
            } else {
                c1 += limb.trailing_zeros();
                break;
            }
        }
        let q = shr_limbs(&m_minus_1, c1);
        let c3 = shr_limbs(&sub_small(&q, 1), 1);
        let c5 = Self::from_u64(m.sqrt_nonresidue).pow_vartime(&q);
        let one = Self::one();

        let mut z = self.pow_vartime(&c3);
        let mut t = z.square().mul(self);
        z = z.mul(self);
        let mut b = t;
        let mut c = c5;
        for i in (2..=c1).rev() {
            for _ in 1..(i - 1) {
                b = b.square();
            }
            let e = b.ct_eq(&one);
            let zt = z.mul(&c);
            z = Self::conditional_select(&zt, &z, e);
            c = c.square();
            let tt = t.mul(&c);
            t = Self::conditional_select(&tt, &t, e);
            b = t;
        }
        z
    }
}

impl<P: FieldParams> ConstantTimeEq for FieldElement<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl<P: FieldParams> ConditionallySelectable for FieldElement<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_montgomery(limbs)
    }
}

impl<P: FieldParams> PartialEq for FieldElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FieldParams> Eq for FieldElement<P> {}

impl<P: FieldParams> Zeroize for FieldElement<P> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<P: FieldParams> fmt::Debug for FieldElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limbs = self.to_canonical_limbs();
        write!(
            f,
            "FieldElement<{}>(0x{:016x}{:016x}{:016x}{:016x})",
            P::NAME,
            limbs[3],
            limbs[2],
            limbs[1],
            limbs[0]
        )
    }
}
