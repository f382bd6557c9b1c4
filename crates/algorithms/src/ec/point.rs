//! Elliptic curve point operations

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

use super::curve::{BaseElement, Coefficients, Curve, OrderElement};

/// Number of entries in a 4-bit window table
const WINDOW_SIZE: usize = 16;

/// Compressed SEC1 prefix for an even y-coordinate
const TAG_EVEN: u8 = 0x02;
/// Compressed SEC1 prefix for an odd y-coordinate
const TAG_ODD: u8 = 0x03;

/// Projective coordinates (X:Y:Z) representing (X/Z, Y/Z); the identity is (0:1:0).
///
/// Addition uses the complete formulas of Renes, Costello and Batina, so
/// doubling, adding the identity and adding inverses need no special cases.
#[derive(Clone, Copy, Debug)]
pub struct Point<C: Curve> {
    pub(crate) x: BaseElement<C>,
    pub(crate) y: BaseElement<C>,
    pub(crate) z: BaseElement<C>,
}

impl<C: Curve> Point<C> {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            x: BaseElement::<C>::zero(),
            y: BaseElement::<C>::one(),
            z: BaseElement::<C>::zero(),
        }
    }

    /// The standard base point G
    pub fn generator() -> Self {
        C::constants().generator
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    pub(crate) fn from_affine_unchecked(x: BaseElement<C>, y: BaseElement<C>) -> Self {
        Point {
            x,
            y,
            z: BaseElement::<C>::one(),
        }
    }

    /// Create a point from affine coordinates, checking the curve equation
    pub fn from_affine(x: BaseElement<C>, y: BaseElement<C>) -> Result<Self> {
        let point = Self::from_affine_unchecked(x, y);
        if !bool::from(point.is_on_curve()) {
            return Err(Error::point(C::PARAMS.name, "point not on curve"));
        }
        Ok(point)
    }

    /// Affine coordinates, or `None` for the identity
    pub fn to_affine(&self) -> Option<(BaseElement<C>, BaseElement<C>)> {
        if bool::from(self.is_identity()) {
            return None;
        }
        let z_inv = self.z.invert_or_zero();
        Some((self.x.mul(&z_inv), self.y.mul(&z_inv)))
    }

    /// Check Y²Z = X³ + aXZ² + bZ³
    pub fn is_on_curve(&self) -> Choice {
        let k = &C::constants().coeffs;
        let z2 = self.z.square();
        let lhs = self.y.square().mul(&self.z);
        let rhs = self
            .x
            .square()
            .mul(&self.x)
            .add(&k.a.mul(&self.x).mul(&z2))
            .add(&k.b.mul(&z2).mul(&self.z));
        lhs.ct_eq(&rhs)
    }

    /// Check that this point may be used as a public key or ephemeral key:
    /// on the curve, not the identity and, when the cofactor exceeds one, in
    /// the prime-order subgroup.
    pub fn validate(&self) -> Result<()> {
        if bool::from(self.is_identity()) {
            return Err(Error::point(C::PARAMS.name, "point is the identity"));
        }
        if !bool::from(self.is_on_curve()) {
            return Err(Error::point(C::PARAMS.name, "point not on curve"));
        }
        if C::PARAMS.h > 1 {
            let k = &C::constants().coeffs;
            let n_p = Self::mul_limbs(&self.window_table(k), &C::PARAMS.n.limbs, k);
            if !bool::from(n_p.is_identity()) {
                return Err(Error::point(C::PARAMS.name, "point not in prime-order subgroup"));
            }
        }
        Ok(())
    }

    /// Point negation
    pub fn neg(&self) -> Self {
        Point {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.add_with(other, &C::constants().coeffs)
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Point subtraction
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Complete addition for arbitrary a (RCB 2015, algorithm 1)
    pub(crate) fn add_with(&self, other: &Self, k: &Coefficients<C>) -> Self {
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let mut t0 = x1.mul(x2);
        let mut t1 = y1.mul(y2);
        let mut t2 = z1.mul(z2);
        let mut t3 = x1.add(y1);
        let mut t4 = x2.add(y2);
        t3 = t3.mul(&t4);
        t4 = t0.add(&t1);
        t3 = t3.sub(&t4);
        t4 = x1.add(z1);
        let mut t5 = x2.add(z2);
        t4 = t4.mul(&t5);
        t5 = t0.add(&t2);
        t4 = t4.sub(&t5);
        t5 = y1.add(z1);
        let mut x3 = y2.add(z2);
        t5 = t5.mul(&x3);
        x3 = t1.add(&t2);
        t5 = t5.sub(&x3);
        let mut z3 = k.a.mul(&t4);
        x3 = k.b3.mul(&t2);
        z3 = x3.add(&z3);
        x3 = t1.sub(&z3);
        z3 = t1.add(&z3);
        let mut y3 = x3.mul(&z3);
        t1 = t0.add(&t0);
        t1 = t1.add(&t0);
        t2 = k.a.mul(&t2);
        t4 = k.b3.mul(&t4);
        t1 = t1.add(&t2);
        t2 = t0.sub(&t2);
        t2 = k.a.mul(&t2);
        t4 = t4.add(&t2);
        t0 = t1.mul(&t4);
        y3 = y3.add(&t0);
        t0 = t5.mul(&t4);
        x3 = t3.mul(&x3);
        x3 = x3.sub(&t0);
        t0 = t3.mul(&t1);
        z3 = t5.mul(&z3);
        z3 = z3.add(&t0);

        Point { x: x3, y: y3, z: z3 }
    }

    /// i·P for i in 0..16
    pub(crate) fn window_table(&self, k: &Coefficients<C>) -> [Self; WINDOW_SIZE] {
        let mut table = [Self::identity(); WINDOW_SIZE];
        for i in 1..WINDOW_SIZE {
            table[i] = table[i - 1].add_with(self, k);
        }
        table
    }

    /// Fixed 4-bit window multiplication over little-endian limbs.
    ///
    /// Every window performs four doublings, one constant-time table scan and
    /// one addition, so timing is independent of the scalar value.
    fn mul_limbs(table: &[Self; WINDOW_SIZE], limbs: &[u64; 4], k: &Coefficients<C>) -> Self {
        let windows = (C::PARAMS.n.bits + 3) / 4;
        let mut acc = Self::identity();
        for w in (0..windows).rev() {
            for _ in 0..4 {
                acc = acc.add_with(&acc, k);
            }
            let bit = 4 * w;
            let idx = ((limbs[bit / 64] >> (bit % 64)) & 0xf) as u8;
            let mut selected = Self::identity();
            for (i, entry) in table.iter().enumerate() {
                selected.conditional_assign(entry, (i as u8).ct_eq(&idx));
            }
            acc = acc.add_with(&selected, k);
        }
        acc
    }

    /// Scalar multiplication k·P, constant time in k
    pub fn mul(&self, scalar: &OrderElement<C>) -> Self {
        let k = &C::constants().coeffs;
        let mut limbs = scalar.to_canonical_limbs();
        let result = Self::mul_limbs(&self.window_table(k), &limbs, k);
        limbs.zeroize();
        result
    }

    /// Scalar multiplication with the base point, k·G
    pub fn mul_base(scalar: &OrderElement<C>) -> Self {
        let consts = C::constants();
        let mut limbs = scalar.to_canonical_limbs();
        let result = Self::mul_limbs(&consts.generator_table, &limbs, &consts.coeffs);
        limbs.zeroize();
        result
    }

    /// Serialize in compressed form: 0x02/0x03 ∥ x, or all zeros for the identity
    pub fn to_compressed(&self) -> Vec<u8> {
        let mut out = vec![0u8; C::point_bytes()];
        if let Some((x, y)) = self.to_affine() {
            out[0] = if bool::from(y.is_odd()) { TAG_ODD } else { TAG_EVEN };
            x.write_be_bytes(&mut out[1..]);
        }
        out
    }

    /// Deserialize and validate a compressed point.
    ///
    /// The identity encoding is rejected: every decoded point is a usable
    /// public or ephemeral key.
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let curve = C::PARAMS.name;
        validate::length("compressed point", bytes.len(), C::point_bytes())?;
        let tag = bytes[0];
        if tag != TAG_EVEN && tag != TAG_ODD {
            return Err(Error::point(curve, "invalid compressed prefix"));
        }
        let x = BaseElement::<C>::from_be_bytes(&bytes[1..])
            .map_err(|_| Error::point(curve, "x-coordinate not in field"))?;

        let k = &C::constants().coeffs;
        let rhs = x.square().mul(&x).add(&k.a.mul(&x)).add(&k.b);
        let y: BaseElement<C> = Option::from(rhs.sqrt())
            .ok_or_else(|| Error::point(curve, "x-coordinate has no point"))?;

        let want_odd = Choice::from(tag & 1);
        let flip = y.is_odd() ^ want_odd;
        let y = BaseElement::<C>::conditional_select(&y, &y.neg(), flip);
        if !bool::from(y.is_odd().ct_eq(&want_odd)) {
            // only reachable for y = 0 with the odd tag
            return Err(Error::point(curve, "y-coordinate parity mismatch"));
        }

        let point = Self::from_affine_unchecked(x, y);
        point.validate()?;
        Ok(point)
    }
}

impl<C: Curve> ConditionallySelectable for Point<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Point {
            x: BaseElement::<C>::conditional_select(&a.x, &b.x, choice),
            y: BaseElement::<C>::conditional_select(&a.y, &b.y, choice),
            z: BaseElement::<C>::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl<C: Curve> ConstantTimeEq for Point<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        let a_id = self.is_identity();
        let b_id = other.is_identity();
        (a_id & b_id) | (!a_id & !b_id & x_eq & y_eq)
    }
}

impl<C: Curve> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: Curve> Eq for Point<C> {}

impl<C: Curve> Default for Point<C> {
    fn default() -> Self {
        Self::identity()
    }
}
