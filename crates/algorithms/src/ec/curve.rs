//! Curve registry
//!
//! Each supported curve is a zero-sized marker type implementing [`Curve`].
//! Its derived constants (coefficients in Montgomery form, the generator and
//! the generator's window table) are built once on first use and shared
//! immutably afterwards.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use secc_params::curves::{NIST_P192, NIST_P224, NIST_P256, SECP160R1, SECP256K1};
use secc_params::{EcParams, Modulus};

use crate::error::{Error, Result};
use crate::field::{FieldElement, FieldParams};

use super::point::Point;

/// Element of the base field of `C`
pub type BaseElement<C> = FieldElement<<C as Curve>::Base>;

/// Element of the scalar field of `C` (integers mod n)
pub type OrderElement<C> = FieldElement<<C as Curve>::Order>;

/// A short Weierstrass curve with a prime-order base point
pub trait Curve:
    'static + Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Send + Sync
{
    /// Base field 𝔽ₚ
    type Base: FieldParams;
    /// Scalar field of order n
    type Order: FieldParams;
    /// Registry identifier
    const ID: CurveId;
    /// Raw domain parameters
    const PARAMS: EcParams;

    /// Derived constants, built on first call
    fn constants() -> &'static CurveConstants<Self>;

    /// Byte length of a base field element
    fn field_bytes() -> usize {
        Self::PARAMS.p.bytes
    }

    /// Byte length of a scalar
    fn order_bytes() -> usize {
        Self::PARAMS.n.bytes
    }

    /// Byte length of a compressed point
    fn point_bytes() -> usize {
        Self::field_bytes() + 1
    }
}

/// Curve coefficients in Montgomery form
#[derive(Debug, Clone, Copy)]
pub struct Coefficients<C: Curve> {
    pub(crate) a: BaseElement<C>,
    pub(crate) b: BaseElement<C>,
    /// 3·b, used by the complete addition formulas
    pub(crate) b3: BaseElement<C>,
}

/// Everything derived once per curve
#[derive(Debug)]
pub struct CurveConstants<C: Curve> {
    pub(crate) coeffs: Coefficients<C>,
    pub(crate) generator: Point<C>,
    /// i·G for i in 0..16
    pub(crate) generator_table: [Point<C>; 16],
}

impl<C: Curve> CurveConstants<C> {
    fn build() -> Self {
        let a = BaseElement::<C>::from_canonical_limbs(&C::PARAMS.a);
        let b = BaseElement::<C>::from_canonical_limbs(&C::PARAMS.b);
        let coeffs = Coefficients {
            a,
            b,
            b3: b.double().add(&b),
        };
        let generator = Point::from_affine_unchecked(
            BaseElement::<C>::from_canonical_limbs(&C::PARAMS.g_x),
            BaseElement::<C>::from_canonical_limbs(&C::PARAMS.g_y),
        );
        let generator_table = generator.window_table(&coeffs);
        tracing::debug!(curve = C::PARAMS.name, "initialised curve constants");
        CurveConstants {
            coeffs,
            generator,
            generator_table,
        }
    }

    /// The curve coefficients
    pub fn coefficients(&self) -> &Coefficients<C> {
        &self.coeffs
    }
}

macro_rules! define_curve {
    (
        $(#[$meta:meta])*
        $curve:ident, $base:ident, $order:ident, $params:ident, $id:ident
    ) => {
        #[doc = concat!("Base field of [`", stringify!($curve), "`]")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $base;

        impl FieldParams for $base {
            const NAME: &'static str = concat!(stringify!($curve), " base field");
            const MODULUS: Modulus = $params.p;
        }

        #[doc = concat!("Scalar field of [`", stringify!($curve), "`]")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $order;

        impl FieldParams for $order {
            const NAME: &'static str = concat!(stringify!($curve), " scalar field");
            const MODULUS: Modulus = $params.n;
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
        pub struct $curve;

        impl Curve for $curve {
            type Base = $base;
            type Order = $order;
            const ID: CurveId = CurveId::$id;
            const PARAMS: EcParams = $params;

            fn constants() -> &'static CurveConstants<Self> {
                static CONSTANTS: OnceLock<CurveConstants<$curve>> = OnceLock::new();
                CONSTANTS.get_or_init(CurveConstants::build)
            }
        }
    };
}

define_curve!(
    /// SEC 2 secp160r1, the default curve
    Secp160r1, Secp160r1Base, Secp160r1Order, SECP160R1, Secp160r1
);
define_curve!(
    /// NIST P-192
    NistP192, NistP192Base, NistP192Order, NIST_P192, NistP192
);
define_curve!(
    /// NIST P-224
    NistP224, NistP224Base, NistP224Order, NIST_P224, NistP224
);
define_curve!(
    /// NIST P-256
    NistP256, NistP256Base, NistP256Order, NIST_P256, NistP256
);
define_curve!(
    /// SEC 2 secp256k1
    Secp256k1, Secp256k1Base, Secp256k1Order, SECP256K1, Secp256k1
);

/// Curve used when none is chosen explicitly
pub type DefaultCurve = Secp160r1;

/// Runtime identifier for a registered curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// secp160r1 ("p160")
    Secp160r1,
    /// NIST P-192 ("p192")
    NistP192,
    /// NIST P-224 ("p224")
    NistP224,
    /// NIST P-256 ("p256")
    NistP256,
    /// secp256k1
    Secp256k1,
}

impl CurveId {
    /// Every registered curve
    pub const ALL: [CurveId; 5] = [
        CurveId::Secp160r1,
        CurveId::NistP192,
        CurveId::NistP224,
        CurveId::NistP256,
        CurveId::Secp256k1,
    ];

    /// Look a curve up by short name ("p160"), SEC name ("secp160r1") or NIST name ("P-256").
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        let id = match lowered.as_str() {
            "p160" | "secp160r1" => CurveId::Secp160r1,
            "p192" | "p-192" | "secp192r1" | "prime192v1" => CurveId::NistP192,
            "p224" | "p-224" | "secp224r1" => CurveId::NistP224,
            "p256" | "p-256" | "secp256r1" | "prime256v1" => CurveId::NistP256,
            "secp256k1" | "k256" => CurveId::Secp256k1,
            _ => return Err(Error::param("curve", format!("unknown curve name '{}'", name))),
        };
        Ok(id)
    }

    /// Short name
    pub fn short_name(&self) -> &'static str {
        match self {
            CurveId::Secp160r1 => "p160",
            CurveId::NistP192 => "p192",
            CurveId::NistP224 => "p224",
            CurveId::NistP256 => "p256",
            CurveId::Secp256k1 => "secp256k1",
        }
    }

    /// Domain parameters
    pub fn params(&self) -> &'static EcParams {
        match self {
            CurveId::Secp160r1 => &SECP160R1,
            CurveId::NistP192 => &NIST_P192,
            CurveId::NistP224 => &NIST_P224,
            CurveId::NistP256 => &NIST_P256,
            CurveId::Secp256k1 => &SECP256K1,
        }
    }

    /// Byte length of a compressed point on this curve
    pub fn point_bytes(&self) -> usize {
        self.params().p.bytes + 1
    }

    /// Byte length of a signature on this curve
    pub fn signature_bytes(&self) -> usize {
        2 * self.params().n.bytes
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name)
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Build the constant tables of every registered curve.
///
/// Idempotent; later calls return immediately.
pub fn init_all() {
    Secp160r1::constants();
    NistP192::constants();
    NistP224::constants();
    NistP256::constants();
    Secp256k1::constants();
}
