//! Domain parameters for the supported short Weierstrass curves
//!
//! Every value is stored as four little-endian 64-bit limbs so the field
//! code can load it without parsing. Moduli carry their Montgomery
//! constants for R = 2²⁵⁶.

/// A prime modulus together with its Montgomery constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    /// The modulus m, little-endian limbs
    pub limbs: [u64; 4],
    /// R² mod m
    pub r2: [u64; 4],
    /// R³ mod m
    pub r3: [u64; 4],
    /// −m⁻¹ mod 2⁶⁴
    pub inv: u64,
    /// Bit length of m
    pub bits: usize,
    /// Byte length of m
    pub bytes: usize,
    /// Smallest quadratic non-residue, zero when m ≡ 3 mod 4
    pub sqrt_nonresidue: u64,
}

/// Short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcParams {
    /// SEC/NIST name of the curve
    pub name: &'static str,
    /// Base field prime
    pub p: Modulus,
    /// Order of the base point
    pub n: Modulus,
    /// Coefficient a
    pub a: [u64; 4],
    /// Coefficient b
    pub b: [u64; 4],
    /// Base point x-coordinate
    pub g_x: [u64; 4],
    /// Base point y-coordinate
    pub g_y: [u64; 4],
    /// Cofactor
    pub h: u32,
}

/// SEC 2 secp160r1
pub const SECP160R1: EcParams = EcParams {
    name: "secp160r1",
    p: Modulus {
        limbs: [0xffffffff7fffffff, 0xffffffffffffffff, 0x00000000ffffffff, 0],
        r2: [0x8000000100000000, 0x20000000c0000001, 0, 0],
        r3: [0x4000000280000002, 0x0800000050000001, 0x1, 0],
        inv: 0x3fffffff80000001,
        bits: 160,
        bytes: 20,
        sqrt_nonresidue: 0,
    },
    n: Modulus {
        limbs: [0xf927aed3ca752257, 0x000000000001f4c8, 0x0000000100000000, 0],
        r2: [0xdbb68b25bd025fa7, 0xe9dd6f6cd1e8f73f, 0x0000000039de6382, 0],
        r3: [0x11f9593d35c9e3c0, 0x02243eec1e045a1d, 0x00000000346b3c3d, 0],
        inv: 0xc9a6d23a306d1699,
        bits: 161,
        bytes: 21,
        sqrt_nonresidue: 0,
    },
    a: [0xffffffff7ffffffc, 0xffffffffffffffff, 0x00000000ffffffff, 0],
    b: [0x81d4d4adc565fa45, 0x54bd7a8b65acf89f, 0x000000001c97befc, 0],
    g_x: [0x68c38bb913cbfc82, 0x8ef5732846646989, 0x000000004a96b568, 0],
    g_y: [0x042351377ac5fb32, 0x3168947d59dcc912, 0x0000000023a62855, 0],
    h: 1,
};

/// NIST P-192 (secp192r1)
pub const NIST_P192: EcParams = EcParams {
    name: "secp192r1",
    p: Modulus {
        limbs: [0xffffffffffffffff, 0xfffffffffffffffe, 0xffffffffffffffff, 0],
        r2: [0x2, 0x3, 0x2, 0],
        r3: [0x5, 0x9, 0x7, 0],
        inv: 0x1,
        bits: 192,
        bytes: 24,
        sqrt_nonresidue: 0,
    },
    n: Modulus {
        limbs: [0x146bc9b1b4d22831, 0xffffffff99def836, 0xffffffffffffffff, 0],
        r2: [0x01d1770a83134c27, 0xd69c6961caaf687f, 0x126792c4cef5d8c5, 0],
        r3: [0xf8f1758f88b1c24f, 0x2def4b968080c704, 0xb97d96ec97c0f557, 0],
        inv: 0x882672070ddbcf2f,
        bits: 192,
        bytes: 24,
        sqrt_nonresidue: 3,
    },
    a: [0xfffffffffffffffc, 0xfffffffffffffffe, 0xffffffffffffffff, 0],
    b: [0xfeb8deecc146b9b1, 0x0fa7e9ab72243049, 0x64210519e59c80e7, 0],
    g_x: [0xf4ff0afd82ff1012, 0x7cbf20eb43a18800, 0x188da80eb03090f6, 0],
    g_y: [0x73f977a11e794811, 0x631011ed6b24cdd5, 0x07192b95ffc8da78, 0],
    h: 1,
};

/// NIST P-224 (secp224r1), the only registered curve with p ≡ 1 mod 4
pub const NIST_P224: EcParams = EcParams {
    name: "secp224r1",
    p: Modulus {
        limbs: [0x1, 0xffffffff00000000, 0xffffffffffffffff, 0x00000000ffffffff],
        r2: [0xffffffff00000001, 0xffffffff00000000, 0xfffffffe00000000, 0x00000000ffffffff],
        r3: [0xffffffff00000000, 0xffffffff00000002, 0xfffffffc00000000, 0x2],
        inv: 0xffffffffffffffff,
        bits: 224,
        bytes: 28,
        sqrt_nonresidue: 11,
    },
    n: Modulus {
        limbs: [0x13dd29455c5c2a3d, 0xffff16a2e0b8f03e, 0xffffffffffffffff, 0x00000000ffffffff],
        r2: [0x29947a695f517d15, 0xabc8ff5931d63f4b, 0x6ad15f7cd9714856, 0x00000000b1e97961],
        r3: [0xcb4e8282b95b1c87, 0xc5a43bf1f38f7a73, 0xef867d6267388c70, 0x000000006bcacbe8],
        inv: 0xd6e242706a1fc2eb,
        bits: 224,
        bytes: 28,
        sqrt_nonresidue: 2,
    },
    a: [0xfffffffffffffffe, 0xfffffffeffffffff, 0xffffffffffffffff, 0x00000000ffffffff],
    b: [0x270b39432355ffb4, 0x5044b0b7d7bfd8ba, 0x0c04b3abf5413256, 0x00000000b4050a85],
    g_x: [0x343280d6115c1d21, 0x4a03c1d356c21122, 0x6bb4bf7f321390b9, 0x00000000b70e0cbd],
    g_y: [0x44d5819985007e34, 0xcd4375a05a074764, 0xb5f723fb4c22dfe6, 0x00000000bd376388],
    h: 1,
};

/// NIST P-256 (secp256r1)
pub const NIST_P256: EcParams = EcParams {
    name: "secp256r1",
    p: Modulus {
        limbs: [0xffffffffffffffff, 0x00000000ffffffff, 0, 0xffffffff00000001],
        r2: [0x3, 0xfffffffbffffffff, 0xfffffffffffffffe, 0x00000004fffffffd],
        r3: [0xfffffffd0000000a, 0xffffffedfffffff7, 0x00000005fffffffc, 0x0000001800000001],
        inv: 0x1,
        bits: 256,
        bytes: 32,
        sqrt_nonresidue: 0,
    },
    n: Modulus {
        limbs: [0xf3b9cac2fc632551, 0xbce6faada7179e84, 0xffffffffffffffff, 0xffffffff00000000],
        r2: [0x83244c95be79eea2, 0x4699799c49bd6fa6, 0x2845b2392b6bec59, 0x66e12d94f3d95620],
        r3: [0xac8ebec90b65a624, 0x111f28ae0c0555c9, 0x2543b9246ba5e93f, 0x503a54e76407be65],
        inv: 0xccd1c8aaee00bc4f,
        bits: 256,
        bytes: 32,
        sqrt_nonresidue: 7,
    },
    a: [0xfffffffffffffffc, 0x00000000ffffffff, 0, 0xffffffff00000001],
    b: [0x3bce3c3e27d2604b, 0x651d06b0cc53b0f6, 0xb3ebbd55769886bc, 0x5ac635d8aa3a93e7],
    g_x: [0xf4a13945d898c296, 0x77037d812deb33a0, 0xf8bce6e563a440f2, 0x6b17d1f2e12c4247],
    g_y: [0xcbb6406837bf51f5, 0x2bce33576b315ece, 0x8ee7eb4a7c0f9e16, 0x4fe342e2fe1a7f9b],
    h: 1,
};

/// SEC 2 secp256k1
pub const SECP256K1: EcParams = EcParams {
    name: "secp256k1",
    p: Modulus {
        limbs: [0xfffffffefffffc2f, 0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff],
        r2: [0x000007a2000e90a1, 0x1, 0, 0],
        r3: [0x002bb1e33795f671, 0x0000000100000b73, 0, 0],
        inv: 0xd838091dd2253531,
        bits: 256,
        bytes: 32,
        sqrt_nonresidue: 0,
    },
    n: Modulus {
        limbs: [0xbfd25e8cd0364141, 0xbaaedce6af48a03b, 0xfffffffffffffffe, 0xffffffffffffffff],
        r2: [0x896cf21467d7d140, 0x741496c20e7cf878, 0xe697f5e45bcd07c6, 0x9d671cd581c69bc5],
        r3: [0x7bc0cfe0e9ff41ed, 0x0017648444d4322c, 0xb1b31347f1d0b2da, 0x555d800c18ef116d],
        inv: 0x4b0dff665588b13f,
        bits: 256,
        bytes: 32,
        sqrt_nonresidue: 5,
    },
    a: [0, 0, 0, 0],
    b: [0x7, 0, 0, 0],
    g_x: [0x59f2815b16f81798, 0x029bfcdb2dce28d9, 0x55a06295ce870b07, 0x79be667ef9dcbbac],
    g_y: [0x9c47d08ffb10d4b8, 0xfd17b448a6855419, 0x5da4fbfc0e1108a8, 0x483ada7726a3c465],
    h: 1,
};

/// All registered curves
pub const ALL_CURVES: [&EcParams; 5] = [&SECP160R1, &NIST_P192, &NIST_P224, &NIST_P256, &SECP256K1];
