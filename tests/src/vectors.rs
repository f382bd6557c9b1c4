//! Golden values for private material "my private key"

use secc_algorithms::CurveId;

/// Private material shared by every vector
pub const PRIVATE_MATERIAL: &str = "my private key";

/// Message signed in every vector
pub const SIGNED_MESSAGE: &[u8] = b"This message will be signed\n";

/// Plaintext of every ECIES vector
pub const ENCRYPTED_MESSAGE: &[u8] = b"This message will be encrypted\n";

/// Expected outputs on one curve
#[derive(Debug, Clone, Copy)]
pub struct CurveVectors {
    /// Curve the values belong to
    pub curve: CurveId,
    /// Fixed-width public key text
    pub public_text: &'static str,
    /// Fixed-width signature text of [`SIGNED_MESSAGE`]
    pub signature_text: &'static str,
    /// Hex ECIES ciphertext of [`ENCRYPTED_MESSAGE`] to this key
    pub ciphertext_hex: &'static str,
}

/// One entry per registered curve
pub const ALL: [CurveVectors; 5] = [
    CurveVectors {
        curve: CurveId::Secp160r1,
        public_text: "!J],9*>23]yz}J%L&98Di=I7L1",
        signature_text: "!#d{WBdLDu[Q[_x?98_67hLQ-0Ku{]GG@1,)b+lT!7m.;$UTiq9,",
        ciphertext_hex: "029cae63afd3b375bdfb999c136d6cdbab477f1d23877920e9332f7d8e4c1fa4ce8f5dac1f\
                         3104f2c75cd5013ca6bbb7b0df538cbff16f8fffbd03029f2d60c7392a8fcb",
    },
    CurveVectors {
        curve: CurveId::NistP192,
        public_text: "!UF^.4*J__bWrwBHk73,#cO0/8KSeE&",
        signature_text: "!=Y0fgm.uFLenFaB~a(vt#KQ?,Cvd2(Q8Pk24gN8_Pl:_hkdA_b;}]@d>9*-",
        ciphertext_hex: "022d5acb97d862777159b64eedbd870ba07bf33f09524b13d3fdd53b637418015a2f24c52b\
                         63e30dce722805313fcbc0e3dbaeaebde07db4318c73c123068c939a3bbe143c44bd25",
    },
    CurveVectors {
        curve: CurveId::NistP224,
        public_text: "!95e<2J)7TH9d0Cwq|ZOnrFOMDX:=oi)zsRj",
        signature_text: "!dI{x40uUJncxmtv0(o3j~a6t4X|jc~t8=xfySZ>E*+gQ^4HEFa&K|WKm?M/PTwBI=7nJo",
        ciphertext_hex: "03355e9793c754347c40c0e4c09391c30a6d7bc63ed91cd3390441e305e394ee15590b8718\
                         fbfc741b24ef74a45be985df6fe6a70d2cd72c415d52000e4e29ac2d32513b839ac327dc54f939",
    },
    CurveVectors {
        curve: CurveId::NistP256,
        public_text: "!>7qxyEwwAp4:MA~u4>ITNy]MTDByAe>7%m96-mip",
        signature_text: "%Ka*RT5j@/Q;K#lAqX!gLu41,f{<k,8l(CAdTGS@Np%9BYwr.Gf,Y11;},5YMA.dM]R*3fc>zw#BD!u",
        ciphertext_hex: "0209be65f6de7de160e413328f7604064c9957c32b09c81df18d70fab26dbdc18eb29a706e\
                         d8d7a09080bc66a79b664fae1776188335bc48322b6f2e9c0e1a52fa49fd3a34669bcb38695afd73483f1a",
    },
    CurveVectors {
        curve: CurveId::Secp256k1,
        public_text: "!1{x?Z>n<GtFUe/3#g[}gH1~Hw_zNU8/IvkvdEiwp",
        signature_text: "3F}kTE?kxN~(Oj}7uZdJzXmQ/IV$}]N*&i5f,<|q6[*L{ax|f6eF]n[{A2yM_XbRu[MTtv?faZZ/5K$",
        ciphertext_hex: "03e087418f5b945084cbd060c1b82288f7079eda76278b557ba4abac54384938ed99b826ab\
                         c05338e1c72040be128bf273d3e0b1d2f8766a4d01c7afc10733cfa5706e76fbfd8d202305811e74968104",
    },
];

/// Vectors for one curve; panics when the curve has none
pub fn for_curve(curve: CurveId) -> &'static CurveVectors {
    ALL.iter()
        .find(|v| v.curve == curve)
        .expect("vector for curve")
}
