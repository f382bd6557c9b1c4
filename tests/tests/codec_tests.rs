//! Codec properties at the facade boundary

use proptest::prelude::*;
use secc::{Curve, CurveId};
use secc_algorithms::codec::{decode, decode_fixed, encode, encode_fixed, fixed_width};
use secc_algorithms::ec::{NistP256, Secp160r1};
use secc_params::codec::ALPHABET;

#[test]
fn key_and_signature_widths() {
    // compressed point and signature text widths per curve
    let expected = [
        (CurveId::Secp160r1, 26, 52),
        (CurveId::NistP192, 31, 60),
        (CurveId::NistP224, 36, 70),
        (CurveId::NistP256, 41, 79),
        (CurveId::Secp256k1, 41, 79),
    ];
    for (id, point_width, signature_width) in expected {
        assert_eq!(fixed_width(id.point_bytes()), point_width, "{}", id);
        assert_eq!(fixed_width(id.signature_bytes()), signature_width, "{}", id);
    }
    assert_eq!(Secp160r1::point_bytes(), 21);
    assert_eq!(NistP256::point_bytes(), 33);
}

#[test]
fn empty_and_single_byte_inputs() {
    assert_eq!(encode(&[]), "");
    assert!(decode("").unwrap().is_empty());
    for byte in 0..=255u8 {
        assert_eq!(decode(&encode(&[byte])).unwrap(), vec![byte]);
        assert_eq!(decode_fixed(&encode_fixed(&[byte]), 1).unwrap(), vec![byte]);
    }
}

#[test]
fn ciphertext_text_round_trip() {
    let ciphertext = hex::decode(
        "029cae63afd3b375bdfb999c136d6cdbab477f1d23877920e9332f7d8e4c1fa4ce8f5dac1f\
         3104f2c75cd5013ca6bbb7b0df538cbff16f8fffbd03029f2d60c7392a8fcb",
    )
    .unwrap();
    let text = secc::encode_ciphertext(&ciphertext);
    assert_eq!(
        text,
        "D57HS~t|2_<gtO89<*Q[bFI6RO%2oGJ!<2H#OjEEC!Q*-/&R*<L>4mp@bD}yKF~0C;,LCHL_38)4S*;,mNj"
    );
    assert_eq!(secc::decode_ciphertext::<Secp160r1>(&text).unwrap(), ciphertext);
}

proptest! {
    #[test]
    fn leading_zeros_survive(zeros in 0usize..8, tail in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut bytes = vec![0u8; zeros];
        bytes.extend(tail);
        let text = encode(&bytes);
        prop_assert!(text.bytes().all(|c| ALPHABET.contains(&c)));
        prop_assert_eq!(decode(&text).unwrap(), bytes);
    }

    #[test]
    fn maximal_fixed_inputs(len in 0usize..=64) {
        let bytes = vec![0xffu8; len];
        let text = encode_fixed(&bytes);
        prop_assert_eq!(text.len(), fixed_width(len));
        prop_assert_eq!(decode_fixed(&text, len).unwrap(), bytes);
    }
}
