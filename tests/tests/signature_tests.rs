//! Property tests for Schnorr signatures through the `Signature` trait

use proptest::prelude::*;
use secc::sign::{SchnorrP224, SchnorrSecp160r1, SchnorrSecp256k1, SchnorrSignature};
use secc_algorithms::ec::{KeyPair, Secp160r1};
use secc_api::Signature;
use secc_tests::deterministic_rng;
use secc_tests::vectors::{self, PRIVATE_MATERIAL, SIGNED_MESSAGE};

#[test]
fn golden_signature_bytes_verify() {
    let v = vectors::for_curve(secc_algorithms::CurveId::Secp160r1);
    let bytes = secc_algorithms::codec::decode_fixed(v.signature_text, 42).unwrap();
    let pair = KeyPair::<Secp160r1>::from_material(PRIVATE_MATERIAL.as_bytes());
    assert!(SchnorrSecp160r1::verify_bytes(pair.public(), SIGNED_MESSAGE, &bytes));
    assert_eq!(
        SchnorrSignature::<Secp160r1>::from_bytes(&bytes).unwrap().to_bytes(),
        bytes
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn secp256k1_sign_verify(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut rng = deterministic_rng(seed);
        let (pk, sk) = SchnorrSecp256k1::keypair(&mut rng).unwrap();
        let signature = SchnorrSecp256k1::sign(&message, &sk).unwrap();
        prop_assert!(SchnorrSecp256k1::verify(&message, &signature, &pk));
    }

    #[test]
    fn p224_bit_flip_is_rejected(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut rng = deterministic_rng(seed);
        let (pk, sk) = SchnorrP224::keypair(&mut rng).unwrap();
        let mut bytes = SchnorrP224::sign(&message, &sk).unwrap().to_bytes();
        let index = position.index(bytes.len());
        bytes[index] ^= 1 << bit;
        prop_assert!(!SchnorrP224::verify_bytes(pk.point(), &message, &bytes));
    }

    #[test]
    fn secp160r1_message_change_is_rejected(
        message in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
    ) {
        let pair = KeyPair::<Secp160r1>::from_material(PRIVATE_MATERIAL.as_bytes());
        let signature = SchnorrSecp160r1::sign_with(pair.secret(), &message).unwrap();
        let mut altered = message.clone();
        let index = position.index(altered.len());
        altered[index] = altered[index].wrapping_add(1);
        prop_assert!(!SchnorrSecp160r1::verify_with(pair.public(), &altered, &signature));
    }
}
