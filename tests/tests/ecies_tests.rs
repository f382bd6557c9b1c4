//! Property and known-answer tests for ECIES through the `Pke` trait

use proptest::prelude::*;
use secc::pke::{Ecies, EciesP256, EciesSecp160r1};
use secc_algorithms::ec::{Curve, KeyPair, NistP192, NistP224, NistP256, Secp160r1, Secp256k1};
use secc_api::{ErrorKind, Pke};
use secc_tests::vectors::{self, ENCRYPTED_MESSAGE, PRIVATE_MATERIAL};
use secc_tests::{deterministic_rng, init_tracing};

fn decrypt_known<C: Curve>() {
    let v = vectors::for_curve(C::ID);
    let pair = KeyPair::<C>::from_material(PRIVATE_MATERIAL.as_bytes());
    let ciphertext = hex::decode(v.ciphertext_hex).unwrap();
    assert_eq!(
        Ecies::<C>::decrypt_with(pair.secret(), &ciphertext).unwrap(),
        ENCRYPTED_MESSAGE
    );
}

#[test]
fn known_ciphertexts_decrypt() {
    decrypt_known::<Secp160r1>();
    decrypt_known::<NistP192>();
    decrypt_known::<NistP224>();
    decrypt_known::<NistP256>();
    decrypt_known::<Secp256k1>();
}

#[test]
fn truncated_ciphertexts_are_malformed() {
    init_tracing();
    let mut rng = deterministic_rng(11);
    let (pk, sk) = EciesSecp160r1::keypair(&mut rng).unwrap();
    let ciphertext = EciesSecp160r1::encrypt(&pk, ENCRYPTED_MESSAGE, &mut rng).unwrap();

    let min = EciesSecp160r1::overhead();
    for len in 0..min {
        let err = EciesSecp160r1::decrypt(&sk, &ciphertext[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput, "length {}", len);
    }
    // cutting into the payload still parses but fails the tag
    let err = EciesSecp160r1::decrypt(&sk, &ciphertext[..ciphertext.len() - 1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn p256_round_trip(seed in any::<u64>(), plaintext in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut rng = deterministic_rng(seed);
        let (pk, sk) = EciesP256::keypair(&mut rng).unwrap();
        let ciphertext = EciesP256::encrypt(&pk, &plaintext, &mut rng).unwrap();
        prop_assert_eq!(ciphertext.len(), plaintext.len() + EciesP256::overhead());
        prop_assert_eq!(EciesP256::decrypt(&sk, &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn secp160r1_any_bit_flip_is_rejected(
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut rng = deterministic_rng(seed);
        let (pk, sk) = EciesSecp160r1::keypair(&mut rng).unwrap();
        let mut ciphertext = EciesSecp160r1::encrypt(&pk, &plaintext, &mut rng).unwrap();
        let index = position.index(ciphertext.len());
        ciphertext[index] ^= 1 << bit;

        let err = EciesSecp160r1::decrypt(&sk, &ciphertext).unwrap_err();
        // a flipped ephemeral point either fails to decode or derives the wrong keys
        prop_assert!(matches!(err.kind(), ErrorKind::AuthenticationFailure | ErrorKind::InvalidPoint));
        if index >= 21 {
            prop_assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
        }
    }
}
