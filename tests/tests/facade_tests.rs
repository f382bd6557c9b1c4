//! End-to-end tests of the text facade

use secc::prelude::*;
use secc_tests::vectors::{self, ENCRYPTED_MESSAGE, PRIVATE_MATERIAL, SIGNED_MESSAGE};
use secc_tests::{deterministic_rng, init_tracing};

fn check_golden<C: Curve>() {
    init_tracing();
    let v = vectors::for_curve(C::ID);
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);

    let public = Ecc::<C>::public_keygen(&private).unwrap();
    assert_eq!(public.as_str(), v.public_text, "{}", C::ID);

    let ecc = Ecc::<C>::new(private, &public).unwrap();
    let signature = ecc.sign(SIGNED_MESSAGE).unwrap();
    assert_eq!(signature.as_str(), v.signature_text, "{}", C::ID);
    assert!(ecc.verify(SIGNED_MESSAGE, &signature).unwrap());

    let ciphertext = hex::decode(v.ciphertext_hex).unwrap();
    assert_eq!(ecc.decrypt(&ciphertext).unwrap(), ENCRYPTED_MESSAGE);
}

fn check_round_trip<C: Curve>() {
    init_tracing();
    let mut rng = deterministic_rng(0xfacade);
    let (private, public) = Ecc::<C>::generate_keypair_with(&mut rng).unwrap();
    assert_eq!(Ecc::<C>::public_keygen(&private).unwrap(), public);

    let ecc = Ecc::<C>::new(private, &public).unwrap();
    assert_eq!(ecc.public_key().as_ref(), Some(&public));

    let c1 = ecc.encrypt_with(ENCRYPTED_MESSAGE, &mut rng).unwrap();
    let c2 = ecc.encrypt_with(ENCRYPTED_MESSAGE, &mut rng).unwrap();
    assert_ne!(c1, c2);
    assert_eq!(ecc.decrypt(&c1).unwrap(), ENCRYPTED_MESSAGE);
    assert_eq!(ecc.decrypt(&c2).unwrap(), ENCRYPTED_MESSAGE);

    let text = secc::encode_ciphertext(&c1);
    assert_eq!(secc::decode_ciphertext::<C>(&text).unwrap(), c1);

    let signature = ecc.sign(SIGNED_MESSAGE).unwrap();
    assert!(Ecc::<C>::from_public(&public).unwrap().verify(SIGNED_MESSAGE, &signature).unwrap());
    assert!(!ecc.verify(b"a different message", &signature).unwrap());
}

macro_rules! facade_curve_tests {
    ($($module:ident => $curve:ty),* $(,)?) => {
        $(
            mod $module {
                use super::*;

                #[test]
                fn golden_vectors() {
                    check_golden::<$curve>();
                }

                #[test]
                fn round_trip() {
                    check_round_trip::<$curve>();
                }
            }
        )*
    };
}

facade_curve_tests! {
    secp160r1 => Secp160r1,
    p192 => NistP192,
    p224 => NistP224,
    p256 => NistP256,
    secp256k1 => Secp256k1,
}

#[test]
fn default_curve_free_functions() {
    init_tracing();
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = secc::public_keygen(&private).unwrap();
    assert_eq!(public.as_str(), "!J],9*>23]yz}J%L&98Di=I7L1");

    let signature = secc::sign(SIGNED_MESSAGE, &private).unwrap();
    assert_eq!(
        signature.as_str(),
        "!#d{WBdLDu[Q[_x?98_67hLQ-0Ku{]GG@1,)b+lT!7m.;$UTiq9,"
    );
    assert!(secc::verify(SIGNED_MESSAGE, &signature, &public).unwrap());

    let ciphertext = secc::encrypt(ENCRYPTED_MESSAGE, &public).unwrap();
    assert_eq!(
        secc::decrypt(&ciphertext, &private, &public).unwrap(),
        ENCRYPTED_MESSAGE
    );
}

#[test]
fn generate_keypair_uses_os_rng() {
    let (a_private, a_public) = secc::generate_keypair().unwrap();
    let (b_private, b_public) = secc::generate_keypair().unwrap();
    assert_ne!(a_private, b_private);
    assert_ne!(a_public, b_public);
    // 32 bytes of material in fixed-width text
    assert_eq!(a_private.as_str().len(), 40);
}

#[test]
fn public_keygen_is_deterministic() {
    let private = PrivateKeyText::from("correct horse battery staple");
    let first = secc::public_keygen(&private).unwrap();
    let second = secc::public_keygen(&private).unwrap();
    assert_eq!(first, second);
    assert_ne!(first, secc::public_keygen(&PrivateKeyText::from("correct horse")).unwrap());
}

#[test]
fn empty_inputs_are_malformed() {
    init_tracing();
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = secc::public_keygen(&private).unwrap();
    let ecc = Ecc::<Secp160r1>::new(private.clone(), &public).unwrap();
    let signature = ecc.sign(SIGNED_MESSAGE).unwrap();

    let kinds = [
        ecc.encrypt(b"").unwrap_err().kind(),
        ecc.decrypt(b"").unwrap_err().kind(),
        ecc.sign(b"").unwrap_err().kind(),
        ecc.verify(b"", &signature).unwrap_err().kind(),
        secc::public_keygen(&PrivateKeyText::from("")).unwrap_err().kind(),
        Ecc::<Secp160r1>::from_private("").unwrap_err().kind(),
    ];
    for kind in kinds {
        assert_eq!(kind, ErrorKind::MalformedInput);
    }
}

#[test]
fn missing_key_half_is_malformed() {
    init_tracing();
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = secc::public_keygen(&private).unwrap();

    let signer = Ecc::<Secp160r1>::from_private(private).unwrap();
    let signature = signer.sign(SIGNED_MESSAGE).unwrap();
    assert_eq!(
        signer.verify(SIGNED_MESSAGE, &signature).unwrap_err().kind(),
        ErrorKind::MalformedInput
    );
    assert_eq!(signer.encrypt(ENCRYPTED_MESSAGE).unwrap_err().kind(), ErrorKind::MalformedInput);
    assert_eq!(signer.decrypt(&[1u8; 64]).unwrap_err().kind(), ErrorKind::MalformedInput);

    let verifier = Ecc::<Secp160r1>::from_public(&public).unwrap();
    assert_eq!(verifier.sign(SIGNED_MESSAGE).unwrap_err().kind(), ErrorKind::MalformedInput);
    let ciphertext = verifier.encrypt(ENCRYPTED_MESSAGE).unwrap();
    assert_eq!(verifier.decrypt(&ciphertext).unwrap_err().kind(), ErrorKind::MalformedInput);
    assert!(verifier.verify(SIGNED_MESSAGE, &signature).unwrap());
}

#[test]
fn undecodable_signature_text_is_false() {
    init_tracing();
    let public = secc::public_keygen(&PrivateKeyText::from(PRIVATE_MATERIAL)).unwrap();
    let verifier = Ecc::<Secp160r1>::from_public(&public).unwrap();

    for text in ["", "short", "has space in it which is not a digit!!!!!!!!!", "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~"] {
        assert!(!verifier.verify(SIGNED_MESSAGE, &SignatureText::from(text)).unwrap(), "{:?}", text);
    }
}

#[test]
fn flipped_signature_digit_is_false() {
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = secc::public_keygen(&private).unwrap();
    let signature = secc::sign(SIGNED_MESSAGE, &private).unwrap();

    let mut chars: Vec<char> = signature.as_str().chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == '#' { '$' } else { '#' };
    let tampered = SignatureText::new(chars.into_iter().collect::<String>());
    assert!(!secc::verify(SIGNED_MESSAGE, &tampered, &public).unwrap());
}

#[test]
fn tampered_ciphertext_fails_authentication() {
    init_tracing();
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = secc::public_keygen(&private).unwrap();
    let mut ciphertext = secc::encrypt(ENCRYPTED_MESSAGE, &public).unwrap();
    let middle = ciphertext.len() / 2;
    ciphertext[middle] ^= 0x80;

    let err = secc::decrypt(&ciphertext, &private, &public).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    assert!(!err.is_fatal());
}

#[test]
fn bad_public_key_text() {
    init_tracing();
    // wrong width
    let err = Ecc::<Secp160r1>::from_public(&PublicKeyText::from("!!!")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    // right width, identity encoding
    let zeros = PublicKeyText::new("!".repeat(26));
    let err = Ecc::<Secp160r1>::from_public(&zeros).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPoint);

    // a valid key on another curve has the wrong width
    let p256 = Ecc::<NistP256>::public_keygen(&PrivateKeyText::from(PRIVATE_MATERIAL)).unwrap();
    assert!(Ecc::<Secp160r1>::from_public(&p256).is_err());
}

#[test]
fn short_ciphertext_text_is_malformed() {
    let err = secc::decode_ciphertext::<Secp160r1>(&secc::encode_ciphertext(&[7u8; 36])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    let err = secc::decode_ciphertext::<Secp160r1>("not valid text").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(secc::decode_ciphertext::<Secp160r1>(&secc::encode_ciphertext(&[7u8; 37])).is_ok());
}

#[test]
fn init_is_idempotent() {
    secc::init();
    secc::init();
    let public = secc::public_keygen(&PrivateKeyText::from(PRIVATE_MATERIAL)).unwrap();
    assert_eq!(public.as_str(), "!J],9*>23]yz}J%L&98Di=I7L1");
}

#[test]
fn debug_output_hides_private_key() {
    let ecc = Ecc::<Secp160r1>::from_private(PRIVATE_MATERIAL).unwrap();
    let rendered = format!("{:?}", ecc);
    assert!(!rendered.contains(PRIVATE_MATERIAL));
    assert!(rendered.contains("secp160r1"));
}

#[test]
fn curve_ids_parse_configuration_names() {
    assert_eq!("p160".parse::<CurveId>().unwrap(), <DefaultCurve as Curve>::ID);
    assert_eq!("p256".parse::<CurveId>().unwrap(), CurveId::NistP256);
    assert!("p999".parse::<CurveId>().is_err());
}

#[test]
fn failing_random_source_is_fatal() {
    let err = Ecc::<Secp160r1>::generate_keypair_with(&mut secc_tests::FailingRng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RandomSourceExhausted);
    assert!(err.is_fatal());
}

#[test]
fn every_curve_has_its_own_vectors() {
    for id in CurveId::ALL {
        assert_eq!(vectors::for_curve(id).curve, id);
    }
}

#[test]
fn kilobyte_ciphertext_text_round_trip() {
    let mut rng = deterministic_rng(4096);
    let private = PrivateKeyText::from(PRIVATE_MATERIAL);
    let public = Ecc::<Secp160r1>::public_keygen(&private).unwrap();
    let ecc = Ecc::<Secp160r1>::new(private, &public).unwrap();

    let plaintext = vec![0x5a; 4096];
    let ciphertext = ecc.encrypt_with(&plaintext, &mut rng).unwrap();
    let text = secc::encode_ciphertext(&ciphertext);
    let decoded = secc::decode_ciphertext::<Secp160r1>(&text).unwrap();
    assert_eq!(decoded, ciphertext);
    assert_eq!(ecc.decrypt(&decoded).unwrap(), plaintext);
}
