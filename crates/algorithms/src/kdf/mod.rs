//! Hash-based derivations: key material to scalars, signing nonces,
//! Schnorr challenges and ECIES symmetric keys
//!
//! Every secret-dependent intermediate lives in a [`Zeroizing`] buffer.

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use secc_params::protocol::{
    ECIES_KDF_INFO, ECIES_KEY_MATERIAL_SIZE, ECIES_TAG_SIZE, KEYGEN_LABEL, NONCE_LABEL,
};
use secc_params::sizes::{AES256_KEY_SIZE, SHA512_OUTPUT_SIZE};

use crate::ec::curve::{Curve, OrderElement};
use crate::ec::scalar::Scalar;
use crate::error::{validate, Error, Result};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

fn to_wide(digest: &[u8]) -> Zeroizing<[u8; SHA512_OUTPUT_SIZE]> {
    let mut wide = Zeroizing::new([0u8; SHA512_OUTPUT_SIZE]);
    wide.copy_from_slice(digest);
    wide
}

/// Reduce arbitrary private material to a scalar: SHA-512(label ∥ material) mod n, zero mapped to one
pub fn hash_to_scalar<C: Curve>(material: &[u8]) -> Scalar<C> {
    let digest = Sha512::new()
        .chain_update(KEYGEN_LABEL)
        .chain_update(material)
        .finalize();
    Scalar::from_wide_bytes(&to_wide(&digest))
}

/// Deterministic signing nonce: HMAC-SHA512(d, label ∥ message) mod n, zero mapped to one
pub fn signing_nonce<C: Curve>(secret: &Scalar<C>, message: &[u8]) -> Result<Scalar<C>> {
    let key = secret.to_be_bytes();
    let mut mac = <HmacSha512 as Mac>::new_from_slice(&key)
        .map_err(|_| Error::param("nonce key", "rejected by HMAC-SHA512"))?;
    mac.update(NONCE_LABEL);
    mac.update(message);
    let digest = mac.finalize().into_bytes();
    Ok(Scalar::from_wide_bytes(&to_wide(&digest)))
}

/// Schnorr challenge e = SHA-512(R ∥ message) mod n; zero is a legal value
pub fn challenge<C: Curve>(r_encoding: &[u8], message: &[u8]) -> OrderElement<C> {
    let digest = Sha512::new()
        .chain_update(r_encoding)
        .chain_update(message)
        .finalize();
    OrderElement::<C>::from_be_bytes_wide(&to_wide(&digest))
}

/// Symmetric keys expanded from an ECIES shared secret
pub struct EciesKeys {
    material: Zeroizing<[u8; ECIES_KEY_MATERIAL_SIZE]>,
}

impl EciesKeys {
    /// AES-256-CTR key
    pub fn cipher_key(&self) -> &[u8] {
        &self.material[..AES256_KEY_SIZE]
    }

    /// HMAC-SHA256 key
    pub fn mac_key(&self) -> &[u8] {
        &self.material[AES256_KEY_SIZE..]
    }
}

/// HKDF-SHA256 with the shared x-coordinate as input and the ephemeral point encoding as salt
pub fn derive_ecies_keys(shared_x: &[u8], r_encoding: &[u8]) -> Result<EciesKeys> {
    let hk = Hkdf::<Sha256>::new(Some(r_encoding), shared_x);
    let mut material = Zeroizing::new([0u8; ECIES_KEY_MATERIAL_SIZE]);
    hk.expand(ECIES_KDF_INFO, &mut material[..])
        .map_err(|_| Error::param("ecies key material", "too long for HKDF-SHA256"))?;
    Ok(EciesKeys { material })
}

/// HMAC-SHA256(R ∥ payload), truncated
pub fn mac_tag(mac_key: &[u8], r_encoding: &[u8], payload: &[u8]) -> Result<[u8; ECIES_TAG_SIZE]> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(mac_key)
        .map_err(|_| Error::param("mac key", "rejected by HMAC-SHA256"))?;
    mac.update(r_encoding);
    mac.update(payload);
    let full = mac.finalize().into_bytes();
    let mut tag = [0u8; ECIES_TAG_SIZE];
    tag.copy_from_slice(&full[..ECIES_TAG_SIZE]);
    Ok(tag)
}

/// Recompute the tag and compare it with `tag` in constant time
pub fn verify_tag(mac_key: &[u8], r_encoding: &[u8], payload: &[u8], tag: &[u8]) -> Result<()> {
    validate::length("ecies tag", tag.len(), ECIES_TAG_SIZE)?;
    let expected = mac_tag(mac_key, r_encoding, payload)?;
    validate::authentication(bool::from(expected[..].ct_eq(tag)), "HMAC-SHA256")
}
