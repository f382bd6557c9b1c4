//! Printable base-90 text codec
//!
//! Bytes are read as one big-endian integer and re-expressed in radix 90
//! over [`ALPHABET`]. Two forms are provided:
//!
//! - the variable form ([`encode`]/[`decode`]) keeps every leading zero byte
//!   as one zero digit, so it is an exact inverse for arbitrary byte strings;
//! - the fixed form ([`encode_fixed`]/[`decode_fixed`]) always produces
//!   [`fixed_width`]`(len)` digits for a `len`-byte value, left-padded with
//!   the zero digit. Public keys and signatures use it.
//!
//! The codec only handles public data and is not constant time.

use secc_params::codec::{ALPHABET, BASE, ZERO_DIGIT};

use crate::error::{validate, Error, Result};

/// Digit value of an alphabet character
fn digit_value(ch: u8) -> Option<u8> {
    ALPHABET.iter().position(|&c| c == ch).map(|v| v as u8)
}

/// Minimal big-endian base-90 digits of `bytes`; empty for the value zero
fn to_digits(bytes: &[u8]) -> Vec<u8> {
    // little-endian accumulator
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 5 / 4 + 1);
    for &byte in bytes {
        let mut carry = byte as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % BASE as u32) as u8;
            carry /= BASE as u32;
        }
        while carry > 0 {
            digits.push((carry % BASE as u32) as u8);
            carry /= BASE as u32;
        }
    }
    digits.reverse();
    digits
}

/// Minimal big-endian bytes of a big-endian digit sequence; empty for zero
fn from_digits(digits: &[u8]) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::with_capacity(digits.len());
    for &digit in digits {
        let mut carry = digit as u32;
        for b in bytes.iter_mut() {
            carry += *b as u32 * BASE as u32;
            *b = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    bytes.reverse();
    bytes
}

fn parse_digits(context: &'static str, text: &str) -> Result<Vec<u8>> {
    text.bytes()
        .enumerate()
        .map(|(i, ch)| {
            digit_value(ch).ok_or_else(|| {
                Error::encoding(context, format!("character {:?} at offset {} is not a digit", ch as char, i))
            })
        })
        .collect()
}

fn render(digits: &[u8], pad: usize) -> String {
    let mut out = String::with_capacity(pad + digits.len());
    out.extend(core::iter::repeat(ZERO_DIGIT as char).take(pad));
    out.extend(digits.iter().map(|&d| ALPHABET[d as usize] as char));
    out
}

/// Encode arbitrary bytes in the variable-length form
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    render(&to_digits(&bytes[zeros..]), zeros)
}

/// Decode text produced by [`encode`]
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let digits = parse_digits("text", text)?;
    let zeros = digits.iter().take_while(|&&d| d == 0).count();
    let mut out = vec![0u8; zeros];
    out.extend_from_slice(&from_digits(&digits[zeros..]));
    Ok(out)
}

/// Number of digits needed for any `len`-byte value: the digit count of 0xff…ff
pub fn fixed_width(len: usize) -> usize {
    to_digits(&vec![0xffu8; len]).len()
}

/// Encode `bytes` as exactly [`fixed_width`]`(bytes.len())` digits
pub fn encode_fixed(bytes: &[u8]) -> String {
    let digits = to_digits(bytes);
    render(&digits, fixed_width(bytes.len()) - digits.len())
}

/// Decode fixed-width text into exactly `len` bytes.
///
/// The text must be exactly `fixed_width(len)` digits and its value must fit
/// in `len` bytes.
pub fn decode_fixed(text: &str, len: usize) -> Result<Vec<u8>> {
    validate::length("fixed-width text", text.len(), fixed_width(len))?;
    let digits = parse_digits("fixed-width text", text)?;
    let value = from_digits(&digits);
    let significant = value.iter().skip_while(|&&b| b == 0).count();
    if significant > len {
        return Err(Error::encoding(
            "fixed-width text",
            format!("value does not fit in {} bytes", len),
        ));
    }
    let mut out = vec![0u8; len - significant];
    out.extend_from_slice(&value[value.len() - significant..]);
    Ok(out)
}
