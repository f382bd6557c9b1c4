//! Constants for the printable text codec

/// Digit alphabet: printable ASCII without space, both quotes, backslash and backtick.
///
/// The value of a digit is its index in this table.
pub const ALPHABET: &[u8; 90] =
    b"!#$%&()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[]^_abcdefghijklmnopqrstuvwxyz{|}~";

/// Radix of the codec
pub const BASE: usize = 90;

/// The zero digit, used for leading zero bytes and fixed-width padding
pub const ZERO_DIGIT: u8 = b'!';
