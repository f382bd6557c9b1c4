//! Core types with security guarantees for the secc library
//!
//! Keys and signatures cross the library boundary as printable text. The
//! wrappers here keep the three kinds apart and make sure private key text
//! is wiped when dropped.

use core::fmt;
use core::str::FromStr;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A fixed-size array of bytes that is securely zeroed when dropped
///
/// Equality is constant time and `Debug` hides the contents.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Fill from `rng`, reporting a failing source instead of panicking
    pub fn try_random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R) -> crate::Result<Self> {
        let mut data = [0u8; N];
        rng.try_fill_bytes(&mut data)
            .map_err(|e| crate::Error::random_source("SecretBytes::try_random", e.to_string()))?;
        Ok(Self { data })
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data[..].ct_eq(&other.data[..]).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

/// Encoded private key material
///
/// Any text is valid private material; the scalar is derived from its bytes.
#[derive(Clone)]
pub struct PrivateKeyText(Zeroizing<String>);

impl PrivateKeyText {
    /// Wrap private material text
    pub fn new(text: impl Into<String>) -> Self {
        Self(Zeroizing::new(text.into()))
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Borrow the text as bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl PartialEq for PrivateKeyText {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for PrivateKeyText {}

impl fmt::Debug for PrivateKeyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKeyText[REDACTED]")
    }
}

impl From<&str> for PrivateKeyText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

macro_rules! public_text {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Wrap already-encoded text
            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            /// Borrow the text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the underlying string
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self::new(text)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

public_text!(
    /// Fixed-width text encoding of a compressed public point
    PublicKeyText
);

public_text!(
    /// Fixed-width text encoding of a signature
    SignatureText
);
