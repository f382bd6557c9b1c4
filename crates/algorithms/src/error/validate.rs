//! Input checks shared by the primitives

use subtle::Choice;

use super::{Error, Result};

/// `actual` must equal `expected`
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Length {
            context,
            expected,
            actual,
        })
    }
}

/// Reject a value whose zero test was computed in constant time
#[inline]
pub fn nonzero(context: &'static str, is_zero: Choice) -> Result<()> {
    if bool::from(is_zero) {
        return Err(Error::param(context, "value is zero"));
    }
    Ok(())
}

/// Turn a tag comparison into an authentication error
#[inline]
pub fn authentication(tag_matches: bool, algorithm: &'static str) -> Result<()> {
    if tag_matches {
        Ok(())
    } else {
        Err(Error::Authentication { algorithm })
    }
}
