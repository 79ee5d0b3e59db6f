//! Crate-internal helpers shared by the hash and authentication engines.

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Rejects `actual` unless it lies in `min..=max`.
pub(crate) fn check_size(what: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        tracing::debug!(what, actual, min, max, "rejected input size");
        return Err(Error::InvalidSize {
            what,
            actual,
            min,
            max,
        });
    }

    Ok(())
}

/// Rejects `actual` unless it is exactly `expected`.
#[inline]
pub(crate) fn check_exact(what: &'static str, actual: usize, expected: usize) -> Result<()> {
    check_size(what, actual, expected, expected)
}

/// Constant-time equality of two byte strings.
///
/// Lengths are public; only the contents are compared without early exit.
#[inline]
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
