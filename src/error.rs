//! Error type shared by every primitive in the crate.
//!
//! Size violations are reported before any cryptographic work starts.
//! A failed verification is *not* an error: `verify` returns `false`.

use thiserror::Error;

/// Errors returned by the hashing and authentication APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied length is outside its documented bounds.
    #[error("invalid {what} length {actual}, expected {min}..={max}")]
    InvalidSize {
        /// Which argument was rejected (`"key"`, `"output"`, ...).
        what: &'static str,
        /// The length that was supplied.
        actual: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// The underlying primitive rejected its input.
    ///
    /// This is not expected once sizes have been validated.
    #[error("primitive failure: {0}")]
    PrimitiveFailure(&'static str),

    /// The state belongs to a computation that has already been finalized.
    #[error("state lineage already finalized")]
    StateConsumed,
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
