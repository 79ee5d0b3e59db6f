//! SHA-512 full-message hashing.
//!
//! This is the legacy `crypto_hash` construction: a fixed 64-byte digest of
//! the whole message, computed in one call. There is no key and no
//! streaming interface; new code should prefer
//! [`generichash`](crate::hash::generichash).
//!
//! The compression function itself comes from the `sha2` crate.

use sha2::{Digest, Sha512};

use super::BYTES;

/// Computes the SHA-512 hash of `input`.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The 512-bit digest as 64 bytes (`[u8; 64]`)
///
/// # Notes
/// - The output buffer is zero-filled before the digest is written into it.
pub fn hash(input: &[u8]) -> [u8; BYTES] {
    let mut out = [0u8; BYTES];
    out.copy_from_slice(&Sha512::digest(input));

    out
}
