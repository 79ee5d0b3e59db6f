//! One-shot and streaming entry points for BLAKE2b generic hashing.

use zeroize::Zeroize;

use super::{Digest, HashState, PERSONALBYTES, SALTBYTES};
use crate::error::Result;
use crate::utils::check_exact;

/// Hashes `message` in one call.
///
/// # Parameters
///
/// - `out_len`: digest length, 16..=64 bytes
/// - `message`: arbitrary-length input
/// - `key`: `None` for unkeyed hashing, otherwise 16..=64 bytes
///
/// # Errors
///
/// [`Error::InvalidSize`](crate::Error::InvalidSize) if `out_len` or the key
/// length is out of range. Nothing is hashed in that case.
pub fn hash(out_len: usize, message: &[u8], key: Option<&[u8]>) -> Result<Digest> {
    let mut state = HashState::new(key, out_len)?;
    state.absorb(message);
    state.finalize(out_len)
}

/// Starts a streaming computation.
///
/// Same size rules as [`hash`].
pub fn init(key: Option<&[u8]>, out_len: usize) -> Result<HashState> {
    HashState::new(key, out_len)
}

/// Returns a new state with `chunk` appended; `state` is not modified.
#[must_use]
pub fn update(state: &HashState, chunk: &[u8]) -> HashState {
    state.update(chunk)
}

/// Consumes `state` and returns its digest.
///
/// `out_len` must be 16..=64 and should match the length given to [`init`].
pub fn finalize(state: HashState, out_len: usize) -> Result<Digest> {
    state.finalize(out_len)
}

/// Salted and personalized one-shot hash written into `out`.
///
/// The digest length is `out.len()` (16..=64). `salt` and `personal` must be
/// exactly 16 bytes each, and a present key 16..=64 bytes.
///
/// # Returns
///
/// `true` if `out` now holds the digest. `false` if any length was rejected;
/// `out` is then left zero-filled.
///
/// # Notes
///
/// This reports success as a boolean rather than a [`Result`]. For the
/// `Result` form use [`GenericHashParams::hash`](super::GenericHashParams::hash).
pub fn hash_salt_personal(
    out: &mut [u8],
    message: &[u8],
    key: Option<&[u8]>,
    salt: &[u8],
    personal: &[u8],
) -> bool {
    out.zeroize();

    match salted(out.len(), message, key, salt, personal) {
        Ok(digest) => {
            out.copy_from_slice(digest.as_bytes());
            true
        }
        Err(_) => false,
    }
}

pub(crate) fn salted(
    out_len: usize,
    message: &[u8],
    key: Option<&[u8]>,
    salt: &[u8],
    personal: &[u8],
) -> Result<Digest> {
    check_exact("salt", salt.len(), SALTBYTES)?;
    check_exact("personal", personal.len(), PERSONALBYTES)?;

    let mut state = HashState::with_params(key, salt, personal, out_len)?;
    state.absorb(message);
    state.finalize(out_len)
}
