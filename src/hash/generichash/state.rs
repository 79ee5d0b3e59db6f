//! Incremental BLAKE2b state.

use std::fmt;

use blake2::Blake2bVarCore;
use blake2::digest::Output;
use blake2::digest::core_api::{Buffer, UpdateCore, VariableOutputCore};
use zeroize::{Zeroize, Zeroizing};

use super::{BLOCK_BYTES, BYTES_MAX, BYTES_MIN, Digest, KEYBYTES_MAX, KEYBYTES_MIN};
use crate::error::Result;
use crate::utils::check_size;

/// Running BLAKE2b computation.
///
/// A `HashState` is a self-contained snapshot: the chaining values and
/// counter of the primitive, the block of not-yet-compressed input, and the
/// output length chosen at init.
///
/// - [`HashState::update`] never mutates `self`; it returns a new snapshot.
///   Older snapshots stay valid and can be finalized or extended on their own.
/// - [`HashState::finalize`] takes the state by value, so a finalized state
///   cannot be touched again.
///
/// The struct is aligned to a 64-byte cache line.
#[derive(Clone)]
#[repr(align(64))]
pub struct HashState {
    /// Chaining values, counter and parameter block.
    core: Blake2bVarCore,

    /// Input not yet compressed.
    ///
    /// The buffer is lazy: a full block is only compressed once more input
    /// follows, because the last block must be compressed with the
    /// finalization flag.
    buffer: Buffer<Blake2bVarCore>,

    /// Digest length fixed at init.
    out_len: usize,
}

impl HashState {
    /// Starts an unsalted computation.
    ///
    /// `key == None` selects unkeyed hashing. A present key must be
    /// 16..=64 bytes, and `out_len` must be 16..=64.
    pub fn new(key: Option<&[u8]>, out_len: usize) -> Result<Self> {
        Self::with_params(key, &[], &[], out_len)
    }

    /// Starts a computation with the full sequential-mode parameter set.
    ///
    /// `salt` and `personal` are at most 16 bytes each; callers validate
    /// their exact lengths before reaching this point.
    pub(crate) fn with_params(
        key: Option<&[u8]>,
        salt: &[u8],
        personal: &[u8],
        out_len: usize,
    ) -> Result<Self> {
        check_size("output", out_len, BYTES_MIN, BYTES_MAX)?;

        let key_len = match key {
            Some(key) => {
                check_size("key", key.len(), KEYBYTES_MIN, KEYBYTES_MAX)?;
                key.len()
            }
            None => 0,
        };

        let mut state = HashState {
            core: Blake2bVarCore::new_with_params(salt, personal, key_len, out_len),
            buffer: Default::default(),
            out_len,
        };

        // A key is absorbed as a full zero-padded first block.
        if let Some(key) = key {
            let mut block = Zeroizing::new([0u8; BLOCK_BYTES]);
            block[..key.len()].copy_from_slice(key);
            state.absorb(&block[..]);
        }

        Ok(state)
    }

    /// Digest length chosen when the state was created.
    #[inline]
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Returns a new snapshot with `chunk` appended to the input.
    ///
    /// `self` is left untouched. Empty chunks are accepted and change
    /// nothing.
    #[must_use]
    pub fn update(&self, chunk: &[u8]) -> HashState {
        let mut next = self.clone();
        next.absorb(chunk);
        next
    }

    /// Appends `data` to this state in place.
    pub(crate) fn absorb(&mut self, data: &[u8]) {
        let HashState { core, buffer, .. } = self;
        buffer.digest_blocks(data, |blocks| core.update_blocks(blocks));
    }

    /// Finishes the computation and returns the first `out_len` bytes.
    ///
    /// `out_len` must be 16..=64. It is expected to equal the length given at
    /// init; a different value is accepted and yields a truncation of the
    /// init-length computation, which matches no standard digest.
    pub fn finalize(mut self, out_len: usize) -> Result<Digest> {
        check_size("output", out_len, BYTES_MIN, BYTES_MAX)?;

        if out_len != self.out_len {
            tracing::warn!(
                init_len = self.out_len,
                requested_len = out_len,
                "finalizing generichash with an output length different from init"
            );
        }

        let mut full = Output::<Blake2bVarCore>::default();
        self.core.finalize_variable_core(&mut self.buffer, &mut full);

        let digest = Digest::from_prefix(&full, out_len);
        full.as_mut_slice().zeroize();

        Ok(digest)
    }
}

impl fmt::Debug for HashState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashState")
            .field("out_len", &self.out_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_cache_line_sized() {
        assert_eq!(align_of::<HashState>(), 64);
        assert_eq!(size_of::<HashState>() % 64, 0);
    }

    #[test]
    fn update_leaves_source_untouched() {
        let base = HashState::new(None, 32).unwrap();
        let extended = base.update(b"abc");

        let empty = base.finalize(32).unwrap();
        let abc = extended.finalize(32).unwrap();

        assert_ne!(empty, abc);
        assert_eq!(empty, HashState::new(None, 32).unwrap().finalize(32).unwrap());
    }

    #[test]
    fn finalize_rejects_out_of_range_length() {
        let state = HashState::new(None, 32).unwrap();
        assert!(state.clone().finalize(15).is_err());
        assert!(state.finalize(65).is_err());
    }
}
