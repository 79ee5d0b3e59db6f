use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use poly1305::Poly1305;
use poly1305::universal_hash::{KeyInit, UniversalHash};
use zeroize::Zeroizing;

use super::{BLOCK_BYTES, BYTES, KEYBYTES};
use crate::error::{Error, Result};
use crate::utils::check_exact;

/// Incremental Poly1305 state.
///
/// Holds the primitive accumulator (clamped `r`, `s`, running `h`), the
/// trailing partial block that has not been absorbed yet, and the lineage
/// flag shared with every state derived from the same key.
///
/// # Security
///
/// - [`AuthState::update`] returns a new snapshot and leaves `self` intact,
///   so several snapshots of one lineage may exist at once. Only one of
///   them may ever be finalized; afterwards every state of the lineage
///   fails with [`Error::StateConsumed`].
/// - The accumulator and the pending block are wiped on drop.
#[derive(Clone)]
pub struct AuthState {
    /// Primitive accumulator, keyed at init.
    mac: Poly1305,

    /// Bytes of an incomplete block.
    ///
    /// Poly1305 pads the last block differently from full blocks, so a
    /// partial block is held back until it fills or the state is finalized.
    pending: Zeroizing<[u8; BLOCK_BYTES]>,

    /// Number of valid bytes in `pending` (always `< BLOCK_BYTES`).
    pending_len: usize,

    /// Set once any state of this lineage has been finalized.
    consumed: Arc<AtomicBool>,
}

impl AuthState {
    /// Creates a state from a 32-byte one-time key.
    pub fn new(key: &[u8]) -> Result<Self> {
        check_exact("key", key.len(), KEYBYTES)?;

        let mac = Poly1305::new_from_slice(key)
            .map_err(|_| Error::PrimitiveFailure("poly1305 rejected the key"))?;

        Ok(AuthState {
            mac,
            pending: Zeroizing::new([0u8; BLOCK_BYTES]),
            pending_len: 0,
            consumed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Returns a new snapshot with `chunk` appended to the message.
    ///
    /// # Errors
    ///
    /// [`Error::StateConsumed`] if this lineage was already finalized.
    pub fn update(&self, chunk: &[u8]) -> Result<AuthState> {
        self.ensure_live()?;

        let mut next = self.clone();
        next.absorb(chunk);

        Ok(next)
    }

    /// Whether a state of this lineage has been finalized.
    pub fn is_consumed(&self) -> bool {
        self.consumed.load(Ordering::Acquire)
    }

    /// Appends `data` in place.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        if self.pending_len > 0 {
            let take = (BLOCK_BYTES - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];

            if self.pending_len < BLOCK_BYTES {
                return;
            }

            self.mac.update_padded(&self.pending[..]);
            self.pending_len = 0;
        }

        let full = data.len() - data.len() % BLOCK_BYTES;
        if full > 0 {
            self.mac.update_padded(&data[..full]);
        }

        let tail = &data[full..];
        self.pending[..tail.len()].copy_from_slice(tail);
        self.pending_len = tail.len();
    }

    /// Finishes the computation and marks the lineage as consumed.
    ///
    /// # Errors
    ///
    /// [`Error::StateConsumed`] if a state of this lineage was already
    /// finalized.
    pub fn finalize(self) -> Result<[u8; BYTES]> {
        if self.consumed.swap(true, Ordering::AcqRel) {
            tracing::warn!("poly1305 lineage finalized twice");
            return Err(Error::StateConsumed);
        }

        let AuthState {
            mac,
            pending,
            pending_len,
            ..
        } = self;

        let tag = mac.compute_unpadded(&pending[..pending_len]);

        let mut out = [0u8; BYTES];
        out.copy_from_slice(&tag);

        Ok(out)
    }

    fn ensure_live(&self) -> Result<()> {
        if self.is_consumed() {
            tracing::warn!("poly1305 lineage used after finalize");
            return Err(Error::StateConsumed);
        }

        Ok(())
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("pending_len", &self.pending_len)
            .field("consumed", &self.is_consumed())
            .finish_non_exhaustive()
    }
}
