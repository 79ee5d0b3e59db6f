use std::fmt;

use zeroize::Zeroize;

use super::BYTES_MAX;
use crate::utils::ct_eq;

/// A BLAKE2b digest of 16 to 64 bytes.
///
/// Stored inline without heap allocation. A keyed digest is a MAC, so
/// equality is constant-time and the bytes are wiped on drop.
#[derive(Clone)]
pub struct Digest {
    bytes: [u8; BYTES_MAX],
    len: usize,
}

impl Digest {
    /// Copies the first `len` bytes of `full` into a zero-filled buffer.
    pub(crate) fn from_prefix(full: &[u8], len: usize) -> Self {
        let mut bytes = [0u8; BYTES_MAX];
        bytes[..len].copy_from_slice(&full[..len]);

        Digest { bytes, len }
    }

    /// The digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest length in bytes.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Copies the digest into a new vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_bytes(), other.as_bytes())
    }
}

impl Eq for Digest {}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest")
            .field(&hex::encode(self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_bytes()))
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
