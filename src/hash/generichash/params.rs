//! Parameter set for BLAKE2b generic hashing.
//!
//! Groups the output length, key, salt and personalization of one
//! computation and validates them together. Unlike
//! [`hash_salt_personal`](super::hash_salt_personal), everything here
//! reports failures through [`Result`].

use std::fmt;

use zeroize::Zeroizing;

use super::{
    BYTES, BYTES_MAX, BYTES_MIN, Digest, HashState, KEYBYTES_MAX, KEYBYTES_MIN, PERSONALBYTES,
    SALTBYTES,
};
use crate::error::Result;
use crate::utils::check_size;

/// Configuration of a BLAKE2b computation.
///
/// # Example
///
/// ```
/// use cryptal_auth::hash::generichash::GenericHashParams;
///
/// let params = GenericHashParams {
///     out_len: 64,
///     salt: Some(*b"application-salt"),
///     personal: Some(*b"my-protocol-v1.0"),
///     ..Default::default()
/// }
/// .keyed(&[1u8; 32]);
///
/// let digest = params.hash(b"message").unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
#[derive(Clone)]
pub struct GenericHashParams {
    /// Digest length in bytes (16..=64).
    pub out_len: usize,
    /// Optional key (16..=64 bytes), wiped on drop.
    pub key: Option<Zeroizing<Vec<u8>>>,
    /// Optional salt; absent means all zero.
    pub salt: Option<[u8; SALTBYTES]>,
    /// Optional personalization; absent means all zero.
    pub personal: Option<[u8; PERSONALBYTES]>,
}

impl GenericHashParams {
    /// Returns these parameters with `key` set.
    #[must_use]
    pub fn keyed(mut self, key: &[u8]) -> Self {
        self.key = Some(Zeroizing::new(key.to_vec()));
        self
    }

    /// Checks every length against its bounds.
    pub fn validate(&self) -> Result<()> {
        check_size("output", self.out_len, BYTES_MIN, BYTES_MAX)?;

        if let Some(key) = &self.key {
            check_size("key", key.len(), KEYBYTES_MIN, KEYBYTES_MAX)?;
        }

        Ok(())
    }

    /// Opens a streaming computation with these parameters.
    ///
    /// Salt and personalization carry over into the state, so they also
    /// apply to incremental hashing.
    pub fn to_state(&self) -> Result<HashState> {
        self.validate()?;

        let key = self.key.as_ref().map(|k| k.as_slice());
        let salt = self.salt.as_ref().map_or(&[][..], |s| &s[..]);
        let personal = self.personal.as_ref().map_or(&[][..], |p| &p[..]);

        HashState::with_params(key, salt, personal, self.out_len)
    }

    /// Hashes `message` in one call.
    pub fn hash(&self, message: &[u8]) -> Result<Digest> {
        let mut state = self.to_state()?;
        state.absorb(message);
        state.finalize(self.out_len)
    }
}

impl Default for GenericHashParams {
    /// 32-byte unkeyed digest, no salt, no personalization.
    fn default() -> Self {
        Self {
            out_len: BYTES,
            key: None,
            salt: None,
            personal: None,
        }
    }
}

impl fmt::Debug for GenericHashParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericHashParams")
            .field("out_len", &self.out_len)
            .field("key_len", &self.key.as_ref().map(|k| k.len()))
            .field("salted", &self.salt.is_some())
            .field("personalized", &self.personal.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_params_validate() {
        assert!(GenericHashParams::default().validate().is_ok());
    }

    #[test]
    fn short_key_is_rejected() {
        let params = GenericHashParams::default().keyed(&[0u8; 15]);
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidSize { what: "key", actual: 15, .. })
        ));
    }

    #[test]
    fn debug_does_not_print_key_material() {
        let params = GenericHashParams::default().keyed(&[0x42; 32]);
        let shown = format!("{params:?}");
        assert!(shown.contains("key_len: Some(32)"));
        assert!(!shown.contains("66"));
    }
}
