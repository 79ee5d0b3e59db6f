use zeroize::Zeroize;

use super::{AuthState, BYTES, KEYBYTES};
use crate::error::Result;
use crate::utils::{check_exact, ct_eq};

/// Computes the Poly1305 token of `message` under a one-time `key`.
///
/// # Parameters
///
/// - `message`: message to authenticate
/// - `key`: 32-byte one-time key, never to be used for another message
///
/// # Errors
///
/// [`Error::InvalidSize`](crate::Error::InvalidSize) if the key is not
/// 32 bytes.
pub fn authenticate(message: &[u8], key: &[u8]) -> Result<[u8; BYTES]> {
    let mut state = AuthState::new(key)?;
    state.absorb(message);
    state.finalize()
}

/// Checks `token` against `message` under `key`.
///
/// Returns `false` for a wrong token, and also for a token that is not
/// 16 bytes or a key that is not 32 bytes. A mismatch is an ordinary
/// outcome, not an error.
///
/// # Security Notes
///
/// - The comparison is constant-time: its duration does not depend on the
///   position of the first differing byte.
/// - The recomputed token is wiped before returning.
pub fn verify(token: &[u8], message: &[u8], key: &[u8]) -> bool {
    if check_exact("token", token.len(), BYTES).is_err()
        || check_exact("key", key.len(), KEYBYTES).is_err()
    {
        return false;
    }

    let Ok(mut expected) = authenticate(message, key) else {
        return false;
    };

    let valid = ct_eq(&expected, token);
    expected.zeroize();

    valid
}

/// Starts an incremental computation under a 32-byte one-time key.
pub fn init(key: &[u8]) -> Result<AuthState> {
    AuthState::new(key)
}

/// Returns a new state with `chunk` appended; `state` is not modified.
pub fn update(state: &AuthState, chunk: &[u8]) -> Result<AuthState> {
    state.update(chunk)
}

/// Consumes `state` and returns the 16-byte token.
pub fn finalize(state: AuthState) -> Result<[u8; BYTES]> {
    state.finalize()
}
