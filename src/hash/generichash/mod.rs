//! BLAKE2b generic hashing (RFC 7693).
//!
//! Variable-length digests between 16 and 64 bytes, optionally keyed,
//! optionally salted and personalized. The BLAKE2b compression function is
//! provided by the `blake2` crate; this module owns the state lifecycle
//! around it:
//!
//! - size validation before any work is done
//! - buffering of partial blocks across `update` calls
//! - copy-on-update state snapshots
//! - wiping of temporary key material
//!
//! ## Usage
//!
//! ```
//! use cryptal_auth::hash::generichash;
//!
//! let key = [7u8; 32];
//! let oneshot = generichash::hash(32, b"hello world", Some(&key)).unwrap();
//!
//! let state = generichash::init(Some(&key), 32).unwrap();
//! let state = generichash::update(&state, b"hello ");
//! let state = generichash::update(&state, b"world");
//! let streamed = generichash::finalize(state, 32).unwrap();
//!
//! assert_eq!(oneshot, streamed);
//! ```

mod core;
mod digest;
mod params;
mod state;

pub use self::core::{finalize, hash, hash_salt_personal, init, update};
pub use self::digest::Digest;
pub use self::params::GenericHashParams;
pub use self::state::HashState;

/// Default digest length in bytes.
pub const BYTES: usize = 32;

/// Smallest accepted digest length in bytes.
pub const BYTES_MIN: usize = 16;

/// Largest accepted digest length in bytes.
pub const BYTES_MAX: usize = 64;

/// Default key length in bytes.
pub const KEYBYTES: usize = 32;

/// Smallest accepted key length in bytes.
pub const KEYBYTES_MIN: usize = 16;

/// Largest accepted key length in bytes.
pub const KEYBYTES_MAX: usize = 64;

/// Salt length in bytes.
pub const SALTBYTES: usize = 16;

/// Personalization length in bytes.
pub const PERSONALBYTES: usize = 16;

/// Size of a [`HashState`] in bytes.
///
/// The state is cache-line aligned, so this is always a multiple of 64.
pub const STATE_BYTES: usize = size_of::<HashState>();

/// BLAKE2b block size; a key occupies one full zero-padded block.
pub(crate) const BLOCK_BYTES: usize = 128;
