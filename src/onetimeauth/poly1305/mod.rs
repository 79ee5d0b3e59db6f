//! Poly1305 one-time authenticator (RFC 8439).
//!
//! A 32-byte one-time key authenticates exactly one message and yields a
//! 16-byte token. The field arithmetic is provided by the `poly1305` crate;
//! this module is split into two layers:
//!
//! - `state`: the incremental [`AuthState`], partial-block buffering and
//!   one-time enforcement across copies
//! - `core`: one-shot authentication, constant-time verification, and the
//!   `init`/`update`/`finalize` entry points
//!
//! ## Security
//!
//! - A key must never authenticate two different messages. Every state
//!   derived from one [`init`] shares a lineage; once any of them is
//!   finalized, the others refuse further use.
//! - Token comparison in [`verify`] is constant-time.

mod core;
mod state;

pub use self::core::{authenticate, finalize, init, update, verify};
pub use self::state::AuthState;

/// Token length in bytes.
pub const BYTES: usize = 16;

/// Key length in bytes.
pub const KEYBYTES: usize = 32;

/// Poly1305 block size.
pub(crate) const BLOCK_BYTES: usize = 16;
