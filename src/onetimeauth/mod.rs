//! One-time authentication.
//!
//! Poly1305 is the default one-time authenticator; its API is re-exported
//! here so callers can stay agnostic of the primitive name.

pub mod poly1305;

pub use self::poly1305::{
    AuthState, BYTES, KEYBYTES, authenticate, finalize, init, update, verify,
};

/// Name of the default one-time authenticator.
pub const PRIMITIVE: &str = "poly1305";
