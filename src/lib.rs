//! Streaming keyed hashing and one-time authentication for Nebula
//!
//! This crate wraps vetted primitive implementations (BLAKE2b, Poly1305,
//! SHA-512) behind a small, explicit API with strict size and state
//! invariants. The arithmetic of each primitive comes from the RustCrypto
//! crates; what lives here is the contract around them.
//!
//! # Module overview
//!
//! - `hash`
//!   Hash functions. [`hash::generichash`] is BLAKE2b with a 16..=64 byte
//!   output, an optional 16..=64 byte key, and optional salt and
//!   personalization. [`hash::sha512`] is the legacy fixed-output
//!   full-message hash.
//!
//! - `onetimeauth`
//!   Poly1305 one-time authentication: a 32-byte single-use key, a 16-byte
//!   token, and constant-time verification.
//!
//! - `error`
//!   The [`Error`] type shared by every operation.
//!
//! # Operation shape
//!
//! Both streaming engines offer the same four operations:
//!
//! ```text
//! oneshot(..)            -> output
//! init(key, ..)          -> state
//! update(&state, chunk)  -> state'
//! finalize(state, ..)    -> output
//! ```
//!
//! `update` never mutates the state it is given. It returns a fresh
//! snapshot, so two computations can never share one state by accident.
//! `finalize` consumes the state.
//!
//! # Design goals
//!
//! - Fixed-size states and outputs, no allocation per `update`
//! - Every length validated before any work is done
//! - Sensitive temporaries wiped with `zeroize`
//! - Structured diagnostics through `tracing`, never including secret bytes

mod utils;

pub mod error;
pub mod hash;
pub mod onetimeauth;

pub use error::{Error, Result};
