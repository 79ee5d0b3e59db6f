//! Hash algorithms exposed by the crate.
//!
//! - [`generichash`]: BLAKE2b, keyed or unkeyed, one-shot or incremental.
//! - [`sha512`]: legacy fixed-output SHA-512 over a whole message.

pub mod generichash;
pub mod sha512;
