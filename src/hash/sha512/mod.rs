//! Legacy full-message hash (SHA-512).

mod core;

pub use self::core::hash;

/// Digest length in bytes.
pub const BYTES: usize = 64;

/// Name of the underlying primitive.
pub const PRIMITIVE: &str = "sha512";
