//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-1 with a pure-Rust implementation.

pub mod sha1;

/// Re-export of the SHA-1 convenience function.
pub use self::sha1::core::sha1;
