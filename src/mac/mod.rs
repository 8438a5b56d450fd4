//! Message authentication codes exposed by the crate.
//!
//! Currently includes HMAC-SHA1 (RFC 2104) on top of the crate's own SHA-1.

pub mod hmac;

/// Re-export of the HMAC-SHA1 convenience function and its output type.
pub use self::hmac::core::{Tag, hmac_sha1};
