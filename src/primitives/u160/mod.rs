//! 160-bit digest primitive
//!
//! This module defines the `U160` type, a fixed-size 160-bit value used to
//! carry SHA-1 digests and HMAC-SHA1 tags.
//!
//! Like the other fixed-size primitives of the crate, `U160` is a plain value
//! type rather than an arithmetic integer. It only offers what hash outputs
//! need: construction from bytes or words, byte access and formatting.
//!
//! The internal representation is big-endian, which matches the order in
//! which SHA-1 serializes its state words.

mod conv;
mod core;

/// Fixed-size 160-bit value.
///
/// This type is re-exported as the digest primitive of the crate.
pub use self::core::U160;
