//! Primitive types
//!
//! This module defines the low-level value types shared by the hash and
//! MAC modules.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks with
//! well-defined semantics. They are intentionally minimal.
//!
//! Current primitives include:
//! - `U160`: a fixed-size 160-bit value (SHA-1 digests, HMAC-SHA1 tags)

mod u160;

pub use u160::U160;
