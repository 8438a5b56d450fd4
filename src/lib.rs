//! Keyed SHA-1 message authentication
//!
//! This crate provides a self-contained SHA-1 implementation and the
//! HMAC-SHA1 construction built on top of it, for protocols that still
//! authenticate requests with HMAC-SHA1 tags.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! component is dependency-free, allocation-free and explicit in its
//! semantics.
//!
//! # Module overview
//!
//! - `hash`  
//!   The SHA-1 hash function (FIPS 180-4): compression function, buffering
//!   digest state and the one-shot `sha1` entry point.
//!
//! - `mac`  
//!   HMAC-SHA1 (RFC 2104): key normalization, pad derivation and the
//!   two-pass tag computation.
//!
//! - `primitives`  
//!   The fixed-size `U160` value that carries digests and tags.
//!
//! # Scope
//!
//! The crate computes tags; it does not verify them. Obtaining keys,
//! assembling messages, encoding tags for transport and comparing tags in
//! constant time are left to the caller.
//!
//! # Example
//!
//! ```
//! use hmacsha1::mac::hmac_sha1;
//!
//! let tag = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(format!("{:x}", tag), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
//! ```

pub mod hash;
pub mod mac;
pub mod primitives;
