//! HMAC-SHA1 (RFC 2104).
//!
//! HMAC turns SHA-1 into a keyed authenticator by hashing twice:
//!
//! ```text
//! HMAC(K, m) = H((K' ⊕ opad) ‖ H((K' ⊕ ipad) ‖ m))
//! ```
//!
//! where `K'` is the key normalized to one block (64 bytes): hashed down
//! when it is longer than a block, then zero-padded on the right.
//!
//! The implementation is split into two layers:
//!
//! - `key`: key normalization and pad derivation, as free functions over
//!   fixed-size buffers that wipe themselves on drop
//! - `core`: the two-pass composition producing the tag
//!
//! This module only *produces* tags. Comparing a received tag against a
//! computed one must be done in constant time by the caller.

pub mod core;
pub mod key;

pub use key::{HmacKey, IPAD, OPAD, Pad, derive_pads, normalize_key};
