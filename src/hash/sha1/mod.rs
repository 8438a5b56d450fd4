//! SHA-1 hash function (FIPS 180-4).
//!
//! SHA-1 maps an arbitrary-length message to a 160-bit digest using a
//! Merkle–Damgård construction over 512-bit blocks:
//!
//! 1. The message is absorbed into a 64-byte block buffer.
//! 2. Every full block is run through the compression function, which
//!    expands it into an 80-word schedule and mixes it into five 32-bit
//!    accumulator words over 80 rounds.
//! 3. The final block is padded with `0x80`, zeros, and the 64-bit
//!    big-endian message length in bits.
//! 4. The five accumulator words are serialized big-endian.
//!
//! SHA-1 is no longer collision resistant. It is provided for HMAC-SHA1,
//! whose security does not rely on collision resistance, and for
//! interoperability with protocols that still mandate it.
//!
//! The module is split as follows:
//! - `core`: public entry points (`sha1`, `compress`)
//! - `computations`: round functions and the 80-round loop
//! - `state`: the buffering digest state shared with HMAC

pub mod core;
pub(crate) mod computations;
pub(crate) mod state;

pub(crate) use state::Sha1State;

/// Size of a SHA-1 message block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Size of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Initial hash value (FIPS 180-4, section 5.3.1).
pub(crate) const H160_INIT: [u32; 5] = [
    0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0,
];

/// Round constants, one per 20-round phase (FIPS 180-4, section 4.2.1).
pub(crate) const K160: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
