//! Conversions between `U160` and 32-bit words
//!
//! SHA-1 keeps its running value as five 32-bit words. These conversions
//! map that state to and from the serialized digest, most significant
//! word first, each word written big-endian.

use crate::primitives::U160;

/// Converts a `U160` into five 32-bit words.
impl From<U160> for [u32; 5] {
    fn from(value: U160) -> Self {
        let mut out = [0u32; 5];

        for (o, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}

/// Converts five 32-bit words into a `U160`.
impl From<[u32; 5]> for U160 {
    fn from(value: [u32; 5]) -> Self {
        let mut out = [0u8; 20];

        for (chunk, v) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }

        U160(out)
    }
}
