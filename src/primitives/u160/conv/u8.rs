//! Conversions between `U160` and byte representations
//!
//! All conversions preserve the big-endian layout of the digest and never
//! truncate or extend silently.

use crate::primitives::U160;

/// Converts a `U160` into a 20-byte array.
impl From<U160> for [u8; 20] {
    fn from(value: U160) -> Self {
        value.0
    }
}

/// Converts a 20-byte array into a `U160`.
impl From<[u8; 20]> for U160 {
    fn from(value: [u8; 20]) -> Self {
        U160(value)
    }
}

/// Attempts to build a `U160` from a byte slice.
///
/// The conversion succeeds only if the slice is exactly 20 bytes long.
impl TryFrom<&[u8]> for U160 {
    type Error = ();

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 20] = value.try_into().map_err(|_| ())?;

        Ok(U160(bytes))
    }
}
