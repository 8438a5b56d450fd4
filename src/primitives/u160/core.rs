//! Core definition of the `U160` digest value.

use std::fmt::{Display, Formatter, LowerHex, Result};

/// Fixed-size 160-bit value.
///
/// The value is stored as 20 bytes in **big-endian** order, exactly as a
/// SHA-1 digest is emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U160(pub(crate) [u8; 20]);

impl U160 {
    /// The all-zero value.
    pub const ZERO: Self = Self([0u8; 20]);

    /// The all-ones value (2¹⁶⁰ − 1).
    pub const MAX: Self = Self([255u8; 20]);

    /// Length of the value in bytes.
    pub const LEN: usize = 20;

    /// Returns the value as a byte array, most significant byte first.
    pub const fn to_bytes(self) -> [u8; 20] {
        self.0
    }

    /// Borrows the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl AsRef<[u8]> for U160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for U160 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Each byte is printed as two uppercase hexadecimal characters,
    /// separated by `:` for readability.
    ///
    /// Example:
    /// `DA:39:A3:...`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl LowerHex for U160 {
    /// Formats the value as contiguous lowercase hexadecimal, the form used
    /// by published SHA-1 and HMAC test vectors.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
