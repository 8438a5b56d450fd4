//! Conversion utilities
//!
//! Explicit conversions between `U160` and its byte and word forms.
//!
//! - `u8`: byte arrays and byte slices
//! - `u32`: the five big-endian state words produced by SHA-1

mod u32;
mod u8;
