//! HMAC key normalization and pad derivation.

use crate::hash::sha1::{BLOCK_LEN, DIGEST_LEN, core::sha1};

/// Byte repeated across the inner pad before it is mixed with the key.
pub const IPAD: u8 = 0x36;

/// Byte repeated across the outer pad before it is mixed with the key.
pub const OPAD: u8 = 0x5c;

/// A key normalized to exactly one SHA-1 block.
///
/// The buffer is overwritten with zeros when the value is dropped.
pub struct HmacKey([u8; BLOCK_LEN]);

impl HmacKey {
    /// Borrows the normalized key bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}

impl Drop for HmacKey {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|v| *v = 0);
    }
}

/// A 64-byte HMAC pad (`key ⊕ ipad` or `key ⊕ opad`).
///
/// The buffer is overwritten with zeros when the value is dropped.
pub struct Pad([u8; BLOCK_LEN]);

impl Pad {
    /// Borrows the pad bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }
}

impl Drop for Pad {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|v| *v = 0);
    }
}

/// Normalizes an arbitrary-length key to one 64-byte block.
///
/// # Behavior
///
/// - Keys longer than 64 bytes are replaced by their 20-byte SHA-1 digest.
/// - The result is then right-padded with zero bytes up to 64 bytes.
///
/// Keys of exactly 64 bytes are used as-is. The empty key is valid and
/// normalizes to 64 zero bytes.
pub fn normalize_key(key: &[u8]) -> HmacKey {
    let mut out = [0u8; BLOCK_LEN];

    if key.len() > BLOCK_LEN {
        let digest = sha1(key);
        out[..DIGEST_LEN].copy_from_slice(digest.as_bytes());
    } else {
        out[..key.len()].copy_from_slice(key);
    }

    HmacKey(out)
}

/// Derives the inner and outer pads from a normalized key.
///
/// # Returns
///
/// `(inner, outer)`, where every byte is `IPAD ^ key[i]` and `OPAD ^ key[i]`
/// respectively.
pub fn derive_pads(key: &HmacKey) -> (Pad, Pad) {
    let mut inner = [IPAD; BLOCK_LEN];
    let mut outer = [OPAD; BLOCK_LEN];

    for ((i, o), k) in inner.iter_mut().zip(outer.iter_mut()).zip(key.0.iter()) {
        *i ^= k;
        *o ^= k;
    }

    (Pad(inner), Pad(outer))
}
