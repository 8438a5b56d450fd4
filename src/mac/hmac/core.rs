//! HMAC-SHA1 tag computation.

use super::key::{derive_pads, normalize_key};
use crate::hash::sha1::Sha1State;
use crate::primitives::U160;

/// A 160-bit HMAC-SHA1 authentication tag.
///
/// Bit-for-bit the same shape as a SHA-1 digest. The alias only marks that
/// the value was produced under a secret key.
pub type Tag = U160;

/// Computes the HMAC-SHA1 tag of `message` under `key`.
///
/// # Parameters
///
/// - `key`: Secret key of any length, including empty
/// - `message`: Message of any length, including empty
///
/// Both accept anything viewable as bytes (`&[u8]`, `Vec<u8>`, `&str`,
/// `String`, byte arrays).
///
/// # Algorithm
///
/// 1. Normalize the key to 64 bytes
/// 2. Derive `inner = key ⊕ 0x36…` and `outer = key ⊕ 0x5c…`
/// 3. `d = SHA1(inner ‖ message)`
/// 4. `tag = SHA1(outer ‖ d)`
///
/// The concatenations are fed to the digest state as consecutive updates,
/// so the message is never copied.
pub fn hmac_sha1<K, M>(key: K, message: M) -> Tag
where
    K: AsRef<[u8]>,
    M: AsRef<[u8]>,
{
    let key = normalize_key(key.as_ref());
    let (inner_pad, outer_pad) = derive_pads(&key);

    let mut inner = Sha1State::new();
    inner.update(inner_pad.as_bytes());
    inner.update(message.as_ref());
    let inner_digest = inner.finalize();

    let mut outer = Sha1State::new();
    outer.update(outer_pad.as_bytes());
    outer.update(inner_digest.as_ref());
    outer.finalize()
}
