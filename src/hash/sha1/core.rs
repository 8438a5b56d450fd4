//! SHA-1 core hashing functions
//!
//! This module exposes the SHA-1 compression function and the one-shot
//! hashing entry point built on top of the crate-internal digest state.

use super::Sha1State;
use super::computations::all_rounds;
use crate::primitives::U160;

/// Compresses a single 512-bit message block.
///
/// The block is read as sixteen big-endian 32-bit words, expanded to the
/// 80-word schedule and mixed into `state` in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (5 × 32-bit words)
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 5]) {
    let mut w = [0u32; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    #[cfg(not(feature = "speed"))]
    all_rounds(state, w);

    #[cfg(feature = "speed")]
    all_rounds(state, &mut w);
}

/// Computes the SHA-1 digest of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message, possibly empty
///
/// # Returns
/// - The 160-bit digest, the five state words serialized big-endian
///
/// # Notes
/// - The message length is encoded as a 64-bit big-endian bit count.
/// - No heap allocations are performed.
pub fn sha1(input: &[u8]) -> U160 {
    let mut state = Sha1State::new();
    state.update(input);
    state.finalize()
}
