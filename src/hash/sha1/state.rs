//! Buffering SHA-1 digest state.
//!
//! `Sha1State` absorbs input of any length across any number of `update`
//! calls and emits the digest exactly once. It backs both the one-shot
//! `sha1` function and the two passes of HMAC-SHA1, which feed the pad and
//! the message as separate updates.

use super::core::compress;
use super::{BLOCK_LEN, H160_INIT};
use crate::primitives::U160;

/// Running SHA-1 computation.
///
/// A fresh instance must be created for every digest. `finalize` consumes
/// the state, so it cannot be reused once the digest has been produced.
pub(crate) struct Sha1State {
    /// Accumulator words (the running hash value).
    state: [u32; 5],

    /// Pending input that does not yet fill a whole block.
    buffer: [u8; BLOCK_LEN],

    /// Number of valid bytes in `buffer`. Always below `BLOCK_LEN` between
    /// calls.
    buffered: usize,

    /// Bits absorbed through completed blocks, modulo 2⁶⁴.
    bit_len: u64,
}

impl Sha1State {
    pub(crate) fn new() -> Self {
        Sha1State {
            state: H160_INIT,
            buffer: [0u8; BLOCK_LEN],
            buffered: 0,
            bit_len: 0,
        }
    }

    /// Absorbs `input` into the state.
    ///
    /// Bytes are appended to the pending buffer; each time it fills up it
    /// is compressed and cleared. Whole blocks that do not straddle the
    /// buffer are compressed straight from `input`.
    pub(crate) fn update(&mut self, mut input: &[u8]) {
        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(input.len());

            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&input[..take]);
            self.buffered += take;
            input = &input[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.bit_len = self.bit_len.wrapping_add(512);
            self.buffered = 0;
        }

        let (blocks, rest) = input.as_chunks::<BLOCK_LEN>();

        for block in blocks {
            compress(block, &mut self.state);
            self.bit_len = self.bit_len.wrapping_add(512);
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Applies the final padding and returns the digest.
    ///
    /// The pending bytes are followed by `0x80` and zeros. When fewer than
    /// eight bytes remain for the length field, the padded block is
    /// compressed on its own and the length goes into an extra zero block.
    ///
    /// Padding is written into the state's own buffer, so the message tail
    /// is cleared together with the rest of the state on drop.
    pub(crate) fn finalize(mut self) -> U160 {
        let bit_len = self.bit_len.wrapping_add((self.buffered as u64) << 3);

        self.buffer[self.buffered] = 0x80;
        self.buffer[self.buffered + 1..].fill(0);

        if self.buffered > 55 {
            compress(&self.buffer, &mut self.state);
            self.buffer = [0; BLOCK_LEN];
        }

        self.buffer[56..].copy_from_slice(&bit_len.to_be_bytes());

        compress(&self.buffer, &mut self.state);

        U160::from(self.state)
    }
}

impl Drop for Sha1State {
    fn drop(&mut self) {
        self.state.iter_mut().for_each(|v| *v = 0);
        self.buffer.iter_mut().for_each(|v| *v = 0);
        self.buffered = 0;
        self.bit_len = 0;
    }
}
