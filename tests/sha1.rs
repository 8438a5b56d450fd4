// The round function has two builds: the default loop and the unrolled
// `speed` variant. Run this suite under both, `cargo test` and
// `cargo test --features speed`, so each is checked against the vectors.

use hmacsha1::hash::{self, sha1::core::compress};
use sha1::{Digest, Sha1};

fn unhex(s: &str) -> [u8; 20] {
    let mut out = [0u8; 20];
    for (i, o) in out.iter_mut().enumerate() {
        *o = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

fn sha1_test(input: &[u8]) -> [u8; 20] {
    let got = hash::sha1(input);
    let bytes: &[u8] = got.as_ref();

    let mut arr = [0u8; 20];
    arr.copy_from_slice(bytes);

    arr
}

fn sha1_ref(input: &[u8]) -> [u8; 20] {
    Sha1::digest(input).into()
}

fn expect_sha1_eq(input: &[u8], expected: &str) {
    let got = sha1_test(input);
    let expected = unhex(expected);

    assert_eq!(
        got,
        expected,
        "Digest mismatch for input of {} bytes\nExpected {:02x?}\nGot      {:02x?}",
        input.len(),
        expected,
        got,
    );
}

fn expect_matches_reference(input: &[u8]) {
    assert_eq!(
        sha1_test(input),
        sha1_ref(input),
        "Digest differs from reference for input of {} bytes",
        input.len(),
    );
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha1_empty_vector() {
    expect_sha1_eq(&[], "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha1_abc_vector() {
    expect_sha1_eq(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_448_bit_vector() {
    expect_sha1_eq(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );
}

#[test]
fn sha1_896_bit_vector() {
    expect_sha1_eq(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "a49b2446a02c645bf419f995b67091253a04a259",
    );
}

#[test]
fn sha1_known_phrase() {
    expect_sha1_eq(
        b"The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    );
    expect_sha1_eq(
        b"The quick brown fox jumps over the lazy cog",
        "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
    );
}

#[test]
fn sha1_one_million_a() {
    let buf = vec![b'a'; 1_000_000];
    expect_sha1_eq(&buf, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

// -------------------------------------------------------
// 2. PADDING AND BLOCK BOUNDARIES
// -------------------------------------------------------

#[test]
fn sha1_block_boundaries() {
    let cases = [
        (0, "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (1, "9842926af7ca0a8cca12604f945414f07b01e13d"),
        (55, "ddf57317ef34bfee3b6df83d359098930eb278bc"),
        (56, "a0d492bb0fc889d0eca3bc137066ab6f4f74f369"),
        (63, "c55856749bef509bdfe6bfebfc7bf4e793e82132"),
        (64, "bede92be29c3874e1b54ddc77988d606fc857a8e"),
        (65, "b05a80522b053d6dc7e0a517d0e70212c7dad11f"),
        (119, "504e27376a6e0f0dba8295b85cb25dc4dfa17d23"),
        (120, "82134b02fb3f702491be9bed581eeab59334acb2"),
        (127, "34d5e582029e9b9b85b2febe31da3db7cdabaaea"),
        (128, "a09133e6730ffe899efb70204cb5646cd5dc24ee"),
        (1000, "4231a8a50a10fa9758db8ec71fdef855b751048a"),
    ];

    for (len, expected) in cases {
        expect_sha1_eq(&pattern(len), expected);
    }
}

#[test]
fn sha1_incremental_lengths_match_reference() {
    let mut buf = Vec::with_capacity(300);
    expect_matches_reference(&buf);

    for i in 0..300 {
        buf.push(i as u8);
        expect_matches_reference(&buf);
    }
}

#[test]
fn sha1_single_bytes() {
    for b in 0u8..=255 {
        expect_matches_reference(&[b]);
    }
}

#[test]
fn sha1_zeroes_and_ff_various_lengths() {
    for len in [1, 2, 4, 8, 16, 32, 55, 56, 64, 128, 255, 256] {
        expect_matches_reference(&vec![0u8; len]);
        expect_matches_reference(&vec![0xFFu8; len]);
    }
}

// -------------------------------------------------------
// 3. MULTI-BLOCK INPUTS
// -------------------------------------------------------

#[test]
fn sha1_large_multiblock() {
    let buf: Vec<u8> = (0..5000).map(|i| (i % 256) as u8).collect();
    expect_matches_reference(&buf);
}

#[test]
fn sha1_1mb_data() {
    let buf = vec![0xAAu8; 1_000_000];
    expect_matches_reference(&buf);
}

/// 2^29 bytes is 2^32 bits: the length field no longer fits in 32 bits.
#[test]
#[ignore = "hashes 512 MiB"]
fn sha1_length_field_above_32_bits() {
    let buf = vec![0x5Au8; 1 << 29];
    expect_matches_reference(&buf);
}

// -------------------------------------------------------
// 4. PROPERTIES
// -------------------------------------------------------

#[test]
fn sha1_is_deterministic() {
    let buf = pattern(777);
    assert_eq!(hash::sha1(&buf), hash::sha1(&buf));
}

#[test]
fn sha1_single_bit_flip_changes_digest() {
    let base = pattern(64);
    let base_digest = sha1_test(&base);

    for byte in 0..base.len() {
        for bit in 0..8 {
            let mut flipped = base.clone();
            flipped[byte] ^= 1 << bit;

            assert_ne!(
                sha1_test(&flipped),
                base_digest,
                "Flipping bit {} of byte {} left the digest unchanged",
                bit,
                byte,
            );
        }
    }
}

// -------------------------------------------------------
// 5. COMPRESSION FUNCTION
// -------------------------------------------------------

#[test]
fn sha1_compress_single_padded_block() {
    let mut block = [0u8; 64];
    block[..3].copy_from_slice(b"abc");
    block[3] = 0x80;
    block[63] = 24;

    let mut state = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];
    compress(&block, &mut state);

    assert_eq!(
        state,
        [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]
    );
}
