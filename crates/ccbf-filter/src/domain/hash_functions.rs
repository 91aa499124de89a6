//! Hash functions for Bloom filter
//!
//! All k bit positions come from a single SHA-256 digest of the key. Two
//! 32-bit big-endian words are read from overlapping windows of the digest
//! and combined with double hashing: h(i) = h1 + i * h2.

use sha2::{Digest, Sha256};

/// Length of the SHA-256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Number of valid start offsets for a 4-byte read within the digest
pub const WINDOW_COUNT: usize = DIGEST_LEN - 4;

/// SHA-256 digest of the key's UTF-8 bytes
pub fn digest(item: &str) -> [u8; DIGEST_LEN] {
    Sha256::digest(item.as_bytes()).into()
}

/// Read the big-endian u32 starting at `offset` in the digest
fn read_window(digest: &[u8; DIGEST_LEN], offset: usize) -> u32 {
    let word = [
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ];
    u32::from_be_bytes(word)
}

/// Compute k hash positions for an item
///
/// For round `i`, h1 is read at offset `i mod 28` and h2 at `(i + 4) mod 28`.
/// The sum is taken in 64-bit arithmetic: `i < 2^16` and `h2 < 2^32`, so
/// `h1 + i * h2` never overflows and the result matches the on-disk format
/// for every filter the header can describe.
///
/// Positions are not necessarily distinct.
pub fn compute_hash_positions(item: &str, k: usize, m: usize) -> Vec<usize> {
    debug_assert!(m > 0, "bit count must be positive");
    let base = digest(item);
    let m = m as u64;

    (0..k)
        .map(|i| {
            let h1 = read_window(&base, i % WINDOW_COUNT) as u64;
            let h2 = read_window(&base, (i + 4) % WINDOW_COUNT) as u64;
            let hash = h1 + (i as u64) * h2;
            (hash % m) as usize
        })
        .collect()
}
