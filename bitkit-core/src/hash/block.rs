//! Block hash: xxHash32 over 16-byte blocks
//!
//! Four lanes each consume one little-endian `u32` per block. Inputs shorter
//! than one block skip the lanes and start from `seed + PRIME5`. The lane
//! and tail mixing steps are shared with [`HashAccumulator`] so the
//! one-shot and streaming paths cannot drift apart.

use super::{HashAccumulator, HashSeed, ABSENT_HASH};
use crate::bits::rotate_left;
use crate::traits::HashAlgorithm;

pub(crate) const PRIME1: u32 = 0x9E37_79B1;
pub(crate) const PRIME2: u32 = 0x85EB_CA77;
pub(crate) const PRIME3: u32 = 0xC2B2_AE3D;
pub(crate) const PRIME4: u32 = 0x27D4_EB2F;
pub(crate) const PRIME5: u32 = 0x1656_67B1;

/// Bytes consumed per lane update
pub const BLOCK_SIZE: usize = 16;

#[inline(always)]
fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Initial lane values for `seed`
#[inline]
pub(crate) fn initial_lanes(seed: HashSeed) -> [u32; 4] {
    let seed = seed.value();
    [
        seed.wrapping_add(PRIME1).wrapping_add(PRIME2),
        seed.wrapping_add(PRIME2),
        seed,
        seed.wrapping_sub(PRIME1),
    ]
}

/// `lane = rotl(lane + word * PRIME2, 13) * PRIME1`
#[inline(always)]
pub(crate) fn round(lane: u32, word: u32) -> u32 {
    rotate_left(lane.wrapping_add(word.wrapping_mul(PRIME2)), 13).wrapping_mul(PRIME1)
}

/// Feed one full block into the lanes
#[inline]
pub(crate) fn consume_block(lanes: &mut [u32; 4], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_SIZE);
    lanes[0] = round(lanes[0], read_u32(&block[0..4]));
    lanes[1] = round(lanes[1], read_u32(&block[4..8]));
    lanes[2] = round(lanes[2], read_u32(&block[8..12]));
    lanes[3] = round(lanes[3], read_u32(&block[12..16]));
}

/// Weighted rotate-and-add of the four lanes
#[inline]
pub(crate) fn merge_lanes(lanes: &[u32; 4]) -> u32 {
    rotate_left(lanes[0], 1)
        .wrapping_add(rotate_left(lanes[1], 7))
        .wrapping_add(rotate_left(lanes[2], 12))
        .wrapping_add(rotate_left(lanes[3], 18))
}

/// Fold the final 0..=15 bytes and apply the avalanche
pub(crate) fn finish(mut hash: u32, tail: &[u8]) -> u32 {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut words = tail.chunks_exact(4);
    for word in &mut words {
        hash = rotate_left(hash.wrapping_add(read_u32(word).wrapping_mul(PRIME3)), 17)
            .wrapping_mul(PRIME4);
    }
    for &byte in words.remainder() {
        hash = rotate_left(hash.wrapping_add((byte as u32).wrapping_mul(PRIME5)), 11)
            .wrapping_mul(PRIME1);
    }

    avalanche(hash)
}

#[inline]
fn avalanche(mut hash: u32) -> u32 {
    hash ^= hash >> 15;
    hash = hash.wrapping_mul(PRIME2);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(PRIME3);
    hash ^= hash >> 16;
    hash
}

/// Raw block hash of `bytes` under `seed`
pub fn block_hash_u32(seed: HashSeed, bytes: &[u8]) -> u32 {
    let mut blocks = bytes.chunks_exact(BLOCK_SIZE);

    let mut hash = if bytes.len() >= BLOCK_SIZE {
        let mut lanes = initial_lanes(seed);
        for block in &mut blocks {
            consume_block(&mut lanes, block);
        }
        merge_lanes(&lanes)
    } else {
        seed.value().wrapping_add(PRIME5)
    };

    // Only the low 32 bits of the length participate
    hash = hash.wrapping_add(bytes.len() as u32);
    finish(hash, blocks.remainder())
}

/// Signed block hash of a fully materialized buffer
#[inline]
pub fn block_hash(seed: HashSeed, bytes: &[u8]) -> i32 {
    block_hash_u32(seed, bytes) as i32
}

/// The block hash as a comparer hash algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockHash {
    seed: HashSeed,
}

impl BlockHash {
    /// Block hash bound to `seed`
    pub const fn new(seed: HashSeed) -> Self {
        Self { seed }
    }

    /// Seed this hasher mixes in
    pub const fn seed(&self) -> HashSeed {
        self.seed
    }
}

impl HashAlgorithm for BlockHash {
    type State = HashAccumulator;

    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> i32 {
        block_hash(self.seed, bytes)
    }

    #[inline]
    fn begin(&self) -> HashAccumulator {
        HashAccumulator::new(self.seed)
    }

    /// [`ABSENT_HASH`], unless the empty buffer hashes to it under this
    /// seed, in which case its complement
    fn absent(&self) -> i32 {
        if block_hash(self.seed, &[]) == ABSENT_HASH {
            !ABSENT_HASH
        } else {
            ABSENT_HASH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors_seed_zero() {
        let seed = HashSeed::DEFAULT;
        assert_eq!(block_hash_u32(seed, b""), 0x02CC_5D05);
        assert_eq!(block_hash_u32(seed, b"a"), 0x550D_7456);
        assert_eq!(block_hash_u32(seed, b"abc"), 0x32D1_53FF);
        assert_eq!(
            block_hash_u32(seed, b"Nobody inspects the spammish repetition"),
            0xE229_3B2F
        );
    }

    #[test]
    fn test_block_boundaries() {
        let data: [u8; 100] = core::array::from_fn(|i| i as u8);
        assert_eq!(block_hash_u32(HashSeed::DEFAULT, &data[..16]), 0xB728_37F4);
        assert_eq!(block_hash_u32(HashSeed::DEFAULT, &data), 0x7F89_BA44);
    }

    #[test]
    fn test_seed_changes_result() {
        assert_eq!(block_hash_u32(HashSeed::new(0x1234_5678), b""), 0xBD20_9070);
        assert_ne!(
            block_hash(HashSeed::new(1), b"payload"),
            block_hash(HashSeed::new(2), b"payload")
        );
    }

    #[test]
    fn test_absent_never_matches_empty() {
        // seed + PRIME5 wraps to zero, and the avalanche keeps zero fixed
        let colliding = HashSeed::new(0u32.wrapping_sub(PRIME5));
        assert_eq!(block_hash(colliding, b""), ABSENT_HASH);
        assert_eq!(BlockHash::new(colliding).absent(), !ABSENT_HASH);

        for seed in [HashSeed::DEFAULT, HashSeed::new(0x1234_5678), colliding] {
            let algorithm = BlockHash::new(seed);
            assert_ne!(algorithm.absent(), algorithm.hash_bytes(b""));
        }
        assert_eq!(BlockHash::new(HashSeed::DEFAULT).absent(), ABSENT_HASH);
    }

    #[test]
    fn test_trailing_bytes_matter() {
        let a = block_hash(HashSeed::DEFAULT, b"0123456789abcdef+");
        let b = block_hash(HashSeed::DEFAULT, b"0123456789abcdef-");
        assert_ne!(a, b);
    }
}
