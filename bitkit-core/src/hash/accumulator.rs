//! Streaming form of the block hash

use super::block::{self, BLOCK_SIZE, PRIME5};
use super::HashSeed;
use crate::traits::StreamingHash;

/// Incremental block-hash state
///
/// Bytes are queued until a full 16-byte block is available, then folded
/// into the four lanes. [`HashAccumulator::finalize`] reproduces exactly
/// what [`block::block_hash`] returns for the same bytes, and it may be
/// called any number of times.
///
/// The accumulator is a write-then-read sink, not a hash code. It is
/// neither `Clone` nor comparable; compare the `i32` from `finalize`.
///
/// ```compile_fail
/// use bitkit_core::hash::{HashAccumulator, HashSeed};
///
/// let a = HashAccumulator::new(HashSeed::DEFAULT);
/// let b = HashAccumulator::new(HashSeed::DEFAULT);
/// let _ = a == b;
/// ```
///
/// ```compile_fail
/// use bitkit_core::hash::{HashAccumulator, HashSeed};
///
/// let a = HashAccumulator::new(HashSeed::DEFAULT);
/// let _copy = a.clone();
/// ```
#[derive(Debug)]
pub struct HashAccumulator {
    queue: [u8; BLOCK_SIZE],
    queued: usize,
    lanes: [u32; 4],
    total_len: u64,
    seed: HashSeed,
}

impl HashAccumulator {
    /// Empty accumulator mixing in `seed`
    pub fn new(seed: HashSeed) -> Self {
        Self {
            queue: [0; BLOCK_SIZE],
            queued: 0,
            lanes: block::initial_lanes(seed),
            total_len: 0,
            seed,
        }
    }

    /// Number of bytes fed so far
    pub fn len(&self) -> u64 {
        self.total_len
    }

    /// Whether nothing has been fed yet
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Feed one byte
    #[inline]
    pub fn add(&mut self, byte: u8) {
        self.queue[self.queued] = byte;
        self.queued += 1;
        self.total_len += 1;

        if self.queued == BLOCK_SIZE {
            block::consume_block(&mut self.lanes, &self.queue);
            self.queued = 0;
        }
    }

    /// Feed a run of bytes, consuming whole blocks straight from `bytes`
    pub fn add_slice(&mut self, mut bytes: &[u8]) {
        self.total_len += bytes.len() as u64;

        if self.queued > 0 {
            let take = (BLOCK_SIZE - self.queued).min(bytes.len());
            self.queue[self.queued..self.queued + take].copy_from_slice(&bytes[..take]);
            self.queued += take;
            bytes = &bytes[take..];

            if self.queued < BLOCK_SIZE {
                return;
            }
            block::consume_block(&mut self.lanes, &self.queue);
            self.queued = 0;
        }

        let mut blocks = bytes.chunks_exact(BLOCK_SIZE);
        for chunk in &mut blocks {
            block::consume_block(&mut self.lanes, chunk);
        }

        let rest = blocks.remainder();
        self.queue[..rest.len()].copy_from_slice(rest);
        self.queued = rest.len();
    }

    /// Hash code of everything fed so far
    pub fn finalize(&self) -> i32 {
        let mut hash = if self.total_len >= BLOCK_SIZE as u64 {
            block::merge_lanes(&self.lanes)
        } else {
            self.seed.value().wrapping_add(PRIME5)
        };

        hash = hash.wrapping_add(self.total_len as u32);
        block::finish(hash, &self.queue[..self.queued]) as i32
    }
}

impl StreamingHash for HashAccumulator {
    #[inline]
    fn add(&mut self, byte: u8) {
        HashAccumulator::add(self, byte);
    }

    #[inline]
    fn add_slice(&mut self, bytes: &[u8]) {
        HashAccumulator::add_slice(self, bytes);
    }

    #[inline]
    fn finalize(&self) -> i32 {
        HashAccumulator::finalize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::block_hash;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::vec::Vec;

    fn accumulate(seed: HashSeed, bytes: &[u8]) -> i32 {
        let mut acc = HashAccumulator::new(seed);
        for &b in bytes {
            acc.add(b);
        }
        acc.finalize()
    }

    #[test]
    fn test_byte_at_a_time_matches_one_shot() {
        let mut rng = StdRng::seed_from_u64(0xB10C);
        let lengths = [0usize, 1, 15, 16, 17, 64, 1000];
        for round in 0..210 {
            let len = lengths[round % lengths.len()];
            let seed = HashSeed::new(rng.gen());
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            assert_eq!(
                block_hash(seed, &data),
                accumulate(seed, &data),
                "length {len}"
            );
        }
    }

    #[test]
    fn test_chunked_feeding_matches_one_shot() {
        let mut rng = StdRng::seed_from_u64(0xC4);
        for _ in 0..100 {
            let len = rng.gen_range(0..300);
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

            let mut acc = HashAccumulator::new(HashSeed::DEFAULT);
            let mut rest = &data[..];
            while !rest.is_empty() {
                let take = rng.gen_range(1..=rest.len().min(40));
                if take == 1 {
                    acc.add(rest[0]);
                } else {
                    acc.add_slice(&rest[..take]);
                }
                rest = &rest[take..];
            }

            assert_eq!(acc.len(), len as u64);
            assert_eq!(acc.finalize(), block_hash(HashSeed::DEFAULT, &data));
        }
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut acc = HashAccumulator::new(HashSeed::DEFAULT);
        acc.add_slice(b"0123456789abcdefXYZ");
        let first = acc.finalize();
        assert_eq!(acc.finalize(), first);

        // Feeding more after a finalize continues the same stream
        acc.add(b'!');
        assert_eq!(
            acc.finalize(),
            block_hash(HashSeed::DEFAULT, b"0123456789abcdefXYZ!")
        );
    }

    #[test]
    fn test_empty_accumulator() {
        let acc = HashAccumulator::new(HashSeed::DEFAULT);
        assert!(acc.is_empty());
        assert_eq!(acc.finalize(), 0x02CC_5D05);
    }
}
