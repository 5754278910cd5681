//! Non-cryptographic hashes over byte sequences
//!
//! Two algorithms, both deterministic and both reporting signed 32-bit
//! codes: FNV-1a ([`fnv`]) and an xxHash32-style block hash ([`block`])
//! with a streaming [`HashAccumulator`]. Neither can fail; an absent buffer
//! hashes to [`ABSENT_HASH`], or to its complement for the one block-hash
//! seed whose empty-buffer hash is [`ABSENT_HASH`].

pub mod accumulator;
pub mod block;
pub mod fnv;
pub mod seed;

pub use accumulator::HashAccumulator;
pub use block::{block_hash, block_hash_u32, BlockHash};
pub use fnv::{
    combine2, combine3, combine4, combine5, fnv1a, fnv1a_ints, fnv1a_u32, hash_ints, Fnv1a,
    Fnv1aHasher, FnvBuildHasher,
};
pub use seed::HashSeed;

/// Hash code of an absent buffer
///
/// Always differs from the empty-buffer hash. See [`BlockHash`] for the one
/// seed where the block hash reports `!ABSENT_HASH` instead.
pub const ABSENT_HASH: i32 = 0;
