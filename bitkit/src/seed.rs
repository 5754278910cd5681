//! Process-wide block-hash seed
//!
//! The seed is fixed the first time anything asks for it. A program that
//! wants a specific value calls [`init_process_seed`] before any hashing;
//! otherwise [`HashSeed::DEFAULT`] is used.

use std::sync::OnceLock;

use bitkit_core::{BitkitError, BufferComparer, Fidelity, HashAccumulator, HashSeed};

static PROCESS_SEED: OnceLock<HashSeed> = OnceLock::new();

/// Establish the process-wide seed
///
/// Succeeds if the seed was unset or already equal to `seed`.
pub fn init_process_seed(seed: HashSeed) -> Result<(), BitkitError> {
    let current = *PROCESS_SEED.get_or_init(|| seed);
    if current == seed {
        Ok(())
    } else {
        Err(BitkitError::SeedAlreadyInitialized)
    }
}

/// The process-wide seed, fixing it to the default if still unset
pub fn process_seed() -> HashSeed {
    *PROCESS_SEED.get_or_init(|| HashSeed::DEFAULT)
}

/// Accumulator bound to the process-wide seed
pub fn accumulator() -> HashAccumulator {
    HashAccumulator::new(process_seed())
}

/// One-shot block hash under the process-wide seed
pub fn block_hash(bytes: &[u8]) -> i32 {
    bitkit_core::hash::block_hash(process_seed(), bytes)
}

/// Block-hash comparer bound to the process-wide seed
pub fn block_comparer(fidelity: Fidelity) -> BufferComparer {
    BufferComparer::block(fidelity, process_seed())
}
