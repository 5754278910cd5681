//! Hashing of `Read` sources
//!
//! Input is pulled through a rented scratch buffer and fed to an
//! algorithm's streaming state, so arbitrarily large sources hash in
//! constant memory with the same result as hashing the bytes in one go.

use std::io::{ErrorKind, Read};

use bitkit_core::{BlockHash, Fnv1a, HashAlgorithm, HashSeed, ScratchPool, StreamingHash};

use crate::pool::BufferPool;
use crate::Result;

/// Scratch size requested per read
pub const READ_CHUNK_SIZE: usize = 64 * 1024;

/// Hash everything `reader` yields with `algorithm`
///
/// The scratch buffer comes from `pool` and is given back whether reading
/// succeeds or fails.
pub fn hash_reader_with<H, R, P>(algorithm: &H, reader: &mut R, pool: &P) -> Result<i32>
where
    H: HashAlgorithm,
    R: Read + ?Sized,
    P: ScratchPool,
{
    let mut scratch = pool.rent(READ_CHUNK_SIZE)?;
    let outcome = feed(algorithm.begin(), reader, scratch.as_mut());
    pool.give_back(scratch);
    outcome
}

fn feed<S, R>(mut state: S, reader: &mut R, chunk: &mut [u8]) -> Result<i32>
where
    S: StreamingHash,
    R: Read + ?Sized,
{
    loop {
        match reader.read(chunk) {
            Ok(0) => return Ok(state.finalize()),
            Ok(n) => state.add_slice(&chunk[..n]),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
}

/// FNV-1a over a reader, using the shared pool
pub fn fnv_reader<R: Read + ?Sized>(reader: &mut R) -> Result<i32> {
    hash_reader_with(&Fnv1a, reader, BufferPool::shared())
}

/// Block hash over a reader, using the shared pool
pub fn block_reader<R: Read + ?Sized>(seed: HashSeed, reader: &mut R) -> Result<i32> {
    hash_reader_with(&BlockHash::new(seed), reader, BufferPool::shared())
}
