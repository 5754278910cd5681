//! Bitkit - binary-data toolkit
//!
//! Bit manipulation, fast non-cryptographic hashing, buffer comparers with
//! tunable hash fidelity and an in-place introsort, plus the pieces that
//! need an operating system around them.
//!
//! ## Architecture
//!
//! - **bitkit-core**: `no_std` algorithms, traits and validation (no I/O)
//! - **bitkit**: process-wide seed, scratch-buffer pool, interning,
//!   parallel batches, and hashing of readers and mapped files
//!
//! ## Quick Start
//!
//! ```rust
//! use bitkit::{BufferComparer, BufferInterner, Fidelity};
//! use std::cmp::Ordering;
//!
//! let comparer = BufferComparer::fnv(Fidelity::new(8));
//! assert_eq!(comparer.compare(&b"abc"[..], &b"abcd".to_vec()), Ordering::Less);
//!
//! let mut interner = BufferInterner::with_comparer(comparer);
//! let id = interner.intern(&b"payload"[..]);
//! assert_eq!(interner.lookup(&b"payload".to_vec()), id);
//! ```
//!
//! ## Features
//!
//! - **serde** (default): serializable configuration types
//! - **mmap** (default): memory-mapped files as byte sources

pub use bitkit_core::{
    // Core modules
    bits, comparer, hash, sort, traits, validation,
    // Comparers and byte sources
    BufferComparer, ByteSource, ComparerConfig, Fidelity, HashKind, PodView, Segment, Sequence,
    TypedComparer,
    // Hashing
    BlockHash, Fnv1a, Fnv1aHasher, FnvBuildHasher, HashAccumulator, HashSeed,
    // Capability seams
    HashAlgorithm, MemCompare, NativeMemCompare, ScratchPool, StreamingHash,
    // Sorting
    sort_by, try_sort_by,
    // Error handling
    BitkitError, ErrorCategory,
};

pub mod batch;
pub mod error;
pub mod interner;
#[cfg(feature = "mmap")]
pub mod mapped;
pub mod pool;
pub mod seed;
pub mod stream;

pub use error::{Error, Result};
pub use interner::BufferInterner;
#[cfg(feature = "mmap")]
pub use mapped::MappedBuffer;
pub use pool::{BufferPool, PoolConfig, RentedBuffer};
pub use seed::{init_process_seed, process_seed};
