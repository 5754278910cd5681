#![no_std]

//! Bitkit Core - low-level binary-data primitives
//!
//! This crate provides the allocation-free building blocks of the toolkit:
//! fixed-width bit operations, two non-cryptographic hashes, buffer
//! comparers with tunable hash fidelity, and an in-place introsort.
//!
//! ```rust
//! use bitkit_core::{BufferComparer, Fidelity};
//! use core::cmp::Ordering;
//!
//! let comparer = BufferComparer::fnv(Fidelity::new(4));
//! assert_eq!(comparer.compare(&[1u8, 2, 3], &[1u8, 2, 3, 0]), Ordering::Less);
//!
//! let mut values = [5, 3, 3, 1, 4];
//! bitkit_core::sort_by(&mut values, |a, b| a.cmp(b));
//! assert_eq!(values, [1, 3, 3, 4, 5]);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod bits;
pub mod comparer;
pub mod error;
pub mod hash;
pub mod sort;
pub mod traits;
pub mod validation;

pub use comparer::{
    BufferComparer, ByteSource, ComparerConfig, Fidelity, HashKind, PodView, Segment, Sequence,
    TypedComparer,
};
pub use error::*;
pub use hash::{BlockHash, Fnv1a, Fnv1aHasher, FnvBuildHasher, HashAccumulator, HashSeed};
pub use sort::{sort, sort_by, try_sort_by};
pub use traits::*;
