//! Capability traits at the seams between the core algorithms and their
//! collaborators

use core::cmp::Ordering;

/// Native-speed byte-range comparison, equivalent to C's `memcmp`
///
/// Implementations receive two slices of equal length and return a value
/// that is negative, zero or positive.
pub trait MemCompare {
    /// Compare `a` and `b` byte-wise; both have the same length
    fn mem_compare(&self, a: &[u8], b: &[u8]) -> i32;
}

/// Default [`MemCompare`] backed by slice ordering
///
/// Slice comparison of `u8` lowers to the platform `memcmp`, so this is the
/// single place the fast path crosses into native code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeMemCompare;

impl MemCompare for NativeMemCompare {
    #[inline]
    fn mem_compare(&self, a: &[u8], b: &[u8]) -> i32 {
        match a.cmp(b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl<M: MemCompare + ?Sized> MemCompare for &M {
    #[inline]
    fn mem_compare(&self, a: &[u8], b: &[u8]) -> i32 {
        (**self).mem_compare(a, b)
    }
}

/// Incremental hash state fed one byte at a time
pub trait StreamingHash {
    /// Feed one byte
    fn add(&mut self, byte: u8);

    /// Feed a run of bytes
    fn add_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.add(byte);
        }
    }

    /// Produce the hash code of everything fed so far without disturbing
    /// the state
    fn finalize(&self) -> i32;
}

/// A hash algorithm usable by the buffer comparers
pub trait HashAlgorithm {
    /// Streaming state for sources that are not contiguous
    type State: StreamingHash;

    /// One-shot hash of a contiguous buffer
    fn hash_bytes(&self, bytes: &[u8]) -> i32;

    /// Start a streaming computation that finalizes to the same value as
    /// [`HashAlgorithm::hash_bytes`] over the same content
    fn begin(&self) -> Self::State;

    /// Hash code reported for an absent buffer, never equal to the hash of
    /// an empty one
    fn absent(&self) -> i32 {
        crate::hash::ABSENT_HASH
    }
}

/// Rent/return scratch-buffer capability
pub trait ScratchPool {
    /// Owned buffer type handed out by the pool
    type Buffer: AsRef<[u8]> + AsMut<[u8]>;

    /// Rent a buffer holding at least `min_size` bytes
    fn rent(&self, min_size: usize) -> crate::Result<Self::Buffer>;

    /// Give a previously rented buffer back to the pool
    fn give_back(&self, buffer: Self::Buffer);
}
