//! FNV-1a (32-bit) over bytes, integer arrays and small integer tuples
//!
//! Every overload funnels into the same byte-wise `xor` then `multiply`
//! loop. Integers are fed as their little-endian bytes so the result does
//! not depend on the host.

use core::hash::{BuildHasherDefault, Hasher};

use super::ABSENT_HASH;
use crate::traits::{HashAlgorithm, StreamingHash};

/// FNV-1a 32-bit offset basis
pub const OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
pub const PRIME: u32 = 0x0100_0193;

/// Hash of the empty buffer, as a signed code
pub const EMPTY_HASH: i32 = OFFSET_BASIS as i32;

#[inline(always)]
const fn step(hash: u32, byte: u8) -> u32 {
    (hash ^ byte as u32).wrapping_mul(PRIME)
}

/// Continue an FNV-1a computation from `state`
#[inline]
pub const fn fnv1a_continue(mut state: u32, bytes: &[u8]) -> u32 {
    let mut i = 0;
    while i < bytes.len() {
        state = step(state, bytes[i]);
        i += 1;
    }
    state
}

/// Raw FNV-1a 32-bit hash; usable in const contexts
#[inline]
pub const fn fnv1a_u32(bytes: &[u8]) -> u32 {
    fnv1a_continue(OFFSET_BASIS, bytes)
}

/// Signed FNV-1a hash of a byte buffer
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> i32 {
    fnv1a_u32(bytes) as i32
}

/// Signed FNV-1a hash of a possibly absent byte buffer
///
/// `None` maps to [`ABSENT_HASH`], which differs from the empty-buffer
/// hash [`EMPTY_HASH`].
#[inline]
pub fn fnv1a(bytes: Option<&[u8]>) -> i32 {
    match bytes {
        Some(bytes) => hash_bytes(bytes),
        None => ABSENT_HASH,
    }
}

/// FNV-1a over a run of 32-bit integers, four little-endian bytes each
pub fn hash_ints(values: &[i32]) -> i32 {
    #[cfg(target_endian = "little")]
    {
        hash_bytes(bytemuck::cast_slice(values))
    }
    #[cfg(not(target_endian = "little"))]
    {
        let state = values
            .iter()
            .fold(OFFSET_BASIS, |state, v| fnv1a_continue(state, &v.to_le_bytes()));
        state as i32
    }
}

/// FNV-1a over a possibly absent integer array
#[inline]
pub fn fnv1a_ints(values: Option<&[i32]>) -> i32 {
    values.map_or(ABSENT_HASH, hash_ints)
}

/// Composite-key hash of two integers
#[inline]
pub fn combine2(a: i32, b: i32) -> i32 {
    hash_ints(&[a, b])
}

/// Composite-key hash of three integers
#[inline]
pub fn combine3(a: i32, b: i32, c: i32) -> i32 {
    hash_ints(&[a, b, c])
}

/// Composite-key hash of four integers
#[inline]
pub fn combine4(a: i32, b: i32, c: i32, d: i32) -> i32 {
    hash_ints(&[a, b, c, d])
}

/// Composite-key hash of five integers
#[inline]
pub fn combine5(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    hash_ints(&[a, b, c, d, e])
}

/// Streaming FNV-1a state
///
/// Also a [`Hasher`], so it can back `HashMap`s through [`FnvBuildHasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHasher {
    state: u32,
}

impl Fnv1aHasher {
    /// Start from the offset basis
    pub const fn new() -> Self {
        Self {
            state: OFFSET_BASIS,
        }
    }

    /// Current raw state
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = fnv1a_continue(self.state, bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state as u64
    }
}

impl StreamingHash for Fnv1aHasher {
    #[inline]
    fn add(&mut self, byte: u8) {
        self.state = step(self.state, byte);
    }

    #[inline]
    fn add_slice(&mut self, bytes: &[u8]) {
        self.state = fnv1a_continue(self.state, bytes);
    }

    #[inline]
    fn finalize(&self) -> i32 {
        self.state as i32
    }
}

/// `BuildHasher` producing [`Fnv1aHasher`]s
pub type FnvBuildHasher = BuildHasherDefault<Fnv1aHasher>;

/// FNV-1a as a comparer hash algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a;

impl HashAlgorithm for Fnv1a {
    type State = Fnv1aHasher;

    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> i32 {
        hash_bytes(bytes)
    }

    #[inline]
    fn begin(&self) -> Fnv1aHasher {
        Fnv1aHasher::new()
    }
}
