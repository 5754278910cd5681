//! Ordering, equality and hash codes over byte buffers
//!
//! One comparer serves every [`ByteSource`] representation. Ordering is by
//! length first (shorter sorts first), then byte-wise. Absent buffers sort
//! before everything else, including the empty buffer.

use core::cmp::Ordering;

use super::fidelity::Fidelity;
use super::source::ByteSource;
use super::typed::TypedComparer;
use crate::hash::{BlockHash, Fnv1a, HashSeed};
use crate::sort;
use crate::traits::{HashAlgorithm, MemCompare, NativeMemCompare, StreamingHash};

/// Hash algorithm behind a comparer's hash codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashKind {
    /// FNV-1a
    #[default]
    Fnv1a,
    /// xxHash32-style block hash with the given seed
    Block(HashSeed),
}

/// Comparer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparerConfig {
    /// Hashed prefix limit
    pub fidelity: Fidelity,
    /// Hash algorithm
    pub hash: HashKind,
}

impl ComparerConfig {
    /// Set the hash fidelity
    pub fn with_fidelity(mut self, fidelity: impl Into<Fidelity>) -> Self {
        self.fidelity = fidelity.into();
        self
    }

    /// Set the hash algorithm
    pub fn with_hash(mut self, hash: HashKind) -> Self {
        self.hash = hash;
        self
    }

    /// Build a comparer using the native memory compare
    pub fn build(self) -> BufferComparer {
        BufferComparer {
            fidelity: self.fidelity,
            hash: self.hash,
            mem: NativeMemCompare,
        }
    }
}

/// Total ordering, equality and hashing for byte buffers
///
/// Configuration is fixed at construction. The comparer holds no mutable
/// state, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferComparer<M = NativeMemCompare> {
    fidelity: Fidelity,
    hash: HashKind,
    mem: M,
}

impl BufferComparer {
    /// FNV-1a comparer hashing whole buffers
    pub const DEFAULT: BufferComparer = BufferComparer::fnv(Fidelity::UNLIMITED);

    /// FNV-1a comparer
    pub const fn fnv(fidelity: Fidelity) -> Self {
        Self {
            fidelity,
            hash: HashKind::Fnv1a,
            mem: NativeMemCompare,
        }
    }

    /// Block-hash comparer
    pub const fn block(fidelity: Fidelity, seed: HashSeed) -> Self {
        Self {
            fidelity,
            hash: HashKind::Block(seed),
            mem: NativeMemCompare,
        }
    }
}

impl<M: MemCompare> BufferComparer<M> {
    /// Swap in a different memory-compare capability
    pub fn with_mem_compare<N: MemCompare>(self, mem: N) -> BufferComparer<N> {
        BufferComparer {
            fidelity: self.fidelity,
            hash: self.hash,
            mem,
        }
    }

    /// Configured fidelity
    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// Configured hash algorithm
    pub fn hash_kind(&self) -> HashKind {
        self.hash
    }

    /// Configuration this comparer was built from
    pub fn config(&self) -> ComparerConfig {
        ComparerConfig {
            fidelity: self.fidelity,
            hash: self.hash,
        }
    }

    /// Total order over buffers of any two representations
    pub fn compare<A, B>(&self, x: &A, y: &B) -> Ordering
    where
        A: ByteSource + ?Sized,
        B: ByteSource + ?Sized,
    {
        match (x.is_absent(), y.is_absent()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }

        if let (Some(a), Some(b)) = (x.as_contiguous(), y.as_contiguous()) {
            return self.compare_slices(a, b);
        }

        let same_length = match (x.byte_len(), y.byte_len()) {
            (Some(la), Some(lb)) if la != lb => return la.cmp(&lb),
            (Some(_), Some(_)) => true,
            _ => false,
        };

        compare_sequential(x.bytes(), y.bytes(), same_length)
    }

    /// `compare(x, y) == Equal`
    #[inline]
    pub fn equals<A, B>(&self, x: &A, y: &B) -> bool
    where
        A: ByteSource + ?Sized,
        B: ByteSource + ?Sized,
    {
        self.compare(x, y) == Ordering::Equal
    }

    /// Hash code over the fidelity window of `x`
    pub fn hash<A: ByteSource + ?Sized>(&self, x: &A) -> i32 {
        match self.hash {
            HashKind::Fnv1a => hash_windowed(&Fnv1a, self.fidelity, x),
            HashKind::Block(seed) => hash_windowed(&BlockHash::new(seed), self.fidelity, x),
        }
    }

    /// Sort buffers in place by this comparer's order
    pub fn sort_buffers<S: ByteSource>(&self, buffers: &mut [S]) {
        sort::sort_by(buffers, |a, b| self.compare(a, b));
    }

    /// View this comparer as one specialized to representation `R`
    pub fn typed<R: ByteSource + 'static>(&self) -> TypedComparer<'_, R, M> {
        TypedComparer::new(self)
    }

    fn compare_slices(&self, a: &[u8], b: &[u8]) -> Ordering {
        // Same pointer and length: same buffer
        if core::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        if a.len() != b.len() {
            return a.len().cmp(&b.len());
        }
        match a.len() {
            0 => Ordering::Equal,
            1 => a[0].cmp(&b[0]),
            _ => self.mem.mem_compare(a, b).cmp(&0),
        }
    }
}

/// Element-by-element comparison for representations without a shared
/// contiguous view
///
/// With equal lengths known up front the first differing byte decides.
/// Otherwise the scan continues past the first difference so that the
/// longer sequence still wins, keeping the length-first order.
fn compare_sequential<I, J>(mut a: I, mut b: J, same_length: bool) -> Ordering
where
    I: Iterator<Item = u8>,
    J: Iterator<Item = u8>,
{
    let mut first_difference = Ordering::Equal;
    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => {
                if first_difference == Ordering::Equal {
                    first_difference = x.cmp(&y);
                    if same_length && first_difference != Ordering::Equal {
                        return first_difference;
                    }
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return first_difference,
        }
    }
}

fn hash_windowed<H, A>(algorithm: &H, fidelity: Fidelity, x: &A) -> i32
where
    H: HashAlgorithm,
    A: ByteSource + ?Sized,
{
    if x.is_absent() {
        return algorithm.absent();
    }

    if let Some(bytes) = x.as_contiguous() {
        return algorithm.hash_bytes(fidelity.window(bytes));
    }

    let mut state = algorithm.begin();
    match fidelity.limit() {
        Some(limit) => x.bytes().take(limit).for_each(|b| state.add(b)),
        None => x.bytes().for_each(|b| state.add(b)),
    }
    state.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{Segment, Sequence};
    use crate::hash::{block_hash, fnv, ABSENT_HASH};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::vec::Vec;

    /// Counts calls so the trivial-length shortcut can be observed
    #[derive(Default)]
    struct CountingCompare {
        calls: core::cell::Cell<usize>,
    }

    impl MemCompare for CountingCompare {
        fn mem_compare(&self, a: &[u8], b: &[u8]) -> i32 {
            self.calls.set(self.calls.get() + 1);
            NativeMemCompare.mem_compare(a, b)
        }
    }

    #[test]
    fn test_length_first_order() {
        let c = BufferComparer::DEFAULT;
        assert_eq!(c.compare(&[1u8, 2, 3], &[1u8, 2, 3, 0]), Ordering::Less);
        assert_eq!(c.compare(&[9u8], &[0u8, 0]), Ordering::Less);
        assert_eq!(c.compare(&[1u8, 2, 4], &[1u8, 2, 3]), Ordering::Greater);
        assert_eq!(c.compare(&[7u8; 5], &[7u8; 5]), Ordering::Equal);
    }

    #[test]
    fn test_absent_and_empty() {
        let c = BufferComparer::DEFAULT;
        let absent: Option<&[u8]> = None;
        let empty: Option<&[u8]> = Some(&[]);
        let one: Option<&[u8]> = Some(&[0]);

        assert_eq!(c.compare(&absent, &absent), Ordering::Equal);
        assert_eq!(c.compare(&absent, &empty), Ordering::Less);
        assert_eq!(c.compare(&empty, &absent), Ordering::Greater);
        assert_eq!(c.compare(&empty, &one), Ordering::Less);
        assert_eq!(c.compare(&absent, &[0u8; 0]), Ordering::Less);
        assert_eq!(c.compare(&empty, &[0u8; 0]), Ordering::Equal);

        assert_eq!(c.hash(&absent), ABSENT_HASH);
        assert_eq!(c.hash(&empty), fnv::EMPTY_HASH);

        let block = BufferComparer::block(Fidelity::UNLIMITED, HashSeed::DEFAULT);
        assert_eq!(block.hash(&absent), ABSENT_HASH);
        assert_eq!(block.hash(&empty), block_hash(HashSeed::DEFAULT, b""));
        assert_ne!(block.hash(&absent), block.hash(&empty));
    }

    #[test]
    fn test_absent_differs_from_empty_for_every_seed() {
        // This seed makes the empty-buffer block hash exactly zero
        let seed = HashSeed::new(0u32.wrapping_sub(0x1656_67B1));
        let c = BufferComparer::block(Fidelity::UNLIMITED, seed);
        let absent: Option<&[u8]> = None;
        let empty: Option<&[u8]> = Some(&[]);

        assert_eq!(c.hash(&empty), 0);
        assert_ne!(c.hash(&absent), c.hash(&empty));
        assert_ne!(c.hash(&absent), c.hash(&Sequence::new(core::iter::empty::<u8>())));
        assert_eq!(c.hash(&Some(&b"x"[..])), block_hash(seed, b"x"));
    }

    #[test]
    fn test_trivial_lengths_skip_mem_compare() {
        let c = BufferComparer::DEFAULT.with_mem_compare(CountingCompare::default());
        assert_eq!(c.compare(&[5u8], &[6u8]), Ordering::Less);
        assert_eq!(c.compare(&[0u8; 0], &[0u8; 0]), Ordering::Equal);
        assert_eq!(c.mem.calls.get(), 0);

        assert_eq!(c.compare(&[5u8, 1], &[5u8, 2]), Ordering::Less);
        assert_eq!(c.mem.calls.get(), 1);

        // Identity short-circuit
        let data = [1u8, 2, 3];
        assert_eq!(c.compare(&data[..], &data[..]), Ordering::Equal);
        assert_eq!(c.mem.calls.get(), 1);
    }

    #[test]
    fn test_representations_agree() {
        let c = BufferComparer::fnv(Fidelity::new(3));
        let backing = [0u8, 4, 5, 6, 7, 0];
        let seg = Segment::new(&backing, 1, 4).expect("window fits");
        let array = [4u8, 5, 6, 7];
        let seq = Sequence::new(array.iter().copied());
        let exact = Sequence::exact(array.iter().copied());

        assert_eq!(c.compare(&seg, &array), Ordering::Equal);
        assert_eq!(c.compare(&seq, &array), Ordering::Equal);
        assert_eq!(c.compare(&exact, &seg), Ordering::Equal);
        assert_eq!(c.hash(&seg), c.hash(&array));
        assert_eq!(c.hash(&seq), c.hash(&array));
        assert_eq!(c.hash(&exact), c.hash(&array[..3]));

        let shorter = Sequence::new([4u8, 5, 6].into_iter());
        let bigger_first = Sequence::new([9u8, 0, 0].into_iter());
        assert_eq!(c.compare(&shorter, &array), Ordering::Less);
        assert_eq!(c.compare(&array, &shorter), Ordering::Greater);
        // Length still wins over an earlier larger byte
        assert_eq!(c.compare(&bigger_first, &seq), Ordering::Less);
    }

    #[test]
    fn test_fidelity_collision_is_not_equality() {
        for c in [
            BufferComparer::fnv(Fidelity::new(4)),
            BufferComparer::block(Fidelity::new(4), HashSeed::new(99)),
        ] {
            let x = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
            let y = [1u8, 2, 3, 4, 0, 0, 0, 0, 0, 0];
            assert_eq!(c.hash(&x), c.hash(&y));
            assert!(!c.equals(&x, &y));
        }
    }

    #[test]
    fn test_hash_kinds() {
        let data = b"hello world";
        assert_eq!(BufferComparer::DEFAULT.hash(&data[..]), fnv::hash_bytes(data));
        let block = BufferComparer::block(Fidelity::UNLIMITED, HashSeed::new(5));
        assert_eq!(block.hash(&data[..]), block_hash(HashSeed::new(5), data));

        let streamed = Sequence::new(data.iter().copied());
        assert_eq!(block.hash(&streamed), block.hash(&data[..]));
    }

    #[test]
    fn test_comparer_laws_random() {
        let mut rng = StdRng::seed_from_u64(0xC0DE);
        let comparers = [
            BufferComparer::DEFAULT,
            BufferComparer::fnv(Fidelity::new(2)),
            BufferComparer::block(Fidelity::new(-1), HashSeed::DEFAULT),
            BufferComparer::block(Fidelity::new(3), HashSeed::new(17)),
        ];

        for _ in 0..500 {
            let len_x = rng.gen_range(0..6);
            let len_y = rng.gen_range(0..6);
            // Small alphabet so equal buffers show up often
            let x: Vec<u8> = (0..len_x).map(|_| rng.gen_range(0..3)).collect();
            let y: Vec<u8> = (0..len_y).map(|_| rng.gen_range(0..3)).collect();
            let y_seq = Sequence::new(y.iter().copied());

            for c in &comparers {
                let xy = c.compare(&x[..], &y[..]);
                assert_eq!(xy, c.compare(&y[..], &x[..]).reverse());
                assert_eq!(xy, c.compare(&x[..], &y_seq));
                assert_eq!(c.equals(&x[..], &y[..]), xy == Ordering::Equal);
                if c.equals(&x[..], &y[..]) {
                    assert_eq!(c.hash(&x[..]), c.hash(&y[..]));
                    assert_eq!(c.hash(&x[..]), c.hash(&y_seq));
                }
            }
        }
    }

    #[test]
    fn test_sort_buffers() {
        let c = BufferComparer::DEFAULT;
        let mut buffers: [&[u8]; 5] = [b"bb", b"a", b"", b"ab", b"b"];
        c.sort_buffers(&mut buffers);
        let expected: [&[u8]; 5] = [b"", b"a", b"b", b"ab", b"bb"];
        assert_eq!(buffers, expected);
    }

    #[test]
    fn test_config_round_trip() {
        let config = ComparerConfig::default()
            .with_fidelity(8)
            .with_hash(HashKind::Block(HashSeed::new(3)));
        let c = config.build();
        assert_eq!(c.fidelity(), Fidelity::new(8));
        assert_eq!(c.hash_kind(), HashKind::Block(HashSeed::new(3)));
        assert_eq!(c.config(), config);
    }
}
