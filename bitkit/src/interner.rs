//! Deduplicating store of byte buffers
//!
//! Buffers are bucketed by a comparer's hash code and told apart with its
//! `equals`, so a low-fidelity comparer still interns correctly: it only
//! makes buckets larger.

use bitkit_core::{BufferComparer, ByteSource, FnvBuildHasher, MemCompare, NativeMemCompare};
use hashbrown::HashMap;

/// Interns buffers of any representation, handing out dense ids
#[derive(Debug, Clone, Default)]
pub struct BufferInterner<M = NativeMemCompare> {
    comparer: BufferComparer<M>,
    buckets: HashMap<i32, Vec<usize>, FnvBuildHasher>,
    entries: Vec<Vec<u8>>,
}

impl BufferInterner {
    /// Interner using the default FNV-1a comparer
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MemCompare> BufferInterner<M> {
    /// Interner bucketing by `comparer`
    pub fn with_comparer(comparer: BufferComparer<M>) -> Self {
        Self {
            comparer,
            buckets: HashMap::default(),
            entries: Vec::new(),
        }
    }

    /// Comparer used for bucketing and equality
    pub fn comparer(&self) -> &BufferComparer<M> {
        &self.comparer
    }

    /// Id of `buffer`, storing a copy if it has not been seen
    ///
    /// Absent buffers are never stored and yield `None`.
    pub fn intern<S: ByteSource + ?Sized>(&mut self, buffer: &S) -> Option<usize> {
        if buffer.is_absent() {
            return None;
        }
        let code = self.comparer.hash(buffer);
        if let Some(id) = self.find(code, buffer) {
            return Some(id);
        }

        let id = self.entries.len();
        self.entries.push(buffer.bytes().collect());
        self.buckets.entry(code).or_default().push(id);
        Some(id)
    }

    /// Id of `buffer` if it was interned before
    pub fn lookup<S: ByteSource + ?Sized>(&self, buffer: &S) -> Option<usize> {
        if buffer.is_absent() {
            return None;
        }
        self.find(self.comparer.hash(buffer), buffer)
    }

    /// Stored bytes for `id`
    pub fn get(&self, id: usize) -> Option<&[u8]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Number of distinct buffers stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been interned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct buffers that share a hash code with an earlier one
    pub fn collisions(&self) -> usize {
        self.buckets.values().map(|ids| ids.len() - 1).sum()
    }

    /// Stored buffers in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u8])> + '_ {
        self.entries.iter().map(Vec::as_slice).enumerate()
    }

    fn find<S: ByteSource + ?Sized>(&self, code: i32, buffer: &S) -> Option<usize> {
        self.buckets.get(&code)?.iter().copied().find(|&id| {
            self.comparer
                .equals(self.entries[id].as_slice(), buffer)
        })
    }
}
