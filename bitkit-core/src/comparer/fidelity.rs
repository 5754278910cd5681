//! Hash fidelity: how many leading bytes take part in a hash code

/// Maximum number of leading bytes hashed by a comparer
///
/// Positive values cap the hashed prefix; zero or negative hashes the whole
/// buffer. Ordering and equality always examine the full buffer, so two
/// buffers that differ only past the window may share a hash code while
/// still comparing unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fidelity(i32);

impl Fidelity {
    /// Hash every byte
    pub const UNLIMITED: Fidelity = Fidelity(0);

    /// Wrap a raw fidelity value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw configured value
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Prefix length limit, or `None` when unlimited
    pub const fn limit(self) -> Option<usize> {
        if self.0 > 0 {
            Some(self.0 as usize)
        } else {
            None
        }
    }

    /// The prefix of `bytes` that participates in hashing
    #[inline]
    pub fn window(self, bytes: &[u8]) -> &[u8] {
        match self.limit() {
            Some(limit) if bytes.len() > limit => &bytes[..limit],
            _ => bytes,
        }
    }
}

impl From<i32> for Fidelity {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
