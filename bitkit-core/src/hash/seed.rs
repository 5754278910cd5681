//! Seed value for the block hash

/// Seed mixed into every block-hash lane
///
/// Owned by whoever builds a hasher; nothing reads it from ambient state.
/// The std crate layers a process-wide value on top of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HashSeed(pub u32);

impl HashSeed {
    /// Fixed seed used when nothing else is configured
    pub const DEFAULT: HashSeed = HashSeed(0);

    /// Wrap a raw seed value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw seed value
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for HashSeed {
    fn from(value: u32) -> Self {
        Self(value)
    }
}
