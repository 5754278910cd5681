//! Bucketed scratch-buffer pool
//!
//! Buffers are grouped by power-of-two capacity. Renting takes a buffer
//! from the matching bucket or allocates a fresh one; giving it back keeps
//! it for the next caller unless the bucket is already full.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, OnceLock, PoisonError};

use bitkit_core::bits::log2_usize;
use bitkit_core::validation::validate_pool_size;
use bitkit_core::{FnvBuildHasher, ScratchPool};
use hashbrown::HashMap;

/// Smallest capacity handed out
pub const MIN_BUFFER_SIZE: usize = 16;

/// Pool limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    /// Largest request the pool will serve, in bytes
    pub max_buffer_size: usize,
    /// Buffers retained per capacity bucket
    pub max_per_bucket: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_buffer_size: 1024 * 1024,
            max_per_bucket: 8,
        }
    }
}

impl PoolConfig {
    /// Set the largest request size
    pub fn with_max_buffer_size(mut self, max_buffer_size: usize) -> Self {
        self.max_buffer_size = max_buffer_size;
        self
    }

    /// Set how many buffers each bucket retains
    pub fn with_max_per_bucket(mut self, max_per_bucket: usize) -> Self {
        self.max_per_bucket = max_per_bucket;
        self
    }
}

/// Thread-safe scratch-buffer pool
#[derive(Debug, Default)]
pub struct BufferPool {
    config: PoolConfig,
    buckets: Mutex<HashMap<u32, Vec<Vec<u8>>, FnvBuildHasher>>,
}

impl BufferPool {
    /// Pool with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with the given limits
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            config,
            buckets: Mutex::default(),
        }
    }

    /// Process-wide pool
    pub fn shared() -> &'static BufferPool {
        static SHARED: OnceLock<BufferPool> = OnceLock::new();
        SHARED.get_or_init(BufferPool::new)
    }

    /// Limits this pool enforces
    pub fn config(&self) -> PoolConfig {
        self.config
    }

    /// Rent a buffer that goes back to the pool when dropped
    pub fn rent_guard(&self, min_size: usize) -> bitkit_core::Result<RentedBuffer<'_>> {
        let buffer = self.rent(min_size)?;
        Ok(RentedBuffer {
            pool: self,
            buffer: Some(buffer),
        })
    }

    /// Number of idle buffers currently held
    pub fn retained(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    /// Drop every idle buffer
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<u32, Vec<Vec<u8>>, FnvBuildHasher>> {
        // The map stays consistent even if a holder panicked
        self.buckets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Bucket exponent and capacity serving `size` bytes
fn bucket_for(size: usize) -> (u32, usize) {
    let capacity = size.max(MIN_BUFFER_SIZE).next_power_of_two();
    (log2_usize(capacity), capacity)
}

impl ScratchPool for BufferPool {
    type Buffer = Vec<u8>;

    fn rent(&self, min_size: usize) -> bitkit_core::Result<Vec<u8>> {
        validate_pool_size(min_size, self.config.max_buffer_size)?;
        let (bucket, capacity) = bucket_for(min_size);

        let reused = self.lock().get_mut(&bucket).and_then(Vec::pop);
        let mut buffer = reused.unwrap_or_else(|| Vec::with_capacity(capacity));
        buffer.clear();
        buffer.resize(capacity, 0);
        Ok(buffer)
    }

    fn give_back(&self, buffer: Vec<u8>) {
        let len = buffer.len();
        // Only exact bucket sizes are pooled
        if len < MIN_BUFFER_SIZE || !len.is_power_of_two() {
            return;
        }
        let (bucket, _) = bucket_for(len);
        let mut buckets = self.lock();
        let idle = buckets.entry(bucket).or_default();
        if idle.len() < self.config.max_per_bucket {
            idle.push(buffer);
        }
    }
}

/// A rented buffer that returns itself to its pool on drop
#[derive(Debug)]
pub struct RentedBuffer<'p> {
    pool: &'p BufferPool,
    buffer: Option<Vec<u8>>,
}

impl RentedBuffer<'_> {
    /// Keep the buffer instead of returning it
    pub fn detach(mut self) -> Vec<u8> {
        self.buffer.take().unwrap_or_default()
    }
}

impl Deref for RentedBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or_default()
    }
}

impl DerefMut for RentedBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.buffer.as_deref_mut().unwrap_or_default()
    }
}

impl Drop for RentedBuffer<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.pool.give_back(buffer);
        }
    }
}
