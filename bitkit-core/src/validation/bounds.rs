//! Range validation for bit-addressable slices and buffer windows
//!
//! Pure arithmetic checks with no memory access. Callers get back the
//! decomposed location so the checked arithmetic is done exactly once.

use crate::BitkitError;

/// Validate a global bit offset against a slice of `word_count` words,
/// each `word_bits` wide
///
/// Returns `(word_index, bit_index)` where `bit_index < word_bits`.
pub const fn validate_bit_offset(
    word_count: usize,
    word_bits: u32,
    offset: usize,
) -> Result<(usize, u32), BitkitError> {
    let word_bits = word_bits as usize;

    // Total addressable bits with overflow protection
    let total_bits = match word_count.checked_mul(word_bits) {
        Some(total) => total,
        None => usize::MAX,
    };

    if offset >= total_bits {
        return Err(BitkitError::BitOffsetOutOfRange);
    }

    Ok((offset / word_bits, (offset % word_bits) as u32))
}

/// Validate a `(offset, count)` window over an array of `array_len` bytes
pub const fn validate_window(
    array_len: usize,
    offset: usize,
    count: usize,
) -> Result<(), BitkitError> {
    let end = match offset.checked_add(count) {
        Some(end) => end,
        None => return Err(BitkitError::SegmentOutOfBounds),
    };

    if end > array_len {
        return Err(BitkitError::SegmentOutOfBounds);
    }

    Ok(())
}

/// Validate that a requested scratch size fits a power-of-two bucket
///
/// Zero-sized requests are allowed and land in the smallest bucket.
pub const fn validate_pool_size(min_size: usize, max_size: usize) -> Result<(), BitkitError> {
    if min_size > max_size || min_size > (1usize << (usize::BITS - 1)) {
        return Err(BitkitError::InvalidPoolSize);
    }
    Ok(())
}
