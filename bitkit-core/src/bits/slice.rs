//! Bit-vector operations over slices of words
//!
//! A slice of `T` is treated as one long little-endian bit buffer: global
//! bit `i` lives in word `i / W` at position `i % W`. Unlike the scalar
//! forms these bounds-check the offset and report
//! [`BitkitError::BitOffsetOutOfRange`] instead of wrapping.

use super::scalar::{self, BitWord};
use crate::validation::validate_bit_offset;
use crate::{BitkitError, Result};

#[inline]
fn locate<T: BitWord>(words: &[T], offset: usize) -> Result<(usize, i32)> {
    let (word, bit) = validate_bit_offset(words.len(), T::BITS, offset)?;
    Ok((word, bit as i32))
}

/// Number of addressable bits in `words`
#[inline]
pub fn bit_len<T: BitWord>(words: &[T]) -> usize {
    words.len().saturating_mul(T::BITS as usize)
}

/// Test global bit `offset`
pub fn extract_bit_at<T: BitWord>(words: &[T], offset: usize) -> Result<bool> {
    let (word, bit) = locate(words, offset)?;
    Ok(scalar::extract_bit(words[word], bit))
}

/// Set global bit `offset` to `on`, returning its prior state
pub fn write_bit_at<T: BitWord>(words: &mut [T], offset: usize, on: bool) -> Result<bool> {
    let (word, bit) = locate(words, offset)?;
    Ok(scalar::write_bit_mut(&mut words[word], bit, on))
}

/// Clear global bit `offset`, returning its prior state
pub fn clear_bit_at<T: BitWord>(words: &mut [T], offset: usize) -> Result<bool> {
    let (word, bit) = locate(words, offset)?;
    Ok(scalar::clear_bit_mut(&mut words[word], bit))
}

/// Set global bit `offset`, returning its prior state
pub fn insert_bit_at<T: BitWord>(words: &mut [T], offset: usize) -> Result<bool> {
    let (word, bit) = locate(words, offset)?;
    Ok(scalar::insert_bit_mut(&mut words[word], bit))
}

/// Flip global bit `offset`, returning its prior state
pub fn complement_bit_at<T: BitWord>(words: &mut [T], offset: usize) -> Result<bool> {
    let (word, bit) = locate(words, offset)?;
    Ok(scalar::complement_bit_mut(&mut words[word], bit))
}

/// Total number of set bits across the slice
pub fn pop_count_slice<T: BitWord>(words: &[T]) -> usize {
    words.iter().map(|&w| scalar::pop_count(w) as usize).sum()
}

/// Global offset of the first set bit, if any
pub fn first_set_bit<T: BitWord>(words: &[T]) -> Option<usize> {
    words
        .iter()
        .position(|&w| w != T::ZERO)
        .map(|i| i * T::BITS as usize + scalar::trailing_zeros(words[i]) as usize)
}

/// Signed offset variant used by callers holding `i64` offsets
///
/// Negative offsets are never valid for a slice.
pub fn extract_bit_signed<T: BitWord>(words: &[T], offset: i64) -> Result<bool> {
    let offset = usize::try_from(offset).map_err(|_| BitkitError::BitOffsetOutOfRange)?;
    extract_bit_at(words, offset)
}
