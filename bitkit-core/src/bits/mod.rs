//! Bit-level primitives over 8/16/32/64-bit unsigned integers
//!
//! Scalar forms wrap their offsets modulo the width; slice forms treat a
//! run of words as one bit vector and bounds-check instead.

pub mod debruijn;
pub mod scalar;
pub mod slice;

pub use scalar::{
    clear_bit, clear_bit_mut, complement_bit, complement_bit_mut, extract_bit, insert_bit,
    insert_bit_mut, is_power_of_two, leading_ones, leading_zeros, log2, log2_usize, parity,
    pop_count, rotate_left, rotate_right, trailing_ones, trailing_zeros, write_bit, write_bit_mut,
    BitWord,
};
pub use slice::{
    bit_len, clear_bit_at, complement_bit_at, extract_bit_at, extract_bit_signed, first_set_bit,
    insert_bit_at, pop_count_slice, write_bit_at,
};
