//! Fixed-width bit operations
//!
//! Every function here is total. Bit offsets and rotate amounts are reduced
//! modulo the word width the way hardware shifts reduce them, so `-1`
//! addresses the top bit and `W + 3` addresses bit 3.

use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use super::debruijn;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer word usable by the bit primitives
///
/// Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait BitWord:
    Copy
    + Eq
    + core::fmt::Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + sealed::Sealed
{
    /// Width in bits
    const BITS: u32;
    /// All bits clear
    const ZERO: Self;
    /// Only bit 0 set
    const ONE: Self;

    /// `ONE` for `true`, `ZERO` for `false`
    fn from_bool(on: bool) -> Self;

    /// Wrapping subtraction
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Hamming weight via SWAR pairwise summation
    fn popcnt(self) -> u32;

    /// Leading zero count via De Bruijn lookup; `ZERO` yields `BITS`
    fn lzcnt(self) -> u32;

    /// Trailing zero count via De Bruijn lookup; `ZERO` yields `BITS`
    fn tzcnt(self) -> u32;

    /// Widen to `u64`
    fn to_u64(self) -> u64;
}

macro_rules! swar_popcount {
    ($t:ty, $value:expr) => {{
        const M1: $t = <$t>::MAX / 3; // 0x55..
        const M2: $t = <$t>::MAX / 5; // 0x33..
        const M4: $t = <$t>::MAX / 17; // 0x0F..
        const H01: $t = <$t>::MAX / 255; // 0x01..

        let mut x: $t = $value;
        x = x.wrapping_sub((x >> 1) & M1);
        x = (x & M2) + ((x >> 2) & M2);
        x = x.wrapping_add(x >> 4) & M4;
        (x.wrapping_mul(H01) >> (<$t>::BITS - 8)) as u32
    }};
}

macro_rules! impl_bit_word {
    ($t:ty, lz: $lz:expr, tz: $tz:expr) => {
        impl BitWord for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn from_bool(on: bool) -> Self {
                on as $t
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn popcnt(self) -> u32 {
                swar_popcount!($t, self)
            }

            #[inline]
            fn lzcnt(self) -> u32 {
                let f: fn($t) -> u32 = $lz;
                f(self)
            }

            #[inline]
            fn tzcnt(self) -> u32 {
                let f: fn($t) -> u32 = $tz;
                f(self)
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_bit_word!(u8,
    lz: |v| debruijn::leading_zeros_u32(v as u32) - 24,
    // Planting a sentinel just above the word makes zero report the width
    tz: |v| debruijn::trailing_zeros_u32(v as u32 | 0x100)
);
impl_bit_word!(u16,
    lz: |v| debruijn::leading_zeros_u32(v as u32) - 16,
    tz: |v| debruijn::trailing_zeros_u32(v as u32 | 0x1_0000)
);
impl_bit_word!(u32,
    lz: debruijn::leading_zeros_u32,
    tz: debruijn::trailing_zeros_u32
);
impl_bit_word!(u64,
    lz: debruijn::leading_zeros_u64,
    tz: debruijn::trailing_zeros_u64
);

/// Reduce a signed offset modulo the word width
#[inline]
fn shift_of<T: BitWord>(offset: i32) -> u32 {
    (offset as u32) & (T::BITS - 1)
}

/// Test bit `offset mod W`
#[inline]
pub fn extract_bit<T: BitWord>(value: T, offset: i32) -> bool {
    (value >> shift_of::<T>(offset)) & T::ONE == T::ONE
}

/// Return `value` with bit `offset mod W` set to `on`
#[inline]
pub fn write_bit<T: BitWord>(value: T, offset: i32, on: bool) -> T {
    let shift = shift_of::<T>(offset);
    let mask = T::ONE << shift;
    (value & !mask) | (T::from_bool(on) << shift)
}

/// Return `value` with bit `offset mod W` cleared
#[inline]
pub fn clear_bit<T: BitWord>(value: T, offset: i32) -> T {
    value & !(T::ONE << shift_of::<T>(offset))
}

/// Return `value` with bit `offset mod W` set
#[inline]
pub fn insert_bit<T: BitWord>(value: T, offset: i32) -> T {
    value | (T::ONE << shift_of::<T>(offset))
}

/// Return `value` with bit `offset mod W` flipped
#[inline]
pub fn complement_bit<T: BitWord>(value: T, offset: i32) -> T {
    value ^ (T::ONE << shift_of::<T>(offset))
}

/// Set bit `offset mod W` of `*value` to `on`, returning its prior state
#[inline]
pub fn write_bit_mut<T: BitWord>(value: &mut T, offset: i32, on: bool) -> bool {
    let prior = extract_bit(*value, offset);
    *value = write_bit(*value, offset, on);
    prior
}

/// Clear bit `offset mod W` of `*value`, returning its prior state
#[inline]
pub fn clear_bit_mut<T: BitWord>(value: &mut T, offset: i32) -> bool {
    let prior = extract_bit(*value, offset);
    *value = clear_bit(*value, offset);
    prior
}

/// Set bit `offset mod W` of `*value`, returning its prior state
#[inline]
pub fn insert_bit_mut<T: BitWord>(value: &mut T, offset: i32) -> bool {
    let prior = extract_bit(*value, offset);
    *value = insert_bit(*value, offset);
    prior
}

/// Flip bit `offset mod W` of `*value`, returning its prior state
#[inline]
pub fn complement_bit_mut<T: BitWord>(value: &mut T, offset: i32) -> bool {
    let prior = extract_bit(*value, offset);
    *value = complement_bit(*value, offset);
    prior
}

/// Circular left shift by `amount mod W`
#[inline]
pub fn rotate_left<T: BitWord>(value: T, amount: i32) -> T {
    let n = shift_of::<T>(amount);
    // `(W - 0) & (W - 1)` is 0, so a zero rotate never shifts by W
    (value << n) | (value >> (T::BITS.wrapping_sub(n) & (T::BITS - 1)))
}

/// Circular right shift by `amount mod W`
#[inline]
pub fn rotate_right<T: BitWord>(value: T, amount: i32) -> T {
    let n = shift_of::<T>(amount);
    (value >> n) | (value << (T::BITS.wrapping_sub(n) & (T::BITS - 1)))
}

/// Number of set bits
#[inline]
pub fn pop_count<T: BitWord>(value: T) -> u32 {
    value.popcnt()
}

/// Number of zero bits above the highest set bit; `W` for zero
#[inline]
pub fn leading_zeros<T: BitWord>(value: T) -> u32 {
    value.lzcnt()
}

/// Number of zero bits below the lowest set bit; `W` for zero
#[inline]
pub fn trailing_zeros<T: BitWord>(value: T) -> u32 {
    value.tzcnt()
}

/// Number of one bits above the highest clear bit; `W` for all-ones
#[inline]
pub fn leading_ones<T: BitWord>(value: T) -> u32 {
    (!value).lzcnt()
}

/// Number of one bits below the lowest clear bit; `W` for all-ones
#[inline]
pub fn trailing_ones<T: BitWord>(value: T) -> u32 {
    (!value).tzcnt()
}

/// `value != 0 && value & (value - 1) == 0`
#[inline]
pub fn is_power_of_two<T: BitWord>(value: T) -> bool {
    value != T::ZERO && value & value.wrapping_sub(T::ONE) == T::ZERO
}

/// 1 when the population count is odd, else 0
#[inline]
pub fn parity<T: BitWord>(value: T) -> u32 {
    value.popcnt() & 1
}

/// Floor of log2; zero maps to 0
#[inline]
pub fn log2<T: BitWord>(value: T) -> u32 {
    (T::BITS - 1) - (value | T::ONE).lzcnt()
}

/// Floor of log2 for a `usize`; zero maps to 0
#[inline]
pub fn log2_usize(value: usize) -> u32 {
    log2(value as u64)
}
