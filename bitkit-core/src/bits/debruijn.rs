//! De Bruijn multiply-and-lookup zero counts
//!
//! The 32-bit counts are the primitives; 8/16-bit counts widen into them and
//! 64-bit counts compose two 32-bit lookups.

/// Floor-log2 lookup indexed by `(smeared * 0x07C4ACDD) >> 27`
const LOG2_TABLE: [u8; 32] = [
    0, 9, 1, 10, 13, 21, 2, 29, 11, 14, 16, 18, 22, 25, 3, 30, 8, 12, 20, 28, 15, 17, 24, 7, 19,
    27, 23, 6, 26, 5, 4, 31,
];

/// Bit-position lookup indexed by `(isolated * 0x077CB531) >> 27`
const TRAILING_TABLE: [u8; 32] = [
    0, 1, 28, 2, 29, 14, 24, 3, 30, 22, 20, 15, 25, 17, 4, 8, 31, 27, 13, 23, 21, 19, 16, 7, 26,
    12, 18, 6, 11, 5, 10, 9,
];

const LOG2_MULTIPLIER: u32 = 0x07C4_ACDD;
const TRAILING_MULTIPLIER: u32 = 0x077C_B531;

/// Count leading zero bits of a 32-bit value; `0` yields 32
#[inline]
pub const fn leading_zeros_u32(value: u32) -> u32 {
    if value == 0 {
        return 32;
    }

    // Smear the highest set bit into every lower position
    let mut v = value;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;

    let index = (v.wrapping_mul(LOG2_MULTIPLIER) >> 27) as usize;
    31 - LOG2_TABLE[index] as u32
}

/// Count trailing zero bits of a 32-bit value; `0` yields 32
#[inline]
pub const fn trailing_zeros_u32(value: u32) -> u32 {
    if value == 0 {
        return 32;
    }

    let isolated = value & value.wrapping_neg();
    let index = (isolated.wrapping_mul(TRAILING_MULTIPLIER) >> 27) as usize;
    TRAILING_TABLE[index] as u32
}

/// Count leading zero bits of a 64-bit value; `0` yields 64
///
/// The low half only contributes when the high half is saturated (all 32
/// of its bits are zero).
#[inline]
pub const fn leading_zeros_u64(value: u64) -> u32 {
    let high = leading_zeros_u32((value >> 32) as u32);
    if high == 32 {
        32 + leading_zeros_u32(value as u32)
    } else {
        high
    }
}

/// Count trailing zero bits of a 64-bit value; `0` yields 64
#[inline]
pub const fn trailing_zeros_u64(value: u64) -> u32 {
    let low = trailing_zeros_u32(value as u32);
    if low == 32 {
        32 + trailing_zeros_u32((value >> 32) as u32)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_zero_inputs_saturate() {
        assert_eq!(leading_zeros_u32(0), 32);
        assert_eq!(trailing_zeros_u32(0), 32);
        assert_eq!(leading_zeros_u64(0), 64);
        assert_eq!(trailing_zeros_u64(0), 64);
    }

    #[test]
    fn test_every_single_bit_u32() {
        for bit in 0..32 {
            let v = 1u32 << bit;
            assert_eq!(leading_zeros_u32(v), 31 - bit);
            assert_eq!(trailing_zeros_u32(v), bit);
        }
    }

    #[test]
    fn test_half_boundary_u64() {
        // Values straddling the 32/64 split
        assert_eq!(leading_zeros_u64(1 << 32), 31);
        assert_eq!(leading_zeros_u64((1 << 32) - 1), 32);
        assert_eq!(leading_zeros_u64(1 << 31), 32);
        assert_eq!(leading_zeros_u64(1), 63);
        assert_eq!(leading_zeros_u64(u64::MAX), 0);

        assert_eq!(trailing_zeros_u64(1 << 32), 32);
        assert_eq!(trailing_zeros_u64(1 << 31), 31);
        assert_eq!(trailing_zeros_u64(1 << 63), 63);
        assert_eq!(trailing_zeros_u64(0xFFFF_FFFF_0000_0000), 32);
        assert_eq!(trailing_zeros_u64(u64::MAX), 0);
    }

    #[test]
    fn test_every_single_bit_u64() {
        for bit in 0..64 {
            let v = 1u64 << bit;
            assert_eq!(leading_zeros_u64(v), 63 - bit);
            assert_eq!(trailing_zeros_u64(v), bit);
            // Extra bits below/above must not change the answer
            assert_eq!(leading_zeros_u64(v | (v >> 1)), 63 - bit);
            assert_eq!(trailing_zeros_u64(v | v.wrapping_shl(1)), bit);
        }
    }

    #[test]
    fn test_against_hardware_counts() {
        let mut rng = StdRng::seed_from_u64(0xDEB2);
        for _ in 0..20_000 {
            let shift: u32 = rng.gen_range(0..64);
            let v: u64 = rng.gen::<u64>() >> shift;
            assert_eq!(leading_zeros_u64(v), v.leading_zeros());
            let w: u64 = rng.gen::<u64>() << shift;
            assert_eq!(trailing_zeros_u64(w), w.trailing_zeros());

            let x = v as u32;
            assert_eq!(leading_zeros_u32(x), x.leading_zeros());
            assert_eq!(trailing_zeros_u32(x), x.trailing_zeros());
        }
    }
}
