//! Portability utilities for the bit operations the solvers rely on

/// Width of the solver's integer type in bits
pub const WORD_BITS: u32 = u32::BITS;

/// Count leading zeros in a 32-bit integer
///
/// Returns 32 for zero.
#[inline(always)]
pub fn leading_zeros(x: u32) -> u32 {
    x.leading_zeros()
}

/// Count leading zeros without relying on a hardware count instruction
///
/// Scans down from the most significant bit until a set bit is found.
#[inline]
pub fn leading_zeros_fallback(x: u32) -> u32 {
    let mut count = 0;
    let mut mask = 1u32 << (WORD_BITS - 1);
    while mask != 0 && x & mask == 0 {
        count += 1;
        mask >>= 1;
    }
    count
}

/// 1-based index of the most significant set bit, or 0 when `x` is zero
#[inline(always)]
pub fn highest_bit(x: u32) -> u32 {
    WORD_BITS - leading_zeros(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros() {
        assert_eq!(leading_zeros(0b0001), 31);
        assert_eq!(leading_zeros(0b1000_0000_0000_0000_0000_0000_0000_0000), 0);
        assert_eq!(leading_zeros(0), 32);
    }

    #[test]
    fn test_fallback_matches_intrinsic() {
        let mut samples = vec![0, 1, 2, 3, u32::MAX, u32::MAX - 1, 0x8000_0000, 0x7fff_ffff];
        samples.extend((0..32).map(|shift| 1u32 << shift));
        samples.extend((0..32).map(|shift| (1u32 << shift) - 1));

        for x in samples {
            assert_eq!(leading_zeros_fallback(x), leading_zeros(x), "x = {:#x}", x);
        }
    }

    #[test]
    fn test_highest_bit() {
        assert_eq!(highest_bit(0), 0);
        assert_eq!(highest_bit(1), 1);
        assert_eq!(highest_bit(0b100), 3);
        assert_eq!(highest_bit(0b11011), 5);
        assert_eq!(highest_bit(u32::MAX), 32);
    }
}
