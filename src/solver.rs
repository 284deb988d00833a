//! Range-AND solvers
//!
//! Every strategy computes the bitwise AND of all integers in the closed
//! range `[low, high]` and requires `low <= high`. Callers normalize their
//! bounds first (see [`crate::fixtures::Range::normalized`]); a reversed
//! range is only caught by a debug assertion.

use crate::portability::{highest_bit, leading_zeros};

/// Uniform signature shared by all strategies
pub type Strategy = fn(u32, u32) -> u32;

/// A strategy with the name it is reported and selected under
#[derive(Clone, Copy, Debug)]
pub struct NamedStrategy {
    pub name: &'static str,
    pub solve: Strategy,
    /// The oracle defines expected values for generated pairs
    pub is_oracle: bool,
}

impl NamedStrategy {
    /// Run the strategy on one range
    #[inline(always)]
    pub fn call(&self, low: u32, high: u32) -> u32 {
        (self.solve)(low, high)
    }
}

/// All strategies, oracle first
pub const STRATEGIES: &[NamedStrategy] = &[
    NamedStrategy {
        name: "brute-force",
        solve: brute_force_and,
        is_oracle: true,
    },
    NamedStrategy {
        name: "bit-scan",
        solve: bit_scan_and,
        is_oracle: false,
    },
    NamedStrategy {
        name: "prefix-mask",
        solve: prefix_mask_and,
        is_oracle: false,
    },
];

/// The reference strategy
pub fn oracle() -> &'static NamedStrategy {
    &STRATEGIES[0]
}

/// Look up a strategy by name
pub fn find_strategy(name: &str) -> Option<&'static NamedStrategy> {
    STRATEGIES.iter().find(|s| s.name == name)
}

/// AND every value in the range together, one at a time
pub fn brute_force_and(low: u32, high: u32) -> u32 {
    debug_assert!(low <= high, "reversed range: {:#x} > {:#x}", low, high);

    let mut result = low;
    for c in low..=high {
        result &= c;
    }
    result
}

/// Keep the common high-order prefix of both bounds, scanning bit by bit
///
/// Walks down from the top set bit of `high` and stops at the first
/// position where the bounds disagree. Every value in the range flips that
/// bit and all bits below it, so none of them survive the AND.
pub fn bit_scan_and(low: u32, high: u32) -> u32 {
    debug_assert!(low <= high, "reversed range: {:#x} > {:#x}", low, high);

    let shared = low & high;
    let diverged = low ^ high;
    let mut result = 0;

    for bit in (0..highest_bit(high)).rev() {
        let mask = 1u32 << bit;
        if diverged & mask != 0 {
            return result;
        }
        result |= shared & mask;
    }

    result
}

/// Keep the common high-order prefix of both bounds in one step
///
/// Same result as [`bit_scan_and`], using a single leading-zero count of
/// the bits where the bounds differ.
pub fn prefix_mask_and(low: u32, high: u32) -> u32 {
    debug_assert!(low <= high, "reversed range: {:#x} > {:#x}", low, high);

    let diverged = low ^ high;
    if diverged == 0 {
        return low;
    }
    low & !(u32::MAX >> leading_zeros(diverged))
}
