//! Test data for the harness: literal cases and seeded random ranges

use crate::solver::oracle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Closed range of `u32` values with `low <= high`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    low: u32,
    high: u32,
}

impl Range {
    /// Build a range from two bounds given in any order
    #[inline]
    pub fn normalized(a: u32, b: u32) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    #[inline(always)]
    pub fn low(&self) -> u32 {
        self.low
    }

    #[inline(always)]
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Shrink the range so it covers at most `span + 1` values
    #[inline]
    pub fn clamp_span(self, span: u32) -> Self {
        Self {
            low: self.low,
            high: self.high.min(self.low.saturating_add(span)),
        }
    }
}

/// A range together with the AND of all its values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub low: u32,
    pub high: u32,
    pub expected: u32,
}

impl Fixture {
    pub const fn new(low: u32, high: u32, expected: u32) -> Self {
        Self {
            low,
            high,
            expected,
        }
    }

    /// Compute `expected` with the oracle
    pub fn from_range(range: Range) -> Self {
        Self::new(
            range.low(),
            range.high(),
            oracle().call(range.low(), range.high()),
        )
    }
}

/// Hand-picked cases, cheap enough for every strategy
pub const FIXTURES: &[Fixture] = &[
    Fixture::new(0b0, 0b1, 0b0),
    Fixture::new(0b1, 0b1, 0b1),
    Fixture::new(0b10, 0b10, 0b10),
    Fixture::new(0b0100, 0b1011, 0b00),
    Fixture::new(0b11, 0b100, 0b00),
    Fixture::new(0b11, 0b11, 0b11),
    Fixture::new(0b11000, 0b11011, 0b11000),
    Fixture::new(0b01000, 0b11011, 0b00000),
    Fixture::new(0b10100, 0b11111, 0b10000),
];

/// Edges of the `u32` domain; the full-width range is too large for the oracle
pub const BOUNDARY_FIXTURES: &[Fixture] = &[
    Fixture::new(0, 0, 0),
    Fixture::new(0, u32::MAX, 0),
    Fixture::new(u32::MAX, u32::MAX, u32::MAX),
];

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 55;

/// Number of generated pairs used when none is given
pub const DEFAULT_PAIR_COUNT: usize = 20;

/// Generate `count` random ranges with oracle-computed results
///
/// Bounds are drawn uniformly over `u32` and normalized. With `max_span`
/// set, `high` is pulled down so the oracle never walks more than
/// `max_span + 1` values. The same seed always yields the same fixtures.
pub fn generate_pairs(seed: u64, count: usize, max_span: Option<u32>) -> Vec<Fixture> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let a: u32 = rng.gen();
            let b: u32 = rng.gen();
            let range = Range::normalized(a, b);
            let range = match max_span {
                Some(span) => range.clamp_span(span),
                None => range,
            };
            Fixture::from_range(range)
        })
        .collect()
}
