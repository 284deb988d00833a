//! Verification and timing of strategies over fixtures

use crate::fixtures::Fixture;
use crate::solver::{find_strategy, NamedStrategy};
use std::time::{Duration, Instant};
use thiserror::Error;

/// A strategy produced the wrong value for a fixture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Verification failed: {strategy}(0x{low:x}, 0x{high:x}) = 0x{got:x}\nExpected: 0x{expected:x}")]
pub struct Mismatch {
    pub strategy: &'static str,
    pub low: u32,
    pub high: u32,
    pub got: u32,
    pub expected: u32,
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

/// Resolve a strategy name given on the command line
pub fn select_strategy(name: &str) -> Result<&'static NamedStrategy, HarnessError> {
    find_strategy(name).ok_or_else(|| HarnessError::UnknownStrategy(name.to_string()))
}

/// Run `strategy` over every fixture and collect all mismatches
pub fn verify(strategy: &NamedStrategy, fixtures: &[Fixture]) -> Vec<Mismatch> {
    fixtures
        .iter()
        .filter_map(|f| {
            let got = strategy.call(f.low, f.high);
            if got == f.expected {
                None
            } else {
                log::debug!(
                    "{}: {:#x}..={:#x} gave {:#x}, expected {:#x}",
                    strategy.name,
                    f.low,
                    f.high,
                    got,
                    f.expected
                );
                Some(Mismatch {
                    strategy: strategy.name,
                    low: f.low,
                    high: f.high,
                    got,
                    expected: f.expected,
                })
            }
        })
        .collect()
}

/// Outcome of timing a strategy over a batch of fixtures
#[derive(Debug, Clone)]
pub struct PerfReport {
    pub strategy: &'static str,
    /// Results of the last batch, in fixture order
    pub results: Vec<u32>,
    /// Wall time across all batches
    pub elapsed: Duration,
    pub iterations: usize,
}

impl PerfReport {
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed.as_nanos()
    }

    /// Mean wall time of one batch
    pub fn mean_ns(&self) -> u128 {
        if self.iterations == 0 {
            return 0;
        }
        self.elapsed_ns() / self.iterations as u128
    }
}

/// Time one batched run of `strategy` over `fixtures`
pub fn perf_test(strategy: &NamedStrategy, fixtures: &[Fixture]) -> PerfReport {
    perf_test_iterations(strategy, fixtures, 1)
}

/// Time `iterations` batched runs of `strategy` over `fixtures`
pub fn perf_test_iterations(
    strategy: &NamedStrategy,
    fixtures: &[Fixture],
    iterations: usize,
) -> PerfReport {
    let mut results = vec![0u32; fixtures.len()];
    let mut elapsed = Duration::ZERO;

    for _ in 0..iterations {
        let start = Instant::now();
        for (slot, f) in results.iter_mut().zip(fixtures) {
            *slot = strategy.call(f.low, f.high);
        }
        elapsed += start.elapsed();
    }

    log::debug!(
        "{}: {} fixtures x {} iterations in {:?}",
        strategy.name,
        fixtures.len(),
        iterations,
        elapsed
    );

    PerfReport {
        strategy: strategy.name,
        results,
        elapsed,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FIXTURES;
    use crate::solver::STRATEGIES;

    fn always_zero(_: u32, _: u32) -> u32 {
        0
    }

    const BROKEN: NamedStrategy = NamedStrategy {
        name: "always-zero",
        solve: always_zero,
        is_oracle: false,
    };

    #[test]
    fn test_verify_passes_for_all_strategies() {
        for s in STRATEGIES {
            assert!(verify(s, FIXTURES).is_empty(), "{} failed", s.name);
        }
    }

    #[test]
    fn test_verify_collects_every_mismatch() {
        let mismatches = verify(&BROKEN, FIXTURES);
        let nonzero = FIXTURES.iter().filter(|f| f.expected != 0).count();
        assert_eq!(mismatches.len(), nonzero);
        assert!(mismatches.iter().all(|m| m.got == 0 && m.strategy == "always-zero"));
    }

    #[test]
    fn test_mismatch_message() {
        let m = Mismatch {
            strategy: "bit-scan",
            low: 0x14,
            high: 0x1f,
            got: 0,
            expected: 0x10,
        };
        assert_eq!(
            m.to_string(),
            "Verification failed: bit-scan(0x14, 0x1f) = 0x0\nExpected: 0x10"
        );
    }

    #[test]
    fn test_perf_results_in_fixture_order() {
        let report = perf_test_iterations(&STRATEGIES[1], FIXTURES, 3);
        let expected: Vec<u32> = FIXTURES.iter().map(|f| f.expected).collect();
        assert_eq!(report.results, expected);
        assert_eq!(report.iterations, 3);
        assert!(report.mean_ns() <= report.elapsed_ns());
    }

    #[test]
    fn test_perf_single_pass() {
        let report = perf_test(&STRATEGIES[2], FIXTURES);
        assert_eq!(report.strategy, "prefix-mask");
        assert_eq!(report.iterations, 1);
        assert_eq!(report.mean_ns(), report.elapsed_ns());
    }

    #[test]
    fn test_perf_zero_iterations() {
        let report = perf_test_iterations(&STRATEGIES[0], FIXTURES, 0);
        assert_eq!(report.mean_ns(), 0);
        assert_eq!(report.results, vec![0; FIXTURES.len()]);
    }

    #[test]
    fn test_select_strategy() {
        assert_eq!(select_strategy("prefix-mask").unwrap().name, "prefix-mask");
        let err = select_strategy("quick").unwrap_err();
        assert_eq!(err.to_string(), "unknown strategy 'quick'");
    }
}
