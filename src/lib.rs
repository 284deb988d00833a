//! # rangeand
//!
//! Bitwise AND of every integer in a closed `u32` range.
//!
//! The brute-force strategy walks the whole range and serves as the oracle.
//! The closed-form strategies keep the common high-order bit prefix of the
//! two bounds, so they cost O(32) whatever the size of the range. The
//! harness checks the strategies against each other and times them.

pub mod fixtures;
pub mod harness;
pub mod portability;
pub mod solver;

pub use fixtures::{Fixture, Range};
pub use solver::{bit_scan_and, brute_force_and, prefix_mask_and, Strategy, STRATEGIES};
