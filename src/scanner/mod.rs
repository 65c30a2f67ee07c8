//! Sequence Scanner — the mutant verdict over a validated grid
//!
//! A grid is mutant when it holds at least two qualifying sequences: windows
//! of four identical letters running horizontally, vertically or along either
//! diagonal. The scanner has no error path; shape and alphabet are the
//! validator's job.

mod direction;
mod sequence;

pub use direction::Direction;
pub use sequence::{Scanner, ScannerConfig, SequenceMatch, Sequences};

use crate::dna::Grid;

/// Verdict with the default window length (4) and threshold (2)
pub fn is_mutant(grid: &Grid) -> bool {
    Scanner::default().is_mutant(grid)
}

/// Every qualifying window under the default configuration
pub fn count_sequences(grid: &Grid) -> usize {
    Scanner::default().count_sequences(grid)
}
