//! Sequence scanning — sliding windows over every orientation
//!
//! Every in-bounds window of `sequence_length` cells whose letters are all
//! equal is one qualifying sequence. Windows are counted independently, so a
//! contiguous run of length L contributes `L - sequence_length + 1` of them.

use super::Direction;
use crate::config::ConfigError;
use crate::dna::{Grid, Nucleotide};
use log::debug;
use serde::{Deserialize, Serialize};

/// A qualifying window: `sequence_length` equal letters starting at `(row, col)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceMatch {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub base: Nucleotide,
}

impl SequenceMatch {
    /// The window's text for a scan of the given `sequence_length`
    pub fn letters(&self, sequence_length: usize) -> String {
        std::iter::repeat(self.base.as_char()).take(sequence_length).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Window length a run must fill
    pub sequence_length: usize,
    /// Qualifying sequences needed for a mutant verdict
    pub mutant_threshold: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            sequence_length: 4,
            mutant_threshold: 2,
        }
    }
}

impl ScannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequence_length < 2 {
            return Err(ConfigError::Invalid(format!(
                "sequence_length must be at least 2, got {}",
                self.sequence_length
            )));
        }
        if self.mutant_threshold < 1 {
            return Err(ConfigError::Invalid(
                "mutant_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Stateless scanner; cheap to copy and safe to share between threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Lazily enumerate qualifying windows in row-major order
    pub fn sequences<'g>(&self, grid: &'g Grid) -> Sequences<'g> {
        Sequences {
            grid,
            len: self.config.sequence_length,
            pos: 0,
            dir: 0,
        }
    }

    /// Mutant verdict. Stops as soon as the threshold is reached.
    pub fn is_mutant(&self, grid: &Grid) -> bool {
        let threshold = self.config.mutant_threshold;
        let found = self.sequences(grid).take(threshold).count();
        let mutant = found >= threshold;
        debug!("Scanned {}x{} grid: mutant={}", grid.size(), grid.size(), mutant);
        mutant
    }

    /// Total qualifying windows, without early exit
    pub fn count_sequences(&self, grid: &Grid) -> usize {
        self.sequences(grid).count()
    }

    pub fn find_sequences(&self, grid: &Grid) -> Vec<SequenceMatch> {
        self.sequences(grid).collect()
    }
}

/// Iterator over qualifying windows; see [`Scanner::sequences`]
pub struct Sequences<'g> {
    grid: &'g Grid,
    len: usize,
    /// Flattened cell index `row * n + col`
    pos: usize,
    /// Index into `Direction::ALL`
    dir: usize,
}

impl Sequences<'_> {
    fn window_matches(&self, row: usize, col: usize, direction: Direction) -> Option<Nucleotide> {
        let n = self.grid.size();
        // bounds first: the far end decides whether the window fits
        direction.step(row, col, self.len - 1, n)?;
        let base = self.grid.at(row, col);
        (1..self.len)
            .all(|k| match direction.step(row, col, k, n) {
                Some((r, c)) => self.grid.at(r, c) == base,
                None => false,
            })
            .then_some(base)
    }
}

impl Iterator for Sequences<'_> {
    type Item = SequenceMatch;

    fn next(&mut self) -> Option<SequenceMatch> {
        let n = self.grid.size();
        while self.pos < n * n {
            let (row, col) = (self.pos / n, self.pos % n);
            let direction = Direction::ALL[self.dir];

            self.dir += 1;
            if self.dir == Direction::ALL.len() {
                self.dir = 0;
                self.pos += 1;
            }

            if let Some(base) = self.window_matches(row, col, direction) {
                return Some(SequenceMatch { row, col, direction, base });
            }
        }
        None
    }
}
