//! mutant-dna — mutant detection over square DNA grids
//!
//! A DNA sample is an N×N grid of the letters `A C G T`. It belongs to a
//! mutant when it contains at least two sequences of four identical letters
//! running horizontally, vertically or diagonally.

pub mod dna;
pub mod scanner;
pub mod storage;
pub mod stats;
pub mod service;
pub mod api;
pub mod config;

pub use dna::{validate, Grid, Nucleotide, ValidationError, ValidationErrorKind};
pub use scanner::{is_mutant, Direction, Scanner, ScannerConfig, SequenceMatch};
pub use storage::{DnaRecord, JsonStore, MemoryStore, StoreError, VerdictStore};
pub use stats::StatsResponse;
pub use service::{DetectorError, MutantService};
pub use config::{ConfigError, DetectorConfig};
