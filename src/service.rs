//! MutantService — validation, scanning and recording in one call
//!
//! Grids already present in the store (by fingerprint) are answered from the
//! stored verdict without rescanning, provided the record was produced under
//! the same scanner settings. A record from different settings is rescanned
//! and overwritten.

use crate::dna::{validate, ValidationError};
use crate::scanner::Scanner;
use crate::stats::{self, StatsResponse};
use crate::storage::{DnaRecord, StoreError, VerdictStore};
use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("Invalid DNA: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct MutantService<S: VerdictStore> {
    scanner: Scanner,
    store: S,
}

impl<S: VerdictStore> MutantService<S> {
    pub fn new(store: S) -> Self {
        Self::with_scanner(Scanner::default(), store)
    }

    pub fn with_scanner(scanner: Scanner, store: S) -> Self {
        Self { scanner, store }
    }

    /// Validate, scan (unless already recorded) and record
    pub fn analyze<R: AsRef<str>>(&mut self, rows: &[R]) -> Result<bool, DetectorError> {
        let grid = validate(rows)?;
        let hash = grid.fingerprint();

        let config = *self.scanner.config();

        match self.store.find_by_hash(&hash) {
            Some(record) if record.scanner == config => {
                debug!("Verdict cache hit for {}", &hash[..12]);
                self.store.record_duplicate_hit()?;
                Ok(record.is_mutant)
            }
            Some(_) => {
                debug!("Stale verdict for {}, rescanning", &hash[..12]);
                let is_mutant = self.scanner.is_mutant(&grid);
                self.store.replace(DnaRecord::new(&grid, is_mutant).with_scanner(config))?;
                Ok(is_mutant)
            }
            None => {
                let is_mutant = self.scanner.is_mutant(&grid);
                self.store.save(DnaRecord::new(&grid, is_mutant).with_scanner(config))?;
                Ok(is_mutant)
            }
        }
    }

    pub fn stats(&self) -> StatsResponse {
        stats::stats(&self.store)
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
