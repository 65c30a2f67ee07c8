//! DnaRecord — one persisted (grid, verdict) pair

use crate::dna::Grid;
use crate::scanner::ScannerConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DnaRecord {
    pub id: Uuid,
    /// Grid fingerprint; unique within a store
    pub dna_hash: String,
    pub dna: Vec<String>,
    pub is_mutant: bool,
    /// Settings the verdict was computed under
    #[serde(default)]
    pub scanner: ScannerConfig,
    pub created_at: DateTime<Utc>,
}

impl DnaRecord {
    pub fn new(grid: &Grid, is_mutant: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            dna_hash: grid.fingerprint(),
            dna: grid.rows(),
            is_mutant,
            scanner: ScannerConfig::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_scanner(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn summary(&self) -> String {
        format!(
            "DnaRecord {} | {}x{} | {} | hash={}",
            self.id,
            self.dna.len(),
            self.dna.len(),
            if self.is_mutant { "mutant" } else { "human" },
            &self.dna_hash[..self.dna_hash.len().min(12)]
        )
    }
}
