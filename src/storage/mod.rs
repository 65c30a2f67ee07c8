//! Verdict storage — persisted (grid, verdict) pairs
//!
//! Records are keyed by grid fingerprint, so each distinct grid is stored
//! exactly once no matter how often it is analyzed. Detection never depends
//! on this module; the service composes the two.

mod record;
mod memory;
mod json_store;

pub use record::DnaRecord;
pub use memory::MemoryStore;
pub use json_store::JsonStore;

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Anything that can record verdicts and count them back
pub trait VerdictStore {
    fn find_by_hash(&self, hash: &str) -> Option<DnaRecord>;

    /// Store a record. Returns `false` when a record with the same hash
    /// already exists; the existing record is kept and a duplicate hit noted.
    fn save(&mut self, record: DnaRecord) -> Result<bool, StoreError>;

    /// Store a record, overwriting any record with the same hash
    fn replace(&mut self, record: DnaRecord) -> Result<(), StoreError>;

    /// Note an analysis answered from an existing record
    fn record_duplicate_hit(&mut self) -> Result<(), StoreError>;

    fn duplicate_hits(&self) -> u64;

    fn count_by_verdict(&self, is_mutant: bool) -> u64;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn exists_by_hash(&self, hash: &str) -> bool {
        self.find_by_hash(hash).is_some()
    }
}

fn insert_once(records: &mut HashMap<String, DnaRecord>, record: DnaRecord) -> bool {
    if records.contains_key(&record.dna_hash) {
        return false;
    }
    records.insert(record.dna_hash.clone(), record);
    true
}

fn count_by_verdict(records: &HashMap<String, DnaRecord>, is_mutant: bool) -> u64 {
    records.values().filter(|r| r.is_mutant == is_mutant).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::validate;

    #[test]
    fn test_memory_store_records_once() {
        let grid = validate(&["ATGC", "CAGT", "TTAT", "AGAA"]).unwrap();
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        assert!(store.save(DnaRecord::new(&grid, false)).unwrap());
        assert!(!store.save(DnaRecord::new(&grid, false)).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.duplicate_hits(), 1);
        store.record_duplicate_hit().unwrap();
        assert_eq!(store.duplicate_hits(), 2);
        assert!(store.exists_by_hash(&grid.fingerprint()));

        let found = store.find_by_hash(&grid.fingerprint()).unwrap();
        assert_eq!(found.dna, vec!["ATGC", "CAGT", "TTAT", "AGAA"]);
        assert!(!found.is_mutant);
    }

    #[test]
    fn test_memory_store_counts() {
        let mut store = MemoryStore::new();
        for rows in [["AAAA", "AAAA", "AAAA", "AAAA"], ["CCCC", "CCCC", "CCCC", "CCCC"]] {
            store.save(DnaRecord::new(&validate(&rows).unwrap(), true)).unwrap();
        }
        store
            .save(DnaRecord::new(&validate(&["ATGC", "CAGT", "TTAT", "AGAA"]).unwrap(), false))
            .unwrap();
        assert_eq!(store.count_by_verdict(true), 2);
        assert_eq!(store.count_by_verdict(false), 1);
        assert_eq!(store.len(), 3);
    }
}
