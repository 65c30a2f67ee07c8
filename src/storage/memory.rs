//! In-memory verdict store

use super::{DnaRecord, StoreError, VerdictStore};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: HashMap<String, DnaRecord>,
    duplicate_hits: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VerdictStore for MemoryStore {
    fn find_by_hash(&self, hash: &str) -> Option<DnaRecord> {
        self.records.get(hash).cloned()
    }

    fn save(&mut self, record: DnaRecord) -> Result<bool, StoreError> {
        let inserted = super::insert_once(&mut self.records, record);
        if !inserted {
            self.duplicate_hits += 1;
        }
        Ok(inserted)
    }

    fn replace(&mut self, record: DnaRecord) -> Result<(), StoreError> {
        self.records.insert(record.dna_hash.clone(), record);
        Ok(())
    }

    fn record_duplicate_hit(&mut self) -> Result<(), StoreError> {
        self.duplicate_hits += 1;
        Ok(())
    }

    fn duplicate_hits(&self) -> u64 {
        self.duplicate_hits
    }

    fn count_by_verdict(&self, is_mutant: bool) -> u64 {
        super::count_by_verdict(&self.records, is_mutant)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
