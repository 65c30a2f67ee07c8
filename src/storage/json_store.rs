//! JSON-file verdict store
//!
//! The whole store is one pretty-printed JSON document, rewritten on every
//! change. Writes go to a sibling temp file that is then renamed over the
//! store, so an interrupted flush leaves the previous document intact. A
//! missing file opens as an empty store; a file that exists but does not
//! parse is an error rather than silently discarded.

use super::{DnaRecord, StoreError, VerdictStore};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonStore {
    records: HashMap<String, DnaRecord>,
    pub metadata: StoreMetadata,
    #[serde(skip)]
    path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub created_at: DateTime<Utc>,
    /// Analyses answered from an existing record instead of adding one
    pub duplicate_hits: u64,
}

impl JsonStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            let mut store: JsonStore = serde_json::from_str(&data)?;
            store.path = path;
            info!("Loaded {} records from {}", store.records.len(), store.path.display());
            return Ok(store);
        }
        Ok(Self {
            records: HashMap::new(),
            metadata: StoreMetadata {
                created_at: Utc::now(),
                duplicate_hits: 0,
            },
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &DnaRecord> {
        self.records.values()
    }

    pub fn summary(&self) -> String {
        format!(
            "JsonStore '{}' | {} records | {} mutant | {} human | {} duplicate hits",
            self.path.display(),
            self.records.len(),
            self.count_by_verdict(true),
            self.count_by_verdict(false),
            self.metadata.duplicate_hits
        )
    }
}

impl VerdictStore for JsonStore {
    fn find_by_hash(&self, hash: &str) -> Option<DnaRecord> {
        self.records.get(hash).cloned()
    }

    fn save(&mut self, record: DnaRecord) -> Result<bool, StoreError> {
        let summary = record.summary();
        if !super::insert_once(&mut self.records, record) {
            self.record_duplicate_hit()?;
            return Ok(false);
        }
        self.flush()?;
        info!("Recorded {}", summary);
        Ok(true)
    }

    fn replace(&mut self, record: DnaRecord) -> Result<(), StoreError> {
        let summary = record.summary();
        self.records.insert(record.dna_hash.clone(), record);
        self.flush()?;
        info!("Replaced {}", summary);
        Ok(())
    }

    fn record_duplicate_hit(&mut self) -> Result<(), StoreError> {
        self.metadata.duplicate_hits += 1;
        self.flush()
    }

    fn duplicate_hits(&self) -> u64 {
        self.metadata.duplicate_hits
    }

    fn count_by_verdict(&self, is_mutant: bool) -> u64 {
        super::count_by_verdict(&self.records, is_mutant)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
