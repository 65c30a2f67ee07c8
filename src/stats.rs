//! Verdict statistics — counts and mutant/human ratio over a store

use crate::storage::VerdictStore;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub count_mutant_dna: u64,
    pub count_human_dna: u64,
    pub ratio: f64,
}

/// Aggregate the verdicts currently held by `store`
pub fn stats<S: VerdictStore + ?Sized>(store: &S) -> StatsResponse {
    let count_mutant_dna = store.count_by_verdict(true);
    let count_human_dna = store.count_by_verdict(false);
    let ratio = ratio(count_mutant_dna, count_human_dna);

    debug!(
        "Stats - mutants: {}, humans: {}, ratio: {}",
        count_mutant_dna, count_human_dna, ratio
    );

    StatsResponse { count_mutant_dna, count_human_dna, ratio }
}

/// Mutants per human. With no humans the ratio is the mutant count itself.
pub fn ratio(mutants: u64, humans: u64) -> f64 {
    if humans == 0 {
        return mutants as f64;
    }
    mutants as f64 / humans as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::validate;
    use crate::storage::{DnaRecord, MemoryStore};

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(40, 100), 0.4);
        assert_eq!(ratio(0, 5), 0.0);
        assert_eq!(ratio(3, 0), 3.0);
        assert_eq!(ratio(0, 0), 0.0);
    }

    #[test]
    fn test_empty_store() {
        let stats = stats(&MemoryStore::new());
        assert_eq!(stats, StatsResponse { count_mutant_dna: 0, count_human_dna: 0, ratio: 0.0 });
    }

    #[test]
    fn test_stats_from_store() {
        let mut store = MemoryStore::new();
        store.save(DnaRecord::new(&validate(&["AAAA", "CCCC", "GTGT", "TGTG"]).unwrap(), true)).unwrap();
        store.save(DnaRecord::new(&validate(&["ATGC", "CAGT", "TTAT", "AGAA"]).unwrap(), false)).unwrap();
        store.save(DnaRecord::new(&validate(&["ACGT", "CATG", "GTCA", "TGAC"]).unwrap(), false)).unwrap();
        let stats = stats(&store);
        assert_eq!(stats.count_mutant_dna, 1);
        assert_eq!(stats.count_human_dna, 2);
        assert_eq!(stats.ratio, 0.5);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(StatsResponse { count_mutant_dna: 40, count_human_dna: 100, ratio: 0.4 }).unwrap();
        assert_eq!(json["count_mutant_dna"], 40);
        assert_eq!(json["count_human_dna"], 100);
        assert_eq!(json["ratio"], 0.4);
    }
}
