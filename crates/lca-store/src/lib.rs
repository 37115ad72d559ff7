//! Process-lifetime store for analysis history
//!
//! Records are kept in append order behind a mutex so the store can be shared
//! between worker threads. Nothing is written to disk; the history is gone when
//! the process exits.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lca_domain::model::{AnalysisRecord, HistoryStats};
use lca_domain::repository::AnalysisHistoryRepository;
use lca_types::Result;
use tracing::debug;

/// Append-only analysis history
#[derive(Debug, Default)]
pub struct HistoryStore {
    entries: Mutex<Vec<AnalysisRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-pushed Vec behind,
    // so a poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<AnalysisRecord>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a record after the last one
    pub fn add_analysis(&self, record: AnalysisRecord) {
        let mut entries = self.lock();
        entries.push(record);
        debug!(count = entries.len(), "history entry appended");
    }

    /// All records in append order
    pub fn all_entries(&self) -> Vec<AnalysisRecord> {
        self.lock().clone()
    }

    /// Up to `limit` records, newest first
    pub fn recent(&self, limit: usize) -> Vec<AnalysisRecord> {
        self.lock().iter().rev().take(limit).cloned().collect()
    }

    /// Get total entry count
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Aggregate statistics over all records
    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_records(&self.lock())
    }
}

impl AnalysisHistoryRepository for HistoryStore {
    fn append(&self, record: AnalysisRecord) -> Result<()> {
        self.add_analysis(record);
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<AnalysisRecord>> {
        Ok(self.all_entries())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use lca_domain::model::{MaterialId, Metal, Variant};
    use std::sync::Arc;
    use std::thread;
    use uuid::Uuid;

    fn record(metal: Metal, variant: Variant, quantity: f64, score: u8) -> AnalysisRecord {
        let id = MaterialId::new(metal, variant);
        AnalysisRecord {
            id: Uuid::new_v4(),
            material_id: id,
            material_name: id.display_name(),
            quantity,
            overall_score: score,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_order() {
        let store = HistoryStore::new();
        assert!(store.is_empty());

        store.append(record(Metal::Steel, Variant::Virgin, 1.0, 75)).unwrap();
        store.append(record(Metal::Gold, Variant::Recycled, 2.0, 95)).unwrap();
        store.append(record(Metal::Tin, Variant::Virgin, 3.0, 62)).unwrap();

        let names: Vec<_> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|r| r.material_name)
            .collect();
        assert_eq!(names, ["Steel Virgin", "Gold Recycled", "Tin Virgin"]);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_recent_newest_first() {
        let store = HistoryStore::new();
        for q in 1..=5 {
            store.add_analysis(record(Metal::Zinc, Variant::Recycled, q as f64, 88));
        }

        let recent: Vec<_> = store.recent(2).into_iter().map(|r| r.quantity).collect();
        assert_eq!(recent, [5.0, 4.0]);
        assert_eq!(store.recent(10).len(), 5);
    }

    #[test]
    fn test_stats() {
        let store = HistoryStore::new();
        store.add_analysis(record(Metal::Aluminum, Variant::Recycled, 10.0, 92));
        store.add_analysis(record(Metal::Aluminum, Variant::Virgin, 10.0, 45));

        let stats = store.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.good_count, 1);
        assert_eq!(stats.bad_count, 1);
        assert!((stats.mean_score - 68.5).abs() < 1e-9);
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let store = Arc::new(HistoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.append(record(Metal::Lead, Variant::Virgin, 1.0, 58)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
    }
}
