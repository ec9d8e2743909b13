//! In-process ledger.

use super::types::PenaltyLedger;
use crate::error::{Result, ScoringError};
use crate::session::PenaltyKey;
use crate::types::{PerformanceId, SessionType};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use tracing::info;

type Rows = HashMap<(PerformanceId, SessionType), BTreeMap<PenaltyKey, bool>>;

/// [`PenaltyLedger`] held in memory behind a lock.
///
/// Concurrent writes to one key are serialized by the lock; the last
/// write wins.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    rows: RwLock<Rows>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored overrides across all sessions.
    pub fn len(&self) -> Result<usize> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().map(BTreeMap::len).sum())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(_: T) -> ScoringError {
    ScoringError::Storage("penalty ledger lock poisoned".into())
}

impl PenaltyLedger for InMemoryLedger {
    fn load_overrides(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<BTreeMap<PenaltyKey, bool>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(&(performance, session)).cloned().unwrap_or_default())
    }

    fn upsert_override(
        &self,
        performance: PerformanceId,
        session: SessionType,
        key: PenaltyKey,
        validated: bool,
    ) -> Result<()> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        info!(
            performance = %performance,
            session = %session,
            key = %key,
            validated,
            "penalty override recorded"
        );
        rows.entry((performance, session))
            .or_default()
            .insert(key, validated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    const PERF: PerformanceId = PerformanceId(1);

    #[test]
    fn test_empty_ledger() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.is_empty().unwrap());
        assert!(ledger
            .load_overrides(PERF, SessionType::Technical)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_upsert_is_idempotent_and_flips() {
        let ledger = InMemoryLedger::new();
        let key = PenaltyKey::global("g1_retard");
        ledger.upsert_override(PERF, SessionType::Technical, key.clone(), true).unwrap();
        ledger.upsert_override(PERF, SessionType::Technical, key.clone(), true).unwrap();
        assert_eq!(ledger.len().unwrap(), 1);

        ledger.upsert_override(PERF, SessionType::Technical, key.clone(), false).unwrap();
        let rows = ledger.load_overrides(PERF, SessionType::Technical).unwrap();
        assert_eq!(rows.get(&key), Some(&false));
    }

    #[test]
    fn test_sessions_are_separate() {
        let ledger = InMemoryLedger::new();
        let key = PenaltyKey::action(2, "g1_sortie");
        ledger.upsert_override(PERF, SessionType::Free, key.clone(), true).unwrap();
        assert!(ledger.load_overrides(PERF, SessionType::Technical).unwrap().is_empty());
        assert!(ledger.load_overrides(PerformanceId(2), SessionType::Free).unwrap().is_empty());
        assert!(ledger.load_overrides(PERF, SessionType::Free).unwrap()[&key]);
    }

    #[test]
    fn test_poisoned_lock_is_storage_error() {
        let ledger = Arc::new(InMemoryLedger::new());
        let poisoner = Arc::clone(&ledger);
        let _ = thread::spawn(move || {
            let _guard = poisoner.rows.write().unwrap();
            panic!("poison the ledger lock");
        })
        .join();

        assert!(matches!(ledger.len(), Err(ScoringError::Storage(_))));
        assert!(matches!(ledger.is_empty(), Err(ScoringError::Storage(_))));
        assert!(matches!(
            ledger.load_overrides(PERF, SessionType::Technical),
            Err(ScoringError::Storage(_))
        ));
    }

    #[test]
    fn test_concurrent_writers() {
        let ledger = Arc::new(InMemoryLedger::new());
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let key = PenaltyKey::action(i + 1, "g1_sortie");
                    ledger.upsert_override(PERF, SessionType::Technical, key, i % 2 == 0)
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }
        assert_eq!(ledger.len().unwrap(), 8);
    }
}
