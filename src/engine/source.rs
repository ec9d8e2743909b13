//! Evaluation storage contract.

use crate::error::{Result, ScoringError};
use crate::judge::JudgeEvaluation;
use crate::types::{JudgeId, PerformanceId, SessionType};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Read access to submitted evaluations.
pub trait EvaluationSource: Send + Sync {
    /// Every submitted evaluation of a performance, one per judge and session.
    fn load_judge_evaluations(&self, performance: PerformanceId) -> Result<Vec<JudgeEvaluation>>;
}

impl<S: EvaluationSource + ?Sized> EvaluationSource for Arc<S> {
    fn load_judge_evaluations(&self, performance: PerformanceId) -> Result<Vec<JudgeEvaluation>> {
        (**self).load_judge_evaluations(performance)
    }
}

type SheetKey = (PerformanceId, JudgeId, SessionType);

/// [`EvaluationSource`] held in memory.
///
/// Keyed by (performance, judge, session): submitting again for the same
/// triple replaces the earlier evaluation.
#[derive(Debug, Default)]
pub struct InMemoryEvaluationStore {
    sheets: RwLock<BTreeMap<SheetKey, JudgeEvaluation>>,
}

fn poisoned<T>(_: T) -> ScoringError {
    ScoringError::Storage("evaluation store lock poisoned".into())
}

impl InMemoryEvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an evaluation, returning the one it replaced.
    pub fn submit(&self, evaluation: JudgeEvaluation) -> Result<Option<JudgeEvaluation>> {
        let key = (evaluation.performance_id, evaluation.judge_id, evaluation.session);
        let mut sheets = self.sheets.write().map_err(poisoned)?;
        let previous = sheets.insert(key, evaluation);
        if previous.is_some() {
            info!(
                performance = %key.0,
                judge = %key.1,
                session = %key.2,
                "evaluation resubmitted"
            );
        } else {
            debug!(performance = %key.0, judge = %key.1, session = %key.2, "evaluation submitted");
        }
        Ok(previous)
    }
}

impl EvaluationSource for InMemoryEvaluationStore {
    fn load_judge_evaluations(&self, performance: PerformanceId) -> Result<Vec<JudgeEvaluation>> {
        let sheets = self.sheets.read().map_err(poisoned)?;
        let first = (performance, JudgeId(u64::MIN), SessionType::Technical);
        let last = (performance, JudgeId(u64::MAX), SessionType::Free);
        Ok(sheets.range(first..=last).map(|(_, e)| e.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(perf: u64, judge: u64, session: SessionType) -> JudgeEvaluation {
        JudgeEvaluation::new(PerformanceId(perf), JudgeId(judge), session, "T1_DUEL")
    }

    #[test]
    fn test_resubmission_replaces() {
        let store = InMemoryEvaluationStore::new();
        assert!(store.submit(sheet(1, 1, SessionType::Technical)).unwrap().is_none());
        let again = sheet(1, 1, SessionType::Technical).with_global_penalty("g1_retard", 1);
        assert!(store.submit(again).unwrap().is_some());

        let loaded = store.load_judge_evaluations(PerformanceId(1)).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].manual_count("g1_retard"), 1);
    }

    #[test]
    fn test_load_is_per_performance() {
        let store = InMemoryEvaluationStore::new();
        store.submit(sheet(1, 1, SessionType::Technical)).unwrap();
        store.submit(sheet(1, 1, SessionType::Free)).unwrap();
        store.submit(sheet(1, 2, SessionType::Technical)).unwrap();
        store.submit(sheet(2, 1, SessionType::Technical)).unwrap();

        assert_eq!(store.load_judge_evaluations(PerformanceId(1)).unwrap().len(), 3);
        assert_eq!(store.load_judge_evaluations(PerformanceId(2)).unwrap().len(), 1);
        assert!(store.load_judge_evaluations(PerformanceId(3)).unwrap().is_empty());
    }
}
