//! Scoring facade.

use super::source::EvaluationSource;
use crate::catalog::RuleCatalog;
use crate::compose::{FinalComposer, FinalResult, SessionFinal};
use crate::error::{Result, ScoringError};
use crate::judge::{JudgeCalculator, JudgeEvaluation, PerJudgeResult, ScoringConfig};
use crate::ledger::{merge_effective, PenaltyLedger};
use crate::session::{PenaltyKey, SessionAggregate, SessionAggregator};
use crate::types::{PerformanceId, SessionType};
use std::collections::BTreeMap;
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Answers every scoring query over an evaluation source and a penalty
/// ledger.
///
/// Nothing derived is cached: each call recomputes from the stored
/// evaluations and overrides, so a resubmission or a new override is
/// visible to the next query.
///
/// # Usage
///
/// ```
/// use combat_score::catalog::{Difficulty, RuleCatalog};
/// use combat_score::engine::{InMemoryEvaluationStore, ScoringEngine};
/// use combat_score::judge::{JudgeEvaluation, Phrase};
/// use combat_score::ledger::InMemoryLedger;
/// use combat_score::types::{JudgeId, OverallScore, PerformanceId, SessionType};
///
/// let engine = ScoringEngine::standard(InMemoryEvaluationStore::new(), InMemoryLedger::new()).unwrap();
/// let perf = PerformanceId(7);
///
/// engine.source().submit(
///     JudgeEvaluation::new(perf, JudgeId(1), SessionType::Technical, "T1_DUEL")
///         .with_phrase(Phrase::new(Difficulty::Simple, 4.0)),
/// ).unwrap();
///
/// let result = engine.compute_final_result(perf).unwrap();
/// assert_eq!(result.overall, OverallScore::Incomplete);
/// ```
pub struct ScoringEngine<S, L> {
    catalog: RuleCatalog,
    config: ScoringConfig,
    source: S,
    ledger: L,
}

impl<S: EvaluationSource, L: PenaltyLedger> ScoringEngine<S, L> {
    /// Creates an engine.
    ///
    /// # Errors
    /// `InvalidConfig` when the config fails validation, `UnknownCriterion`
    /// when it names a criterion the catalog does not define.
    pub fn new(catalog: RuleCatalog, config: ScoringConfig, source: S, ledger: L) -> Result<Self> {
        config.validate().map_err(ScoringError::InvalidConfig)?;
        for id in &config.artistic_criteria {
            catalog.criterion(id)?;
        }
        Ok(Self {
            catalog,
            config,
            source,
            ledger,
        })
    }

    /// Engine over the standard catalog and default configuration.
    pub fn standard(source: S, ledger: L) -> Result<Self> {
        Self::new(RuleCatalog::standard(), ScoringConfig::default(), source, ledger)
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// One judge's derived scores.
    pub fn compute_per_judge_result(&self, evaluation: &JudgeEvaluation) -> Result<PerJudgeResult> {
        JudgeCalculator::compute(evaluation, &self.catalog, &self.config)
    }

    /// Session mean and majority map of one session.
    pub fn compute_session_aggregate(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<SessionAggregate> {
        let evaluations = self.source.load_judge_evaluations(performance)?;
        self.aggregate(performance, session, &evaluations)
    }

    /// Effective state of every known key: overrides over majority defaults.
    pub fn effective_penalties(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<BTreeMap<PenaltyKey, bool>> {
        let aggregate = self.compute_session_aggregate(performance, session)?;
        let overrides = self.ledger.load_overrides(performance, session)?;
        Ok(merge_effective(&overrides, &aggregate.majority))
    }

    /// Effective state of one key; false for a key nobody flagged.
    pub fn effective_penalty(
        &self,
        performance: PerformanceId,
        session: SessionType,
        key: &PenaltyKey,
    ) -> Result<bool> {
        Ok(self
            .effective_penalties(performance, session)?
            .get(key)
            .copied()
            .unwrap_or(false))
    }

    /// Records the adjudicator's decision for one key.
    ///
    /// # Errors
    /// `UnknownPenalty` or `ScopeMismatch` when the key does not name a
    /// catalog penalty of the matching scope; storage failures otherwise.
    pub fn upsert_override(
        &self,
        performance: PerformanceId,
        session: SessionType,
        key: PenaltyKey,
        validated: bool,
    ) -> Result<()> {
        self.catalog.scoped_penalty(key.penalty_id(), key.scope())?;
        self.ledger.upsert_override(performance, session, key, validated)
    }

    /// Persists the whole effective map as explicit overrides and returns it.
    ///
    /// Later changes in judges' evaluations no longer move a confirmed
    /// key's state. Every key is checked against the catalog before the
    /// first write, so a failed confirmation writes nothing.
    pub fn confirm_session(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<BTreeMap<PenaltyKey, bool>> {
        let effective = self.effective_penalties(performance, session)?;
        for key in effective.keys() {
            self.catalog.scoped_penalty(key.penalty_id(), key.scope())?;
        }
        for (key, &validated) in &effective {
            self.ledger
                .upsert_override(performance, session, key.clone(), validated)?;
        }
        info!(
            performance = %performance,
            session = %session,
            keys = effective.len(),
            "session confirmed"
        );
        Ok(effective)
    }

    /// Final result of one performance.
    pub fn compute_final_result(&self, performance: PerformanceId) -> Result<FinalResult> {
        let evaluations = self.source.load_judge_evaluations(performance)?;
        let technical = self.session_final(performance, SessionType::Technical, &evaluations)?;
        let free = self.session_final(performance, SessionType::Free, &evaluations)?;
        Ok(FinalComposer::compose(performance, technical, free))
    }

    /// Final results of several performances, in input order.
    ///
    /// One performance failing does not affect the others.
    pub fn compute_final_results(&self, performances: &[PerformanceId]) -> Vec<Result<FinalResult>> {
        #[cfg(feature = "parallel")]
        {
            performances
                .par_iter()
                .map(|&p| self.compute_final_result(p))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            performances
                .iter()
                .map(|&p| self.compute_final_result(p))
                .collect()
        }
    }

    fn aggregate(
        &self,
        performance: PerformanceId,
        session: SessionType,
        evaluations: &[JudgeEvaluation],
    ) -> Result<SessionAggregate> {
        SessionAggregator::aggregate(performance, session, evaluations, &self.catalog, &self.config)
    }

    fn session_final(
        &self,
        performance: PerformanceId,
        session: SessionType,
        evaluations: &[JudgeEvaluation],
    ) -> Result<SessionFinal> {
        let aggregate = self.aggregate(performance, session, evaluations)?;
        let overrides = self.ledger.load_overrides(performance, session)?;
        let effective = merge_effective(&overrides, &aggregate.majority);
        FinalComposer::compose_session(session, aggregate.mean, &effective, &self.catalog)
    }
}
