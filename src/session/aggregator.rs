//! Session aggregation and majority voting.

use super::types::{MajorityVote, PenaltyKey, SessionAggregate};
use crate::catalog::RuleCatalog;
use crate::error::Result;
use crate::judge::{JudgeCalculator, JudgeEvaluation, PerJudgeResult, ScoringConfig};
use crate::types::{JudgeId, PerformanceId, SessionScore, SessionType};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Combines every judge's evaluation for one session.
///
/// Evaluations for other performances or sessions are ignored, so the
/// full list loaded for a performance can be passed as is. There is no
/// minimum number of judges: the aggregate covers whatever exists.
pub struct SessionAggregator;

impl SessionAggregator {
    /// Aggregates one session.
    ///
    /// When a judge appears more than once, the last evaluation wins.
    pub fn aggregate(
        performance: PerformanceId,
        session: SessionType,
        evaluations: &[JudgeEvaluation],
        catalog: &RuleCatalog,
        config: &ScoringConfig,
    ) -> Result<SessionAggregate> {
        let mut by_judge: BTreeMap<JudgeId, &JudgeEvaluation> = BTreeMap::new();
        for evaluation in evaluations
            .iter()
            .filter(|e| e.performance_id == performance && e.session == session)
        {
            if by_judge.insert(evaluation.judge_id, evaluation).is_some() {
                warn!(
                    performance = %performance,
                    session = %session,
                    judge = %evaluation.judge_id,
                    "duplicate evaluation, keeping the latest"
                );
            }
        }
        let sheets: Vec<&JudgeEvaluation> = by_judge.into_values().collect();

        let judges = sheets
            .iter()
            .map(|e| JudgeCalculator::compute(e, catalog, config))
            .collect::<Result<Vec<_>>>()?;

        let mean = session_mean(&judges);
        let majority = majority_votes(&sheets, catalog);

        debug!(
            performance = %performance,
            session = %session,
            judges = judges.len(),
            ?mean,
            flagged = majority.values().filter(|v| v.majority).count(),
            "aggregated session"
        );

        Ok(SessionAggregate {
            performance_id: performance,
            session,
            judges,
            mean,
            majority,
        })
    }
}

/// Mean of the non-disqualified contributions.
///
/// `Disqualified` only when every judge is disqualified; `None` when no
/// judge contributes a value.
fn session_mean(judges: &[PerJudgeResult]) -> Option<SessionScore> {
    if judges.is_empty() {
        return None;
    }
    if judges.iter().all(|j| j.disqualified) {
        return Some(SessionScore::Disqualified);
    }
    let values: Vec<f64> = judges.iter().filter_map(|j| j.session_contribution()).collect();
    if values.is_empty() {
        return None;
    }
    Some(SessionScore::Scored(values.iter().sum::<f64>() / values.len() as f64))
}

fn majority_votes(
    sheets: &[&JudgeEvaluation],
    catalog: &RuleCatalog,
) -> BTreeMap<PenaltyKey, MajorityVote> {
    let total = sheets.len();
    let mut votes: BTreeMap<PenaltyKey, usize> = BTreeMap::new();

    for def in catalog.contested_global_penalties() {
        let flagged = sheets.iter().filter(|e| e.manual_count(def.id) > 0).count();
        votes.insert(PenaltyKey::global(def.id), flagged);
    }

    // A judge votes once per (action, penalty), whatever the count.
    // Judges with fewer phrases simply cast no vote for later actions.
    for sheet in sheets {
        let flagged: BTreeSet<PenaltyKey> = sheet
            .phrases
            .iter()
            .enumerate()
            .flat_map(|(idx, phrase)| {
                phrase
                    .action_penalties
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(move |(id, _)| PenaltyKey::action(idx as u32 + 1, id.as_str()))
            })
            .collect();
        for key in flagged {
            *votes.entry(key).or_insert(0) += 1;
        }
    }

    votes
        .into_iter()
        .map(|(key, flagged)| (key, MajorityVote::new(flagged, total)))
        .collect()
}
