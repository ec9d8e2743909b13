//! Per-judge score computation.
//!
//! [`JudgeCalculator`] turns one [`JudgeEvaluation`] into a
//! [`PerJudgeResult`]:
//! weighted mean → /10 score → timing penalties → penalty total →
//! disqualification → artistic composition (Free sessions).

use super::config::{BlankCriterionPolicy, ScoringConfig};
use super::types::{DifficultyMeans, JudgeEvaluation, Note, PerJudgeResult, Phrase};
use crate::catalog::{
    Difficulty, PenaltyScope, RuleCatalog, TimeThresholds, COMBAT_TIME_PENALTY,
    PERFORMANCE_TIME_PENALTY,
};
use crate::error::Result;
use crate::types::SessionType;
use std::collections::BTreeMap;
use tracing::debug;

/// Computes per-judge results. Pure: identical inputs give identical output.
///
/// # Usage
///
/// ```
/// use combat_score::catalog::{Difficulty, RuleCatalog};
/// use combat_score::judge::{JudgeCalculator, JudgeEvaluation, Phrase, ScoringConfig};
/// use combat_score::types::{JudgeId, PerformanceId, SessionType};
///
/// let evaluation = JudgeEvaluation::new(PerformanceId(1), JudgeId(7), SessionType::Technical, "T1_DUEL")
///     .with_phrase(Phrase::new(Difficulty::Simple, 4.0))
///     .with_phrase(Phrase::new(Difficulty::Advanced, 5.0));
///
/// let result = JudgeCalculator::compute(&evaluation, &RuleCatalog::standard(), &ScoringConfig::default())
///     .unwrap();
/// assert!((result.technical_score - 10.0).abs() < 1e-10);
/// ```
pub struct JudgeCalculator;

impl JudgeCalculator {
    /// Computes one judge's result.
    ///
    /// # Errors
    /// Fails only on catalog references that do not resolve: unknown
    /// category, penalty or artistic criterion, or a penalty used with
    /// the wrong scope.
    pub fn compute(
        evaluation: &JudgeEvaluation,
        catalog: &RuleCatalog,
        config: &ScoringConfig,
    ) -> Result<PerJudgeResult> {
        let mode = catalog.mode_of(&evaluation.category)?;
        let thresholds = catalog.time_thresholds(mode);

        for phrase in &evaluation.phrases {
            for id in phrase.action_penalties.keys() {
                catalog.scoped_penalty(id, PenaltyScope::Action)?;
            }
        }

        // 1. Weighted mean
        let weighted_mean = weighted_mean(&evaluation.phrases, catalog);
        let technical_score = weighted_mean * 2.0;

        // 2-3. Timing penalties
        let auto_combat_penalties = combat_time_penalties(evaluation.combat_duration, thresholds, config);
        let auto_performance_penalties =
            performance_time_penalties(evaluation.planned_duration, thresholds, config);

        let mut penalty_counts = evaluation.global_penalties.clone();
        if auto_combat_penalties > 0 {
            *penalty_counts.entry(COMBAT_TIME_PENALTY.to_string()).or_insert(0) += auto_combat_penalties;
        }
        if auto_performance_penalties > 0 {
            *penalty_counts
                .entry(PERFORMANCE_TIME_PENALTY.to_string())
                .or_insert(0) += auto_performance_penalties;
        }

        // 4-5. Penalty total and disqualification. Action penalties are
        // adjudicated per session and never deducted here.
        let mut penalty_total = 0.0;
        let mut disqualified = false;
        for (id, &count) in &penalty_counts {
            let def = catalog.scoped_penalty(id, PenaltyScope::Global)?;
            match def.value.points() {
                Some(points) => penalty_total += f64::from(count) * points,
                None => disqualified |= evaluation.manual_count(id) > 0,
            }
        }

        // 6. Artistic composition
        let (artistic_mean, libre_score) = match evaluation.session {
            SessionType::Technical => (None, None),
            SessionType::Free => {
                for id in evaluation.artistic_scores.keys() {
                    catalog.criterion(id)?;
                }
                let mean = artistic_mean(&evaluation.artistic_scores, config);
                (mean, mean.map(|m| technical_score * m / 5.0))
            }
        };

        debug!(
            performance = %evaluation.performance_id,
            judge = %evaluation.judge_id,
            session = %evaluation.session,
            technical_score,
            penalty_total,
            auto_combat_penalties,
            auto_performance_penalties,
            disqualified,
            "computed judge result"
        );

        Ok(PerJudgeResult {
            performance_id: evaluation.performance_id,
            judge_id: evaluation.judge_id,
            session: evaluation.session,
            difficulty_means: difficulty_means(&evaluation.phrases),
            weighted_mean,
            technical_score,
            auto_combat_penalties,
            auto_performance_penalties,
            penalty_counts,
            penalty_total,
            artistic_mean,
            libre_score,
            disqualified,
        })
    }
}

fn weighted_mean(phrases: &[Phrase], catalog: &RuleCatalog) -> f64 {
    if phrases.is_empty() {
        return 0.0;
    }
    let sum: f64 = phrases
        .iter()
        .map(|p| p.note.get() * catalog.coefficient_of(p.difficulty))
        .sum();
    sum / phrases.len() as f64
}

fn difficulty_means(phrases: &[Phrase]) -> DifficultyMeans {
    let mean_of = |level: Difficulty| {
        let notes: Vec<f64> = phrases
            .iter()
            .filter(|p| p.difficulty == level)
            .map(|p| p.note.get())
            .collect();
        if notes.is_empty() {
            0.0
        } else {
            notes.iter().sum::<f64>() / notes.len() as f64
        }
    };
    DifficultyMeans {
        simple: mean_of(Difficulty::Simple),
        complex: mean_of(Difficulty::Complex),
        advanced: mean_of(Difficulty::Advanced),
    }
}

/// One occurrence when combat time is strictly below `min - tolerance`.
pub(crate) fn combat_time_penalties(
    combat_seconds: Option<u32>,
    thresholds: TimeThresholds,
    config: &ScoringConfig,
) -> u32 {
    let Some(combat) = combat_seconds else {
        return 0;
    };
    let limit =
        i64::from(thresholds.min_combat_seconds) - i64::from(config.combat_time_tolerance_seconds);
    u32::from(i64::from(combat) < limit)
}

/// One occurrence once past `planned + grace`, plus one per further
/// started step: `ceil(overage / step)`, so `planned + grace + step`
/// still counts a single occurrence.
pub(crate) fn performance_time_penalties(
    planned_seconds: Option<u32>,
    thresholds: TimeThresholds,
    config: &ScoringConfig,
) -> u32 {
    let Some(duration) = planned_seconds else {
        return 0;
    };
    let limit = thresholds
        .planned_total_seconds
        .saturating_add(config.performance_grace_seconds);
    if duration <= limit {
        return 0;
    }
    let overage = duration - limit;
    1 + (overage - 1) / config.performance_step_seconds.max(1)
}

fn artistic_mean(scores: &BTreeMap<String, Note>, config: &ScoringConfig) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let criteria = &config.artistic_criteria;
    match config.blank_criterion {
        BlankCriterionPolicy::CountAsZero => {
            if criteria.is_empty() {
                return None;
            }
            let sum: f64 = criteria
                .iter()
                .map(|id| scores.get(id).map_or(0.0, |n| n.get()))
                .sum();
            Some(sum / criteria.len() as f64)
        }
        BlankCriterionPolicy::Exclude => {
            let present: Vec<f64> = criteria
                .iter()
                .filter_map(|id| scores.get(id).map(|n| n.get()))
                .collect();
            if present.is_empty() {
                None
            } else {
                Some(present.iter().sum::<f64>() / present.len() as f64)
            }
        }
    }
}
