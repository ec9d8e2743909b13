//! Final score composition.

use super::types::{FinalResult, SessionFinal};
use crate::catalog::RuleCatalog;
use crate::error::Result;
use crate::session::PenaltyKey;
use crate::types::{OverallScore, PerformanceId, SessionScore, SessionType};
use std::collections::BTreeMap;
use tracing::info;

/// Applies adjudicated penalties to session means and combines sessions.
///
/// # Usage
///
/// ```
/// use std::collections::BTreeMap;
/// use combat_score::catalog::RuleCatalog;
/// use combat_score::compose::FinalComposer;
/// use combat_score::session::PenaltyKey;
/// use combat_score::types::{OverallScore, PerformanceId, SessionScore, SessionType};
///
/// let catalog = RuleCatalog::standard();
/// let technical = FinalComposer::compose_session(
///     SessionType::Technical,
///     Some(SessionScore::Scored(8.0)),
///     &BTreeMap::from([(PenaltyKey::global("g2_reglement"), true)]),
///     &catalog,
/// ).unwrap();
/// let free = FinalComposer::compose_session(
///     SessionType::Free,
///     Some(SessionScore::Scored(6.0)),
///     &BTreeMap::new(),
///     &catalog,
/// ).unwrap();
///
/// let result = FinalComposer::compose(PerformanceId(1), technical, free);
/// assert_eq!(result.overall, OverallScore::Scored(6.75));
/// ```
pub struct FinalComposer;

impl FinalComposer {
    /// Deducts every validated penalty once from the session mean.
    ///
    /// An action key deducts its point value once, however many judges
    /// or occurrences reported it. A validated disqualifying penalty
    /// disqualifies the session even when no judge has scored it.
    ///
    /// # Errors
    /// A validated key naming an unknown penalty, or a penalty whose
    /// scope does not match the key kind.
    pub fn compose_session(
        session: SessionType,
        mean: Option<SessionScore>,
        effective: &BTreeMap<PenaltyKey, bool>,
        catalog: &RuleCatalog,
    ) -> Result<SessionFinal> {
        let mut deduction = 0.0;
        let mut disqualified = false;
        let mut validated = Vec::new();

        for (key, _) in effective.iter().filter(|(_, on)| **on) {
            let def = catalog.scoped_penalty(key.penalty_id(), key.scope())?;
            match def.value.points() {
                Some(points) => deduction += points,
                None => disqualified = true,
            }
            validated.push(key.clone());
        }

        let score = if disqualified {
            Some(SessionScore::Disqualified)
        } else {
            mean.map(|m| match m {
                SessionScore::Scored(v) => SessionScore::Scored(v - deduction),
                SessionScore::Disqualified => SessionScore::Disqualified,
            })
        };

        Ok(SessionFinal {
            session,
            mean,
            deduction,
            validated,
            score,
        })
    }

    /// Combines both sessions into the final result.
    pub fn compose(
        performance: PerformanceId,
        technical: SessionFinal,
        free: SessionFinal,
    ) -> FinalResult {
        let overall = Self::overall(technical.score, free.score);
        info!(
            performance = %performance,
            technical = ?technical.score,
            free = ?free.score,
            ?overall,
            "final result composed"
        );
        FinalResult {
            performance_id: performance,
            technical,
            free,
            overall,
        }
    }

    /// Disqualification wins over missing data; the mean needs both sessions.
    pub fn overall(technical: Option<SessionScore>, free: Option<SessionScore>) -> OverallScore {
        use SessionScore::{Disqualified, Scored};
        match (technical, free) {
            (Some(Disqualified), _) | (_, Some(Disqualified)) => OverallScore::Disqualified,
            (Some(Scored(t)), Some(Scored(f))) => OverallScore::Scored((t + f) / 2.0),
            _ => OverallScore::Incomplete,
        }
    }
}
