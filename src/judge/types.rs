//! Judge inputs and the derived per-judge result.

use crate::catalog::{parse_mmss, Difficulty};
use crate::types::{JudgeId, PerformanceId, SessionScore, SessionType};
use std::collections::BTreeMap;

/// A mark on the /5 scale, clamped into `[0, 5]` when written.
///
/// The inner value is only reachable through [`Note::new`], so every
/// write path clamps. `NaN` is stored as `0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct Note(f64);

impl Note {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Note(0.0)
        } else {
            Note(value.clamp(0.0, Self::MAX))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Note {
    fn from(value: f64) -> Self {
        Note::new(value)
    }
}

impl From<Note> for f64 {
    fn from(note: Note) -> Self {
        note.0
    }
}

/// One scored action unit. Its 1-based position in the evaluation is
/// the action number used for cross-judge reconciliation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phrase {
    pub difficulty: Difficulty,

    pub note: Note,

    /// Action-scoped penalty id → occurrence count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_penalties: BTreeMap<String, u32>,
}

impl Phrase {
    pub fn new(difficulty: Difficulty, note: f64) -> Self {
        Self {
            difficulty,
            note: Note::new(note),
            action_penalties: BTreeMap::new(),
        }
    }

    pub fn with_action_penalty(mut self, id: impl Into<String>, count: u32) -> Self {
        self.set_action_penalty(id, count);
        self
    }

    pub fn set_note(&mut self, note: f64) {
        self.note = Note::new(note);
    }

    /// Sets an occurrence count; zero removes the entry.
    pub fn set_action_penalty(&mut self, id: impl Into<String>, count: u32) {
        let id = id.into();
        if count == 0 {
            self.action_penalties.remove(&id);
        } else {
            self.action_penalties.insert(id, count);
        }
    }

    /// Adds `delta` occurrences, saturating at zero.
    pub fn adjust_action_penalty(&mut self, id: &str, delta: i32) {
        let current = self.action_penalty_count(id);
        let next = current.saturating_add_signed(delta);
        self.set_action_penalty(id, next);
    }

    pub fn action_penalty_count(&self, id: &str) -> u32 {
        self.action_penalties.get(id).copied().unwrap_or(0)
    }
}

/// One judge's submission for one session of one performance.
///
/// At most one exists per (performance, judge, session); a resubmission
/// replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgeEvaluation {
    pub performance_id: PerformanceId,

    pub judge_id: JudgeId,

    pub session: SessionType,

    /// Category code such as `T1_DUEL`; selects the timing mode.
    pub category: String,

    pub phrases: Vec<Phrase>,

    /// Global penalty id → manual occurrence count.
    #[cfg_attr(feature = "serde", serde(default))]
    pub global_penalties: BTreeMap<String, u32>,

    /// Planned performance duration in seconds, `None` when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub planned_duration: Option<u32>,

    /// Effective combat duration in seconds, `None` when unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat_duration: Option<u32>,

    /// Artistic criterion id → score. Only read for Free sessions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artistic_scores: BTreeMap<String, Note>,
}

impl JudgeEvaluation {
    pub fn new(
        performance_id: PerformanceId,
        judge_id: JudgeId,
        session: SessionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            performance_id,
            judge_id,
            session,
            category: category.into(),
            phrases: Vec::new(),
            global_penalties: BTreeMap::new(),
            planned_duration: None,
            combat_duration: None,
            artistic_scores: BTreeMap::new(),
        }
    }

    pub fn with_phrase(mut self, phrase: Phrase) -> Self {
        self.phrases.push(phrase);
        self
    }

    pub fn with_global_penalty(mut self, id: impl Into<String>, count: u32) -> Self {
        self.global_penalties.insert(id.into(), count);
        self
    }

    /// Sets both durations from `mm:ss` text. Unparseable text leaves the
    /// field unknown.
    pub fn with_timing(mut self, planned: &str, combat: &str) -> Self {
        self.planned_duration = parse_mmss(planned);
        self.combat_duration = parse_mmss(combat);
        self
    }

    pub fn with_durations(mut self, planned: Option<u32>, combat: Option<u32>) -> Self {
        self.planned_duration = planned;
        self.combat_duration = combat;
        self
    }

    pub fn with_artistic_score(mut self, id: impl Into<String>, score: f64) -> Self {
        self.artistic_scores.insert(id.into(), Note::new(score));
        self
    }

    pub fn manual_count(&self, id: &str) -> u32 {
        self.global_penalties.get(id).copied().unwrap_or(0)
    }
}

/// Plain mean note per difficulty level, 0 for an unused level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyMeans {
    pub simple: f64,
    pub complex: f64,
    pub advanced: f64,
}

impl DifficultyMeans {
    pub fn get(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Simple => self.simple,
            Difficulty::Complex => self.complex,
            Difficulty::Advanced => self.advanced,
        }
    }
}

/// Derived scores for one judge's evaluation. Never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerJudgeResult {
    pub performance_id: PerformanceId,

    pub judge_id: JudgeId,

    pub session: SessionType,

    pub difficulty_means: DifficultyMeans,

    /// Σ(note × coefficient) / phrase count, or 0 without phrases.
    pub weighted_mean: f64,

    /// `weighted_mean × 2`. May exceed 10 with hard phrases.
    pub technical_score: f64,

    /// Occurrences added to the insufficient-combat-time penalty.
    pub auto_combat_penalties: u32,

    /// Occurrences added to the performance-time penalty.
    pub auto_performance_penalties: u32,

    /// Global penalty id → manual + automatic occurrences.
    pub penalty_counts: BTreeMap<String, u32>,

    /// Points from Global, non-disqualifying penalties.
    pub penalty_total: f64,

    /// Free sessions only.
    pub artistic_mean: Option<f64>,

    /// Free sessions only: `technical_score × artistic_mean / 5`.
    pub libre_score: Option<f64>,

    pub disqualified: bool,
}

impl PerJudgeResult {
    /// Raw technical score, or `Disqualified`.
    pub fn technical_mark(&self) -> SessionScore {
        if self.disqualified {
            SessionScore::Disqualified
        } else {
            SessionScore::Scored(self.technical_score)
        }
    }

    /// The judge's own final: technical score minus their penalty total.
    ///
    /// Display value for the per-judge detail view; session means use
    /// [`session_contribution`](Self::session_contribution).
    pub fn judge_score(&self) -> SessionScore {
        if self.disqualified {
            SessionScore::Disqualified
        } else {
            SessionScore::Scored(self.technical_score - self.penalty_total)
        }
    }

    /// Value averaged into the session mean, `None` when excluded.
    pub fn session_contribution(&self) -> Option<f64> {
        if self.disqualified {
            return None;
        }
        match self.session {
            SessionType::Technical => Some(self.technical_score),
            SessionType::Free => self.libre_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_clamps_on_write() {
        assert_eq!(Note::new(7.5).get(), 5.0);
        assert_eq!(Note::new(-2.0).get(), 0.0);
        assert_eq!(Note::new(f64::NAN).get(), 0.0);
        assert_eq!(Note::new(f64::INFINITY).get(), 5.0);
        assert_eq!(Note::new(3.5).get(), 3.5);
    }

    #[test]
    fn test_phrase_set_note_clamps() {
        let mut p = Phrase::new(Difficulty::Simple, 9.0);
        assert_eq!(p.note.get(), 5.0);
        p.set_note(-1.0);
        assert_eq!(p.note.get(), 0.0);
    }

    #[test]
    fn test_adjust_action_penalty_saturates() {
        let mut p = Phrase::new(Difficulty::Complex, 3.0);
        p.adjust_action_penalty("g1_sortie", 2);
        assert_eq!(p.action_penalty_count("g1_sortie"), 2);
        p.adjust_action_penalty("g1_sortie", -5);
        assert_eq!(p.action_penalty_count("g1_sortie"), 0);
        assert!(p.action_penalties.is_empty());
    }

    #[test]
    fn test_with_timing_unknown_on_bad_text() {
        let e = JudgeEvaluation::new(PerformanceId(1), JudgeId(1), SessionType::Technical, "T1_DUEL")
            .with_timing("3:10", "1h30");
        assert_eq!(e.planned_duration, Some(190));
        assert_eq!(e.combat_duration, None);
    }
}
