//! Immutable catalog entries.

use crate::error::{Result, ScoringError};
use std::fmt;

/// Difficulty level of a scored phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Difficulty {
    /// Coefficient 1.0.
    Simple,
    /// Coefficient 1.1.
    Complex,
    /// Coefficient 1.2.
    Advanced,
}

impl Difficulty {
    /// All levels, in increasing difficulty.
    pub const ALL: [Difficulty; 3] = [Difficulty::Simple, Difficulty::Complex, Difficulty::Advanced];

    /// Weight applied to a phrase note of this difficulty.
    pub fn coefficient(self) -> f64 {
        match self {
            Difficulty::Simple => 1.0,
            Difficulty::Complex => 1.1,
            Difficulty::Advanced => 1.2,
        }
    }
}

/// Whether a penalty applies once per session or to a specific phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PenaltyScope {
    Global,
    Action,
}

/// Cost of one validated penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PenaltyValue {
    /// Points subtracted from a /10 score.
    Points(f64),
    /// Terminal: the session is disqualified.
    Disqualifying,
}

impl PenaltyValue {
    pub fn points(self) -> Option<f64> {
        match self {
            PenaltyValue::Points(p) => Some(p),
            PenaltyValue::Disqualifying => None,
        }
    }

    pub fn is_disqualifying(self) -> bool {
        matches!(self, PenaltyValue::Disqualifying)
    }
}

/// A penalty preset from the rulebook.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PenaltyDefinition {
    /// Stable identifier used in evaluations and adjudication keys.
    pub id: &'static str,

    /// Severity group, 1 to 3.
    pub group: u8,

    pub label: &'static str,

    pub value: PenaltyValue,

    pub scope: PenaltyScope,

    /// Rulebook wording, shown to judges.
    pub description: &'static str,
}

impl PenaltyDefinition {
    pub fn is_disqualifying(&self) -> bool {
        self.value.is_disqualifying()
    }
}

/// Performance mode; the only part of a category that drives timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Mode {
    Solo,
    Duel,
    Ensemble,
    Bataille,
}

impl Mode {
    /// Parses a mode suffix such as `DUEL`.
    pub fn from_suffix(suffix: &str) -> Option<Mode> {
        match suffix {
            "SOLO" => Some(Mode::Solo),
            "DUEL" => Some(Mode::Duel),
            "ENSEMBLE" => Some(Mode::Ensemble),
            "BATAILLE" => Some(Mode::Bataille),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Solo => "SOLO",
            Mode::Duel => "DUEL",
            Mode::Ensemble => "ENSEMBLE",
            Mode::Bataille => "BATAILLE",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Armament family encoded in the category prefix. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Armament {
    /// `T1`: heavy weapons, broad blades (antique/medieval).
    Heavy,
    /// `T2`: mid-weight weapons (renaissance).
    Medium,
    /// `T3`: light weapons, fine blades (modern).
    Light,
    /// `T123`: any armament, used by solo and ensemble categories.
    Any,
}

impl Armament {
    pub fn from_prefix(prefix: &str) -> Option<Armament> {
        match prefix {
            "T1" => Some(Armament::Heavy),
            "T2" => Some(Armament::Medium),
            "T3" => Some(Armament::Light),
            "T123" => Some(Armament::Any),
            _ => None,
        }
    }
}

/// A parsed competition category such as `T2_DUEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub code: String,
    pub armament: Option<Armament>,
    pub mode: Mode,
}

impl Category {
    /// Parses `<prefix>_<MODE>`, or a bare mode.
    ///
    /// An unrecognised prefix is kept as `armament: None`; an unrecognised
    /// mode is an error.
    pub fn parse(code: &str) -> Result<Category> {
        let trimmed = code.trim();
        let (prefix, suffix) = match trimmed.rsplit_once('_') {
            Some((prefix, suffix)) => (Some(prefix), suffix),
            None => (None, trimmed),
        };
        let mode = Mode::from_suffix(suffix)
            .ok_or_else(|| ScoringError::UnknownCategory(code.to_string()))?;
        Ok(Category {
            code: trimmed.to_string(),
            armament: prefix.and_then(Armament::from_prefix),
            mode,
        })
    }
}

/// Timing targets for one mode, in elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeThresholds {
    /// Planned performance duration target.
    pub planned_total_seconds: u32,

    /// Minimum effective combat duration.
    pub min_combat_seconds: u32,
}

/// One artistic criterion scored /5 in Free sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArtisticCriterion {
    pub id: &'static str,
    pub label: &'static str,
}
