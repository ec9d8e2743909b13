//! Identifiers and result sentinels shared by every stage.

use std::fmt;

/// Identifier of a judged performance (a combat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PerformanceId(pub u64);

impl fmt::Display for PerformanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JudgeId(pub u64);

impl fmt::Display for JudgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two programmes a performance is judged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionType {
    /// Choreography-only scoring.
    Technical,
    /// Choreography plus artistic scoring ("libre").
    Free,
}

impl SessionType {
    pub const ALL: [SessionType; 2] = [SessionType::Technical, SessionType::Free];
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Technical => f.write_str("technical"),
            SessionType::Free => f.write_str("free"),
        }
    }
}

/// Score of a judge or a session on the /10 axis, or disqualification.
///
/// Absence of data is expressed as `Option<SessionScore>::None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionScore {
    Scored(f64),
    Disqualified,
}

impl SessionScore {
    pub fn value(self) -> Option<f64> {
        match self {
            SessionScore::Scored(v) => Some(v),
            SessionScore::Disqualified => None,
        }
    }

    pub fn is_disqualified(self) -> bool {
        matches!(self, SessionScore::Disqualified)
    }
}

/// Overall performance result across both sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverallScore {
    /// Mean of the two session finals.
    Scored(f64),
    /// At least one session has no scored judges yet.
    Incomplete,
    /// At least one session is disqualified.
    Disqualified,
}

impl OverallScore {
    pub fn value(self) -> Option<f64> {
        match self {
            OverallScore::Scored(v) => Some(v),
            _ => None,
        }
    }
}
