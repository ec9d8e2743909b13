//! Adjudicated results.

use crate::session::PenaltyKey;
use crate::types::{OverallScore, PerformanceId, SessionScore, SessionType};

/// One session after adjudicated penalties.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionFinal {
    pub session: SessionType,

    /// Judges' mean before adjudicated deductions.
    pub mean: Option<SessionScore>,

    /// Points removed by validated, non-disqualifying penalties.
    pub deduction: f64,

    /// Every effectively validated key, in key order.
    pub validated: Vec<PenaltyKey>,

    /// `mean - deduction`, `Disqualified`, or `None` without data.
    pub score: Option<SessionScore>,
}

impl SessionFinal {
    pub fn is_disqualified(&self) -> bool {
        self.score.is_some_and(SessionScore::is_disqualified)
    }
}

/// Final result of a performance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalResult {
    pub performance_id: PerformanceId,

    pub technical: SessionFinal,

    pub free: SessionFinal,

    pub overall: OverallScore,
}

impl FinalResult {
    pub fn session(&self, session: SessionType) -> &SessionFinal {
        match session {
            SessionType::Technical => &self.technical,
            SessionType::Free => &self.free,
        }
    }
}
