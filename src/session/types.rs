//! Penalty keys, majority votes and the session aggregate.

use crate::catalog::PenaltyScope;
use crate::error::ScoringError;
use crate::judge::PerJudgeResult;
use crate::types::{PerformanceId, SessionScore, SessionType};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifies one adjudicable penalty within a session.
///
/// Global keys sort before action keys; action keys sort by action
/// number, then penalty id. The canonical text form is the penalty id for
/// global keys and `action:<number>:<penalty id>` for action keys.
///
/// ```
/// use combat_score::session::PenaltyKey;
///
/// let key: PenaltyKey = "action:3:g1_sortie".parse().unwrap();
/// assert_eq!(key, PenaltyKey::action(3, "g1_sortie"));
/// assert_eq!(key.to_string(), "action:3:g1_sortie");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub enum PenaltyKey {
    Global(String),
    Action {
        /// 1-based phrase position.
        action: u32,
        penalty: String,
    },
}

impl PenaltyKey {
    pub fn global(id: impl Into<String>) -> Self {
        PenaltyKey::Global(id.into())
    }

    pub fn action(action: u32, penalty: impl Into<String>) -> Self {
        PenaltyKey::Action {
            action,
            penalty: penalty.into(),
        }
    }

    pub fn penalty_id(&self) -> &str {
        match self {
            PenaltyKey::Global(id) => id,
            PenaltyKey::Action { penalty, .. } => penalty,
        }
    }

    pub fn action_number(&self) -> Option<u32> {
        match self {
            PenaltyKey::Global(_) => None,
            PenaltyKey::Action { action, .. } => Some(*action),
        }
    }

    /// Scope the named penalty must carry in the catalog.
    pub fn scope(&self) -> PenaltyScope {
        match self {
            PenaltyKey::Global(_) => PenaltyScope::Global,
            PenaltyKey::Action { .. } => PenaltyScope::Action,
        }
    }
}

impl fmt::Display for PenaltyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyKey::Global(id) => f.write_str(id),
            PenaltyKey::Action { action, penalty } => write!(f, "action:{action}:{penalty}"),
        }
    }
}

impl FromStr for PenaltyKey {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScoringError::UnknownPenalty(s.to_string());
        match s.strip_prefix("action:") {
            Some(rest) => {
                let (number, penalty) = rest.split_once(':').ok_or_else(malformed)?;
                let action: u32 = number.parse().map_err(|_| malformed())?;
                if action == 0 || penalty.is_empty() {
                    return Err(malformed());
                }
                Ok(PenaltyKey::action(action, penalty))
            }
            None if s.is_empty() => Err(malformed()),
            None => Ok(PenaltyKey::global(s)),
        }
    }
}

impl From<PenaltyKey> for String {
    fn from(key: PenaltyKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for PenaltyKey {
    type Error = ScoringError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Tally of judges flagging one penalty key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MajorityVote {
    /// Judges who flagged the key.
    pub votes: usize,

    /// Judges who scored the session.
    pub total_judges: usize,

    /// `votes >= ceil(total_judges / 2)`, false without judges.
    pub majority: bool,
}

impl MajorityVote {
    pub fn new(votes: usize, total_judges: usize) -> Self {
        Self {
            votes,
            total_judges,
            majority: total_judges > 0 && votes >= total_judges.div_ceil(2),
        }
    }
}

/// Everything known about one session of one performance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionAggregate {
    pub performance_id: PerformanceId,

    pub session: SessionType,

    /// One result per judge, ordered by judge id.
    pub judges: Vec<PerJudgeResult>,

    /// `None` while no judge contributes a score.
    pub mean: Option<SessionScore>,

    /// Majority default for every contested penalty key.
    pub majority: BTreeMap<PenaltyKey, MajorityVote>,
}

impl SessionAggregate {
    pub fn judge_count(&self) -> usize {
        self.judges.len()
    }

    /// Key → majority default, the map the ledger merges overrides into.
    pub fn majority_map(&self) -> BTreeMap<PenaltyKey, bool> {
        self.majority
            .iter()
            .map(|(key, vote)| (key.clone(), vote.majority))
            .collect()
    }

    /// Action keys flagged by at least one judge, by action number.
    pub fn action_rows(&self) -> impl Iterator<Item = (&PenaltyKey, &MajorityVote)> {
        self.majority
            .iter()
            .filter(|(key, _)| matches!(key, PenaltyKey::Action { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_text_form() {
        assert_eq!(PenaltyKey::global("g1_retard").to_string(), "g1_retard");
        assert_eq!(PenaltyKey::action(12, "g2_dangereuse").to_string(), "action:12:g2_dangereuse");
        assert_eq!("g1_retard".parse::<PenaltyKey>().unwrap(), PenaltyKey::global("g1_retard"));
    }

    #[test]
    fn test_key_parse_rejects_malformed_action() {
        for bad in ["", "action:", "action:x:g1_sortie", "action:0:g1_sortie", "action:2:", "action:2"] {
            assert!(bad.parse::<PenaltyKey>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_key_ordering() {
        let mut keys = vec![
            PenaltyKey::action(10, "g1_sortie"),
            PenaltyKey::action(2, "g2_dangereuse"),
            PenaltyKey::global("g2_retard"),
            PenaltyKey::action(2, "g1_sortie"),
            PenaltyKey::global("g1_retard"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                PenaltyKey::global("g1_retard"),
                PenaltyKey::global("g2_retard"),
                PenaltyKey::action(2, "g1_sortie"),
                PenaltyKey::action(2, "g2_dangereuse"),
                PenaltyKey::action(10, "g1_sortie"),
            ]
        );
    }

    #[test]
    fn test_majority_threshold() {
        assert!(MajorityVote::new(2, 3).majority);
        assert!(!MajorityVote::new(1, 3).majority);
        assert!(MajorityVote::new(2, 4).majority);
        assert!(!MajorityVote::new(1, 4).majority);
        assert!(MajorityVote::new(1, 1).majority);
        assert!(MajorityVote::new(1, 2).majority);
        assert!(!MajorityVote::new(0, 0).majority);
    }
}
