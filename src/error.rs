//! Error taxonomy for the scoring engine.
//!
//! Missing data (no judges yet, blank artistic sheet, unreadable timing)
//! is never an error: it is carried as `Option` or as the
//! [`SessionScore`](crate::compose::SessionScore) /
//! [`OverallScore`](crate::compose::OverallScore) sentinels. Errors are
//! reserved for references the catalog cannot resolve and for failures
//! reported by an external store.

use crate::catalog::PenaltyScope;
use thiserror::Error;

/// Errors surfaced by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("unknown penalty id: {0}")]
    UnknownPenalty(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown artistic criterion: {0}")]
    UnknownCriterion(String),

    #[error("penalty {id} is not {expected:?}-scoped")]
    ScopeMismatch { id: String, expected: PenaltyScope },

    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScoringError>;
