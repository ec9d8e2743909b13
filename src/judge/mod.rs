//! Per-Judge Score Calculator.
//!
//! Turns one judge's raw evaluation (phrases, manual penalty counts,
//! timing, artistic sheet) into that judge's weighted score, automatic
//! timing penalties and disqualification flag.
//!
//! Action-scoped penalties reported on phrases are validated against the
//! catalog but not deducted from the judge's own score: they are
//! reconciled across judges by the [`session`](crate::session) stage and
//! deducted once, after adjudication.

mod calculator;
mod config;
mod types;

pub use calculator::JudgeCalculator;
pub use config::{BlankCriterionPolicy, ScoringConfig};
pub use types::{DifficultyMeans, JudgeEvaluation, Note, PerJudgeResult, Phrase};
