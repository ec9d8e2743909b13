//! Scoring engine facade.
//!
//! Wires the per-judge, session and composition stages to the two
//! external collaborators: an [`EvaluationSource`] holding the judges'
//! submitted evaluations and a [`PenaltyLedger`](crate::ledger::PenaltyLedger)
//! holding adjudication overrides. Both are injected; the engine holds no
//! other state.

mod scoring;
mod source;

pub use scoring::ScoringEngine;
pub use source::{EvaluationSource, InMemoryEvaluationStore};
