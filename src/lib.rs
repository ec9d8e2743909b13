//! Scoring and penalty adjudication for judged theatrical fencing.
//!
//! Judges score each choreographed phrase, report penalties and, in the
//! free session, fill an artistic sheet. This crate turns those raw
//! evaluations into final results:
//!
//! - **Catalog** ([`catalog`]): difficulty coefficients, penalty presets,
//!   category modes and timing targets.
//! - **Per-judge** ([`judge`]): weighted technical score, automatic timing
//!   penalties, artistic composition and disqualification.
//! - **Session** ([`session`]): mean over judges and majority vote on every
//!   contested penalty.
//! - **Ledger** ([`ledger`]): adjudicator overrides merged over the
//!   majority defaults.
//! - **Compose** ([`compose`]): adjudicated deductions and the overall
//!   result, with disqualification short-circuiting.
//! - **Engine** ([`engine`]): the query facade over an evaluation source
//!   and a ledger.
//!
//! All derived scores are pure functions of the stored evaluations and
//! overrides; nothing derived is persisted.

pub mod catalog;
pub mod compose;
pub mod engine;
pub mod error;
pub mod judge;
pub mod ledger;
pub mod session;
pub mod types;

pub use error::{Result, ScoringError};
