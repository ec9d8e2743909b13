//! Session Aggregator.
//!
//! Combines every judge's result for one (performance, session): the
//! session mean over non-disqualified judges, and a majority vote for
//! every contested penalty.
//!
//! # Majority rule
//!
//! A key is flagged by majority when at least `ceil(N / 2)` of the `N`
//! judges who scored the session flagged it; ties flag the penalty.
//! Contested keys are every Global, non-disqualifying penalty plus one
//! [`PenaltyKey::Action`] per (phrase position, penalty) that at least one
//! judge reported.

mod aggregator;
mod types;

pub use aggregator::SessionAggregator;
pub use types::{MajorityVote, PenaltyKey, SessionAggregate};
