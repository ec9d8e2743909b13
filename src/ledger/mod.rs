//! Penalty Adjudication Ledger.
//!
//! Holds the adjudicator's explicit decisions per (performance, session,
//! key) and merges them over the majority defaults computed by the
//! [`session`](crate::session) stage. The ledger is the only mutable
//! shared state in the engine; it is passed in explicitly, never held
//! globally.

mod memory;
mod merge;
mod types;

pub use memory::InMemoryLedger;
pub use merge::{effective_penalty, merge_effective};
pub use types::PenaltyLedger;
