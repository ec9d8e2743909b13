//! Final Score Composer.
//!
//! Applies the effective (adjudicated) penalty set to each session mean
//! and combines the technical and free sessions into one overall result.
//! Disqualification short-circuits: a disqualified session makes the
//! overall result disqualified.

mod composer;
mod types;

pub use crate::types::{OverallScore, SessionScore};
pub use composer::FinalComposer;
pub use types::{FinalResult, SessionFinal};
