//! Override/majority merge.

use crate::session::{MajorityVote, PenaltyKey};
use std::collections::BTreeMap;
use tracing::debug;

/// Effective state of one key: the override when present, else the
/// majority default (false for a key nobody flagged).
pub fn effective_penalty(
    key: &PenaltyKey,
    overrides: &BTreeMap<PenaltyKey, bool>,
    majority: &BTreeMap<PenaltyKey, MajorityVote>,
) -> bool {
    match overrides.get(key) {
        Some(&validated) => validated,
        None => majority.get(key).is_some_and(|v| v.majority),
    }
}

/// Effective state of every key known to either side.
///
/// Override-only keys (a disqualifying global, or an action nobody
/// reports any more) are kept so an explicit decision is never lost.
pub fn merge_effective(
    overrides: &BTreeMap<PenaltyKey, bool>,
    majority: &BTreeMap<PenaltyKey, MajorityVote>,
) -> BTreeMap<PenaltyKey, bool> {
    let merged: BTreeMap<PenaltyKey, bool> = majority
        .keys()
        .chain(overrides.keys())
        .map(|key| (key.clone(), effective_penalty(key, overrides, majority)))
        .collect();
    debug!(
        keys = merged.len(),
        overrides = overrides.len(),
        validated = merged.values().filter(|v| **v).count(),
        "merged penalty overrides"
    );
    merged
}
