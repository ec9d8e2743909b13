//! Ledger storage contract.

use crate::error::Result;
use crate::session::PenaltyKey;
use crate::types::{PerformanceId, SessionType};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Store of human adjudication overrides, keyed by
/// (performance, session, penalty key).
///
/// A row is an explicit decision; no row means "use the majority".
/// Writes are last-write-wins upserts and rows are never deleted, only
/// flipped.
///
/// # Implementing
///
/// A persistent store keeps one row per (performance, session, key),
/// storing the key in its text form (`PenaltyKey`'s `Display`). Its
/// `upsert_override` must insert or replace that row in one statement,
/// so concurrent writers to the same key resolve to the last write.
pub trait PenaltyLedger: Send + Sync {
    /// Every override recorded for one session of one performance.
    fn load_overrides(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<BTreeMap<PenaltyKey, bool>>;

    /// Creates or replaces one override.
    fn upsert_override(
        &self,
        performance: PerformanceId,
        session: SessionType,
        key: PenaltyKey,
        validated: bool,
    ) -> Result<()>;
}

impl<L: PenaltyLedger + ?Sized> PenaltyLedger for Arc<L> {
    fn load_overrides(
        &self,
        performance: PerformanceId,
        session: SessionType,
    ) -> Result<BTreeMap<PenaltyKey, bool>> {
        (**self).load_overrides(performance, session)
    }

    fn upsert_override(
        &self,
        performance: PerformanceId,
        session: SessionType,
        key: PenaltyKey,
        validated: bool,
    ) -> Result<()> {
        (**self).upsert_override(performance, session, key, validated)
    }
}
