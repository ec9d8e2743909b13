//! Catalog lookups.

use super::presets::{standard_thresholds, ARTISTIC_CRITERIA, CATEGORY_CODES, PENALTY_PRESETS};
use super::types::{
    ArtisticCriterion, Category, Difficulty, Mode, PenaltyDefinition, PenaltyScope, TimeThresholds,
};
use crate::error::{Result, ScoringError};

/// Read-only rulebook: penalty presets, artistic criteria and timing targets.
///
/// Lookups of unknown identifiers fail with a [`ScoringError`]; callers
/// treat that as a data-entry problem upstream.
///
/// # Examples
///
/// ```
/// use combat_score::catalog::{Difficulty, Mode, RuleCatalog};
///
/// let catalog = RuleCatalog::standard();
/// assert_eq!(catalog.coefficient_of(Difficulty::Advanced), 1.2);
/// assert_eq!(catalog.mode_of("T1_DUEL").unwrap(), Mode::Duel);
/// assert_eq!(catalog.time_thresholds(Mode::Duel).min_combat_seconds, 90);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RuleCatalog {
    penalties: &'static [PenaltyDefinition],
    criteria: &'static [ArtisticCriterion],
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleCatalog {
    /// The standard rulebook.
    pub fn standard() -> Self {
        Self {
            penalties: &PENALTY_PRESETS,
            criteria: &ARTISTIC_CRITERIA,
        }
    }

    /// A catalog over custom penalty and criterion tables.
    pub fn new(
        penalties: &'static [PenaltyDefinition],
        criteria: &'static [ArtisticCriterion],
    ) -> Self {
        Self { penalties, criteria }
    }

    pub fn coefficient_of(&self, difficulty: Difficulty) -> f64 {
        difficulty.coefficient()
    }

    pub fn penalty(&self, id: &str) -> Result<&'static PenaltyDefinition> {
        self.penalties
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ScoringError::UnknownPenalty(id.to_string()))
    }

    /// Looks up a penalty and checks its scope.
    pub fn scoped_penalty(
        &self,
        id: &str,
        scope: PenaltyScope,
    ) -> Result<&'static PenaltyDefinition> {
        let def = self.penalty(id)?;
        if def.scope != scope {
            return Err(ScoringError::ScopeMismatch {
                id: id.to_string(),
                expected: scope,
            });
        }
        Ok(def)
    }

    pub fn penalties(&self) -> &'static [PenaltyDefinition] {
        self.penalties
    }

    /// Global penalties that carry a point value (the contested set).
    pub fn contested_global_penalties(
        &self,
    ) -> impl Iterator<Item = &'static PenaltyDefinition> + 'static {
        self.penalties
            .iter()
            .filter(|p| p.scope == PenaltyScope::Global && !p.is_disqualifying())
    }

    pub fn time_thresholds(&self, mode: Mode) -> TimeThresholds {
        standard_thresholds(mode)
    }

    pub fn mode_of(&self, category: &str) -> Result<Mode> {
        Category::parse(category).map(|c| c.mode)
    }

    /// Display label for a known category code; unknown codes echo back.
    pub fn category_label<'a>(&self, code: &'a str) -> &'a str {
        CATEGORY_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(code, |(_, label)| *label)
    }

    pub fn criterion(&self, id: &str) -> Result<&'static ArtisticCriterion> {
        self.criteria
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ScoringError::UnknownCriterion(id.to_string()))
    }

    pub fn criteria(&self) -> &'static [ArtisticCriterion] {
        self.criteria
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets::{COMBAT_TIME_PENALTY, PERFORMANCE_TIME_PENALTY};
    use crate::catalog::PenaltyValue;

    #[test]
    fn test_penalty_lookup() {
        let catalog = RuleCatalog::standard();
        let p = catalog.penalty("g2_dangereuse").unwrap();
        assert_eq!(p.group, 2);
        assert_eq!(p.scope, PenaltyScope::Action);
        assert_eq!(p.value, PenaltyValue::Points(0.5));

        assert!(catalog.penalty("g3_esprit").unwrap().is_disqualifying());
    }

    #[test]
    fn test_unknown_penalty_is_error() {
        let catalog = RuleCatalog::standard();
        assert_eq!(
            catalog.penalty("g9_nope"),
            Err(ScoringError::UnknownPenalty("g9_nope".into()))
        );
    }

    #[test]
    fn test_scoped_penalty_mismatch() {
        let catalog = RuleCatalog::standard();
        assert!(catalog.scoped_penalty("g1_sortie", PenaltyScope::Action).is_ok());
        assert!(matches!(
            catalog.scoped_penalty("g1_sortie", PenaltyScope::Global),
            Err(ScoringError::ScopeMismatch { .. })
        ));
    }

    #[test]
    fn test_auto_penalties_are_global_points() {
        let catalog = RuleCatalog::standard();
        for id in [COMBAT_TIME_PENALTY, PERFORMANCE_TIME_PENALTY] {
            let p = catalog.scoped_penalty(id, PenaltyScope::Global).unwrap();
            assert!(!p.is_disqualifying());
        }
    }

    #[test]
    fn test_contested_globals() {
        let ids: Vec<_> = RuleCatalog::standard()
            .contested_global_penalties()
            .map(|p| p.id)
            .collect();
        assert_eq!(
            ids,
            ["g1_temps_perf", "g1_retard", "g2_reglement", "g2_temps_combat", "g2_retard"]
        );
    }

    #[test]
    fn test_thresholds_and_modes() {
        let catalog = RuleCatalog::standard();
        let t = catalog.time_thresholds(Mode::Bataille);
        assert_eq!(t.planned_total_seconds, 240);
        assert_eq!(t.min_combat_seconds, 120);
        assert_eq!(catalog.mode_of("T123_SOLO").unwrap(), Mode::Solo);
        assert!(catalog.mode_of("T1").is_err());
    }

    #[test]
    fn test_every_listed_category_parses() {
        let catalog = RuleCatalog::standard();
        for (code, _) in CATEGORY_CODES.iter() {
            assert!(catalog.mode_of(code).is_ok(), "{code}");
        }
        assert_eq!(catalog.category_label("T2_DUEL"), "Type 2 - Duel");
        assert_eq!(catalog.category_label("CUSTOM"), "CUSTOM");
    }

    #[test]
    fn test_criteria() {
        let catalog = RuleCatalog::standard();
        assert_eq!(catalog.criteria().len(), 6);
        assert_eq!(catalog.criterion("costumes").unwrap().label, "Costumes et accessoires");
        assert!(catalog.criterion("lighting").is_err());
    }
}
