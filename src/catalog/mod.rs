//! Rule Catalog.
//!
//! Static rulebook data: difficulty coefficients, penalty presets
//! (group, point value or disqualifying, scope), the category to mode
//! mapping and per-mode timing targets. Pure lookups, no behavior.

mod presets;
mod rules;
mod timing;
mod types;

pub use presets::{
    ARTISTIC_CRITERIA, CATEGORY_CODES, COMBAT_TIME_PENALTY, PENALTY_PRESETS,
    PERFORMANCE_TIME_PENALTY,
};
pub use rules::RuleCatalog;
pub use timing::{format_mmss, parse_mmss};
pub use types::{
    Armament, ArtisticCriterion, Category, Difficulty, Mode, PenaltyDefinition, PenaltyScope,
    PenaltyValue, TimeThresholds,
};
