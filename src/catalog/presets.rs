//! Standard rulebook tables.

use super::types::{
    ArtisticCriterion, Mode, PenaltyDefinition, PenaltyScope, PenaltyValue, TimeThresholds,
};

/// Global penalty auto-added when effective combat time is too short.
pub const COMBAT_TIME_PENALTY: &str = "g2_temps_combat";

/// Global penalty auto-added when the performance overruns its target.
pub const PERFORMANCE_TIME_PENALTY: &str = "g1_temps_perf";

/// Penalty presets, in rulebook order.
pub static PENALTY_PRESETS: [PenaltyDefinition; 11] = [
    PenaltyDefinition {
        id: "g1_mal_maitrisee",
        group: 1,
        label: "Action mal maitrisee",
        value: PenaltyValue::Points(0.25),
        scope: PenaltyScope::Action,
        description: "Oubli, contact involontaire, fracas d'une arme au sol, pointe proche du visage.",
    },
    PenaltyDefinition {
        id: "g1_sortie",
        group: 1,
        label: "Sortie de l'espace scenique",
        value: PenaltyValue::Points(0.25),
        scope: PenaltyScope::Action,
        description: "Sortie des deux pieds pendant une phrase d'armes.",
    },
    PenaltyDefinition {
        id: PERFORMANCE_TIME_PENALTY,
        group: 1,
        label: "Temps performance insuffisant/depasse",
        value: PenaltyValue::Points(0.25),
        scope: PenaltyScope::Global,
        description: "Une penalite au-dela de 30 sec, puis une penalite toutes les 10 sec.",
    },
    PenaltyDefinition {
        id: "g1_retard",
        group: 1,
        label: "Retard modere",
        value: PenaltyValue::Points(0.25),
        scope: PenaltyScope::Global,
        description: "Une penalite au-dela de 1 min (montage/demontage) ou presentation > 2 min apres dernier appel.",
    },
    PenaltyDefinition {
        id: "g2_dangereuse",
        group: 2,
        label: "Action dangereuse",
        value: PenaltyValue::Points(0.5),
        scope: PenaltyScope::Action,
        description: "Mouvement improvise, touche involontaire, projection d'une arme hors scene, pointe au visage.",
    },
    PenaltyDefinition {
        id: "g2_reglement",
        group: 2,
        label: "Non respect du reglement",
        value: PenaltyValue::Points(0.5),
        scope: PenaltyScope::Global,
        description: "Armes/accessoires/decors/costumes non conformes, jeu scenique/pause excessive, reclamation invalidee, arret medical non reconnu, bienseance, publicite.",
    },
    PenaltyDefinition {
        id: COMBAT_TIME_PENALTY,
        group: 2,
        label: "Temps de combat insuffisant",
        value: PenaltyValue::Points(0.5),
        scope: PenaltyScope::Global,
        description: "Au-dela de 10 sec sous la limite autorisee.",
    },
    PenaltyDefinition {
        id: "g2_retard",
        group: 2,
        label: "Retard important",
        value: PenaltyValue::Points(0.5),
        scope: PenaltyScope::Global,
        description: "Une penalite au-dela de 3 min (montage/demontage) ou presentation > 5 min apres dernier appel.",
    },
    PenaltyDefinition {
        id: "g3_blessure",
        group: 3,
        label: "Blessure identifiee",
        value: PenaltyValue::Disqualifying,
        scope: PenaltyScope::Action,
        description: "Competiteur ou figurant blesse par une arme, un accessoire ou un decor.",
    },
    PenaltyDefinition {
        id: "g3_esprit",
        group: 3,
        label: "Faute contre l'esprit sportif",
        value: PenaltyValue::Disqualifying,
        scope: PenaltyScope::Global,
        description: "Triche, comportement inapproprie, outrage.",
    },
    PenaltyDefinition {
        id: "g3_retard",
        group: 3,
        label: "Retard majeur",
        value: PenaltyValue::Disqualifying,
        scope: PenaltyScope::Global,
        description: "Au-dela de 8 min (montage/demontage) ou presentation > 10 min apres dernier appel.",
    },
];

/// Artistic criteria scored in Free sessions.
pub static ARTISTIC_CRITERIA: [ArtisticCriterion; 6] = [
    ArtisticCriterion { id: "scenario", label: "Scenario" },
    ArtisticCriterion { id: "mise_en_scene", label: "Mise en scene" },
    ArtisticCriterion { id: "costumes", label: "Costumes et accessoires" },
    ArtisticCriterion { id: "performance_theatrale", label: "Performance theatrale" },
    ArtisticCriterion { id: "performance_corporelle", label: "Performance corporelle" },
    ArtisticCriterion { id: "occupation_espace", label: "Occupation de l'espace" },
];

/// Category codes offered to organisers, with display labels.
pub static CATEGORY_CODES: [(&str, &str); 8] = [
    ("T1_DUEL", "Type 1 - Duel"),
    ("T1_BATAILLE", "Type 1 - Bataille"),
    ("T2_DUEL", "Type 2 - Duel"),
    ("T2_BATAILLE", "Type 2 - Bataille"),
    ("T3_DUEL", "Type 3 - Duel"),
    ("T3_BATAILLE", "Type 3 - Bataille"),
    ("T123_SOLO", "Type 1-2-3 - Solo"),
    ("T123_ENSEMBLE", "Type 1-2-3 - Ensemble"),
];

/// Timing targets per mode.
///
/// | Mode | planned | min combat |
/// |---|---|---|
/// | SOLO | 2:00 | 1:00 |
/// | DUEL | 3:00 | 1:30 |
/// | ENSEMBLE | 2:30 | 1:15 |
/// | BATAILLE | 4:00 | 2:00 |
pub fn standard_thresholds(mode: Mode) -> TimeThresholds {
    let (planned_total_seconds, min_combat_seconds) = match mode {
        Mode::Solo => (120, 60),
        Mode::Duel => (180, 90),
        Mode::Ensemble => (150, 75),
        Mode::Bataille => (240, 120),
    };
    TimeThresholds {
        planned_total_seconds,
        min_combat_seconds,
    }
}
