//! Scoring configuration.

use crate::catalog::ARTISTIC_CRITERIA;

/// How an artistic criterion with no score counts toward the artistic mean.
///
/// A sheet with no artistic score at all always yields no artistic mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlankCriterionPolicy {
    /// A blank criterion scores 0; the denominator is every configured criterion.
    #[default]
    CountAsZero,
    /// A blank criterion is left out of the denominator.
    Exclude,
}

/// Configuration for per-judge and session scoring.
///
/// # Examples
///
/// ```
/// use combat_score::judge::{BlankCriterionPolicy, ScoringConfig};
///
/// let config = ScoringConfig::default()
///     .with_blank_criterion(BlankCriterionPolicy::Exclude)
///     .with_performance_grace_seconds(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringConfig {
    pub blank_criterion: BlankCriterionPolicy,

    /// Combat time is penalised only when more than this far under the minimum.
    pub combat_time_tolerance_seconds: u32,

    /// Overrun allowed past the planned duration before any penalty.
    pub performance_grace_seconds: u32,

    /// Each started step past the grace window adds one more penalty.
    pub performance_step_seconds: u32,

    /// Criteria averaged into the artistic mean.
    pub artistic_criteria: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            blank_criterion: BlankCriterionPolicy::default(),
            combat_time_tolerance_seconds: 10,
            performance_grace_seconds: 30,
            performance_step_seconds: 10,
            artistic_criteria: ARTISTIC_CRITERIA.iter().map(|c| c.id.to_string()).collect(),
        }
    }
}

impl ScoringConfig {
    pub fn with_blank_criterion(mut self, policy: BlankCriterionPolicy) -> Self {
        self.blank_criterion = policy;
        self
    }

    pub fn with_combat_time_tolerance_seconds(mut self, seconds: u32) -> Self {
        self.combat_time_tolerance_seconds = seconds;
        self
    }

    pub fn with_performance_grace_seconds(mut self, seconds: u32) -> Self {
        self.performance_grace_seconds = seconds;
        self
    }

    pub fn with_performance_step_seconds(mut self, seconds: u32) -> Self {
        self.performance_step_seconds = seconds;
        self
    }

    pub fn with_artistic_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artistic_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.performance_step_seconds == 0 {
            return Err("performance_step_seconds must be positive".into());
        }
        if self.artistic_criteria.is_empty() {
            return Err("artistic_criteria must not be empty".into());
        }
        for (i, id) in self.artistic_criteria.iter().enumerate() {
            if self.artistic_criteria[..i].contains(id) {
                return Err(format!("artistic criterion {id} listed twice"));
            }
        }
        Ok(())
    }
}
