//! Engine configuration.
//!
//! Typically built in code or deserialized (with the `serde` feature) by the
//! driver and passed to [`EncounterEngine::new`](crate::EncounterEngine::new).

use gh_agent::Agent;
use gh_core::GhError;

use crate::{aggregate, EncounterResult};

/// How competition totals the group's max-gold-per-turn.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaxGoldAggregation {
    /// The value of the last agent in input order.
    #[default]
    LastAgent,
    /// The true sum over the group.
    Sum,
}

impl MaxGoldAggregation {
    pub fn total(self, agents: &[Agent]) -> f64 {
        match self {
            MaxGoldAggregation::LastAgent => aggregate::total_max_gold_per_turn(agents),
            MaxGoldAggregation::Sum => aggregate::summed_max_gold_per_turn(agents),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    /// Aggregation used by competition.  Default: `LastAgent`.
    pub max_gold_aggregation: MaxGoldAggregation,

    /// Intimidation succeeds when aggressive strength is at least this many
    /// times the passive strength.  Default: 2.
    pub intimidation_ratio: f64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            max_gold_aggregation: MaxGoldAggregation::LastAgent,
            intimidation_ratio:   2.0,
        }
    }
}

impl EncounterConfig {
    pub fn validate(&self) -> EncounterResult<()> {
        if !self.intimidation_ratio.is_finite() || self.intimidation_ratio < 0.0 {
            return Err(GhError::Config(format!(
                "intimidation_ratio must be finite and non-negative (got {})",
                self.intimidation_ratio
            ))
            .into());
        }
        Ok(())
    }
}
