//! Fluent builder for [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use gh_agent::{AgentBuilder, PowerType, Trait};
//! use gh_core::AgentId;
//!
//! let agent = AgentBuilder::new("robber", AgentId(3))
//!     .strength(12.0)
//!     .gold(40.0)
//!     .with_trait(Trait::new("brawler").with_power(PowerType::Smash))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(agent.gold(), 40.0);
//! assert_eq!(agent.offensive_actions(), &[PowerType::Smash]);
//! ```
//!
//! # Defaults
//!
//! | Field                     | Default |
//! |---------------------------|---------|
//! | `health`                  | 1       |
//! | `age`                     | 0       |
//! | `population_contribution` | 1       |
//! | `strength`                | 1       |
//! | `max_gold_per_turn`       | 1       |
//! | `gold`                    | 0       |

use std::sync::Arc;

use gh_core::error::ensure_quantity;
use gh_core::AgentId;

use crate::{Agent, AgentResult, Property, Trait};

/// Fluent builder for [`Agent`].
///
/// Numeric stats are validated in [`build`](Self::build): NaN, infinite and
/// negative values are rejected, not clamped.
pub struct AgentBuilder {
    agent: Agent,
}

impl AgentBuilder {
    pub fn new(kind: impl Into<String>, id: AgentId) -> Self {
        Self { agent: Agent::blank(kind.into(), id) }
    }

    pub fn health(mut self, health: f64) -> Self {
        self.agent.health = health;
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.agent.age = age;
        self
    }

    pub fn population_contribution(mut self, n: u32) -> Self {
        self.agent.population_contribution = n;
        self
    }

    pub fn strength(mut self, strength: f64) -> Self {
        self.agent.strength = strength;
        self
    }

    pub fn max_gold_per_turn(mut self, amount: f64) -> Self {
        self.agent.max_gold_per_turn = amount;
        self
    }

    /// Starting gold.  Shorthand for `.item(GOLD, amount)`.
    pub fn gold(self, amount: f64) -> Self {
        self.item(crate::GOLD, amount)
    }

    /// Starting quantity of an arbitrary inventory item.
    pub fn item(mut self, key: impl Into<String>, amount: f64) -> Self {
        self.agent.inventory.set(key, amount);
        self
    }

    pub fn with_trait(mut self, t: impl Into<Arc<Trait>>) -> Self {
        let t = t.into();
        self.agent.traits.insert(t.name().to_owned(), t);
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<Property>) -> Self {
        self.agent.other_properties.insert(key.into(), value.into());
        self
    }

    /// Validate stats and compute the trait-derived action lists.
    pub fn build(mut self) -> AgentResult<Agent> {
        ensure_quantity("health", self.agent.health)?;
        ensure_quantity("strength", self.agent.strength)?;
        ensure_quantity("max gold per turn", self.agent.max_gold_per_turn)?;
        self.agent.reload_traits();
        Ok(self.agent)
    }
}
