//! Agent identity.
//!
//! Uniqueness is only required within one run; the engine never allocates
//! IDs itself, it just carries whatever the driver assigned into logs and
//! preview lookups.

use std::fmt;

/// Identity of a simulated agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Sentinel for an agent the driver never numbered.
    pub const INVALID: AgentId = AgentId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for AgentId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "agent#{}", self.0)
        } else {
            f.write_str("agent#?")
        }
    }
}
