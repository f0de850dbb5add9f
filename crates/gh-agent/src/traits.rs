//! Traits: named bundles of actions and powers an agent can carry.
//!
//! Traits are immutable once attached.  Agents hold them behind `Arc` so
//! cloning an agent (e.g. for a preview) shares rather than copies them.

use std::fmt;
use std::str::FromStr;

use gh_core::GhError;

// ── PowerType ─────────────────────────────────────────────────────────────────

/// Registered power kinds.  Every offensive power has a `_DEF` counterpart.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerType {
    Cut,
    CutDef,
    Smash,
    SmashDef,
    Venom,
    VenomDef,
}

impl PowerType {
    pub const ALL: [PowerType; 6] = [
        PowerType::Cut,
        PowerType::CutDef,
        PowerType::Smash,
        PowerType::SmashDef,
        PowerType::Venom,
        PowerType::VenomDef,
    ];

    /// Registered name, e.g. `"SMASH_DEF"`.
    pub fn name(self) -> &'static str {
        match self {
            PowerType::Cut => "CUT",
            PowerType::CutDef => "CUT_DEF",
            PowerType::Smash => "SMASH",
            PowerType::SmashDef => "SMASH_DEF",
            PowerType::Venom => "VENOM",
            PowerType::VenomDef => "VENOM_DEF",
        }
    }

    /// Defensive powers are exactly those whose name ends in `_DEF`.
    pub fn is_defensive(self) -> bool {
        self.name().ends_with("_DEF")
    }
}

impl fmt::Display for PowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PowerType {
    type Err = GhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PowerType::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GhError::Parse(format!("unknown power type {s:?}")))
    }
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// A named trait contributing actions and powers to its holder.
///
/// Powers are routed into `offensive_actions` or `defensive_actions` by
/// [`PowerType::is_defensive`], so a trait can never list a defensive power
/// as offensive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    name:              String,
    actions:           Vec<String>,
    offensive_actions: Vec<PowerType>,
    defensive_actions: Vec<PowerType>,
}

impl Trait {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:              name.into(),
            actions:           Vec::new(),
            offensive_actions: Vec::new(),
            defensive_actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn with_power(mut self, power: PowerType) -> Self {
        if power.is_defensive() {
            self.defensive_actions.push(power);
        } else {
            self.offensive_actions.push(power);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn offensive_actions(&self) -> &[PowerType] {
        &self.offensive_actions
    }

    pub fn defensive_actions(&self) -> &[PowerType] {
        &self.defensive_actions
    }
}
