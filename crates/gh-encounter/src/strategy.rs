//! The named encounter strategies.

use std::fmt;
use std::str::FromStr;

use gh_core::GhError;

/// How many agent groups a strategy takes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GroupShape {
    /// One group (`agents`).
    Single,
    /// An aggressive group against a passive group.
    Dual,
}

/// Every encounter the engine can resolve.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Collaboration,
    Philanthropy,
    Monopoly,
    Competition,
    Intimidation,
    Raid,
    Heist,
    Sabotage,
    Combat,
}

impl Strategy {
    pub const ALL: [Strategy; 9] = [
        Strategy::Collaboration,
        Strategy::Philanthropy,
        Strategy::Monopoly,
        Strategy::Competition,
        Strategy::Intimidation,
        Strategy::Raid,
        Strategy::Heist,
        Strategy::Sabotage,
        Strategy::Combat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Collaboration => "collaboration",
            Strategy::Philanthropy => "philanthropy",
            Strategy::Monopoly => "monopoly",
            Strategy::Competition => "competition",
            Strategy::Intimidation => "intimidation",
            Strategy::Raid => "raid",
            Strategy::Heist => "heist",
            Strategy::Sabotage => "sabotage",
            Strategy::Combat => "combat",
        }
    }

    pub fn shape(self) -> GroupShape {
        match self {
            Strategy::Intimidation | Strategy::Raid | Strategy::Heist => GroupShape::Dual,
            _ => GroupShape::Single,
        }
    }

    /// `true` for the digging strategies, which draw from a resource.
    pub fn needs_resource(self) -> bool {
        matches!(
            self,
            Strategy::Collaboration
                | Strategy::Philanthropy
                | Strategy::Monopoly
                | Strategy::Competition
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = GhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GhError::Parse(format!("unknown encounter strategy {s:?}")))
    }
}
