//! `EncounterEngine`: resolves a [`Strategy`] against live agents.

use gh_agent::Agent;
use gh_core::Resource;
use tracing::debug;

use crate::error::argument_shape;
use crate::preview::{self, Preview, PreviewArgs};
use crate::{conflict, digging};
use crate::{EncounterConfig, EncounterError, EncounterResult, GroupShape, Strategy};

/// The agents taking part in one encounter.
pub enum Participants<'a> {
    Single(&'a mut [Agent]),
    Dual {
        aggressive: &'a mut [Agent],
        passive:    &'a mut [Agent],
    },
}

impl Participants<'_> {
    pub fn shape(&self) -> GroupShape {
        match self {
            Participants::Single(_) => GroupShape::Single,
            Participants::Dual { .. } => GroupShape::Dual,
        }
    }

    /// Total number of agents across all groups.
    pub fn len(&self) -> usize {
        match self {
            Participants::Single(agents) => agents.len(),
            Participants::Dual { aggressive, passive } => aggressive.len() + passive.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stateless dispatcher over the strategy functions.
///
/// The only thing the engine holds is its [`EncounterConfig`]; no state
/// survives from one [`run`](Self::run) to the next.
///
/// # Example
///
/// ```rust
/// use gh_agent::AgentBuilder;
/// use gh_core::{AgentId, GoldVein};
/// use gh_encounter::{EncounterEngine, Participants, Strategy};
///
/// let mut diggers: Vec<_> = (0..3)
///     .map(|i| AgentBuilder::new("digger", AgentId(i)).max_gold_per_turn(4.0).build().unwrap())
///     .collect();
/// let mut vein = GoldVein::depleting(10.0).unwrap();
///
/// let engine = EncounterEngine::default();
/// engine
///     .run(Strategy::Collaboration, Participants::Single(&mut diggers), Some(&mut vein))
///     .unwrap();
///
/// // 10 units dug, ceil(10 / 3) = 4 each.
/// assert!(diggers.iter().all(|a| a.gold() == 4.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncounterEngine {
    config: EncounterConfig,
}

impl EncounterEngine {
    pub fn new(config: EncounterConfig) -> EncounterResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    /// Resolve `strategy` in place.
    ///
    /// Fails with [`EncounterError::ArgumentShape`] when the participants do
    /// not match [`Strategy::shape`], and with
    /// [`EncounterError::MissingResource`] when a digging strategy gets no
    /// resource.  Strategy errors propagate unchanged.  On any error the
    /// agents and resource are left as they were.
    pub fn run(
        &self,
        strategy: Strategy,
        participants: Participants<'_>,
        resource: Option<&mut dyn Resource>,
    ) -> EncounterResult<()> {
        if participants.shape() != strategy.shape() {
            return Err(argument_shape(format!(
                "{strategy} takes {:?} participants, got {:?}",
                strategy.shape(),
                participants.shape()
            )));
        }
        debug!(%strategy, agents = participants.len(), "resolving encounter");

        match participants {
            Participants::Single(agents) => match strategy {
                Strategy::Collaboration => {
                    digging::collaboration(agents, require(strategy, resource)?)
                }
                Strategy::Philanthropy => {
                    digging::philanthropy(agents, require(strategy, resource)?);
                    Ok(())
                }
                Strategy::Monopoly => {
                    digging::monopoly(agents, require(strategy, resource)?);
                    Ok(())
                }
                Strategy::Competition => digging::competition(
                    agents,
                    require(strategy, resource)?,
                    self.config.max_gold_aggregation,
                ),
                Strategy::Sabotage => {
                    conflict::sabotage(agents);
                    Ok(())
                }
                Strategy::Combat => conflict::combat(agents),
                Strategy::Intimidation | Strategy::Raid | Strategy::Heist => {
                    Err(argument_shape(format!("{strategy} needs two groups")))
                }
            },
            Participants::Dual { aggressive, passive } => match strategy {
                Strategy::Intimidation => {
                    conflict::intimidation(aggressive, passive, self.config.intimidation_ratio)
                }
                Strategy::Raid => {
                    conflict::raid(aggressive, passive);
                    Ok(())
                }
                Strategy::Heist => conflict::heist(aggressive, passive),
                _ => Err(argument_shape(format!("{strategy} needs a single group"))),
            },
        }
    }

    /// Dry-run `strategy` on copies of the agents in `args`.
    ///
    /// See [`PreviewArgs`] for the accepted argument combinations.
    pub fn preview<'a>(
        &self,
        strategy: Strategy,
        args: PreviewArgs<'a>,
    ) -> EncounterResult<Preview<'a>> {
        preview::preview_encounter(self, strategy, args)
    }
}

fn require(
    strategy: Strategy,
    resource: Option<&mut dyn Resource>,
) -> EncounterResult<&mut dyn Resource> {
    resource.ok_or_else(|| {
        tracing::warn!(%strategy, "encounter rejected: no resource supplied");
        EncounterError::MissingResource(strategy)
    })
}
