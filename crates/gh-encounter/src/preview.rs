//! What-if runs: resolve a strategy on copies and report what would change.
//!
//! The live agents are only ever borrowed immutably, so a preview cannot
//! touch them.  The resource, if any, is [forked](gh_core::Resource::fork)
//! before the run for the same reason.
//!
//! Results pair originals with simulated copies *by position*.  In dual mode
//! the pairing order is all passive agents first, then all aggressive agents,
//! each in input order.

use std::ptr;

use gh_agent::Agent;
use gh_core::Resource;
use tracing::debug;

use crate::error::argument_shape;
use crate::{EncounterEngine, EncounterResult, GroupShape, Participants, Strategy};

/// Inputs to [`EncounterEngine::preview`].
///
/// Exactly one mode must be filled in:
///
/// | Mode   | Fields                  |
/// |--------|-------------------------|
/// | single | `agents`                |
/// | dual   | `passive` + `aggressive` |
///
/// Anything else (nothing, a lone `passive`, `agents` mixed with either
/// group) is rejected with `ArgumentShape`.  `resource` is required by the
/// digging strategies and ignored by the rest.
#[derive(Default)]
pub struct PreviewArgs<'a> {
    pub agents:     Option<&'a [Agent]>,
    pub passive:    Option<&'a [Agent]>,
    pub aggressive: Option<&'a [Agent]>,
    pub resource:   Option<&'a dyn Resource>,
}

impl<'a> PreviewArgs<'a> {
    pub fn single(agents: &'a [Agent]) -> Self {
        Self { agents: Some(agents), ..Self::default() }
    }

    pub fn dual(passive: &'a [Agent], aggressive: &'a [Agent]) -> Self {
        Self {
            passive: Some(passive),
            aggressive: Some(aggressive),
            ..Self::default()
        }
    }

    pub fn with_resource(mut self, resource: &'a dyn Resource) -> Self {
        self.resource = Some(resource);
        self
    }
}

/// One input agent and the state its copy ended up in.
#[derive(Clone, Debug)]
pub struct PreviewEntry<'a> {
    pub original:  &'a Agent,
    pub simulated: Agent,
}

impl PreviewEntry<'_> {
    /// Gold the agent would gain (positive) or lose (negative).
    pub fn gold_delta(&self) -> f64 {
        self.simulated.gold() - self.original.gold()
    }
}

/// Outcome of a preview: one entry per input agent, in pairing order.
#[derive(Clone, Debug)]
pub struct Preview<'a> {
    strategy: Strategy,
    entries:  Vec<PreviewEntry<'a>>,
}

impl<'a> Preview<'a> {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn entries(&self) -> &[PreviewEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Simulated state of `original`, looked up by reference identity.
    ///
    /// Two distinct agents with equal fields are still told apart.
    pub fn simulated_for(&self, original: &Agent) -> Option<&Agent> {
        self.entries
            .iter()
            .find(|e| ptr::eq(e.original, original))
            .map(|e| &e.simulated)
    }

    /// Net gold created (positive) or destroyed (negative) across all agents.
    pub fn total_gold_delta(&self) -> f64 {
        self.entries.iter().map(PreviewEntry::gold_delta).sum()
    }
}

pub(crate) fn preview_encounter<'a>(
    engine: &EncounterEngine,
    strategy: Strategy,
    args: PreviewArgs<'a>,
) -> EncounterResult<Preview<'a>> {
    let mut forked: Option<Box<dyn Resource>> = args.resource.map(|r| r.fork());
    let resource: Option<&mut dyn Resource> = match forked.as_mut() {
        Some(pool) => Some(&mut **pool),
        None => None,
    };

    let entries: Vec<PreviewEntry<'a>> = match (args.agents, args.passive, args.aggressive) {
        (Some(agents), None, None) => {
            expect_shape(strategy, GroupShape::Single)?;
            let mut copies = agents.to_vec();
            engine.run(strategy, Participants::Single(&mut copies), resource)?;
            pair(agents.iter(), copies)
        }
        (None, Some(passive), Some(aggressive)) => {
            expect_shape(strategy, GroupShape::Dual)?;
            let mut passive_copies = passive.to_vec();
            let mut aggressive_copies = aggressive.to_vec();
            engine.run(
                strategy,
                Participants::Dual {
                    aggressive: &mut aggressive_copies,
                    passive:    &mut passive_copies,
                },
                resource,
            )?;
            passive_copies.append(&mut aggressive_copies);
            pair(passive.iter().chain(aggressive), passive_copies)
        }
        (agents, passive, aggressive) => {
            return Err(argument_shape(format!(
                "preview needs either `agents` or both `passive` and `aggressive` \
                 (got agents: {}, passive: {}, aggressive: {})",
                agents.is_some(),
                passive.is_some(),
                aggressive.is_some()
            )));
        }
    };

    debug!(%strategy, agents = entries.len(), "preview resolved");
    Ok(Preview { strategy, entries })
}

fn expect_shape(strategy: Strategy, mode: GroupShape) -> EncounterResult<()> {
    if strategy.shape() == mode {
        Ok(())
    } else {
        Err(argument_shape(format!(
            "{strategy} takes {:?} participants, preview was given {mode:?}",
            strategy.shape()
        )))
    }
}

fn pair<'a>(
    originals: impl Iterator<Item = &'a Agent>,
    simulated: Vec<Agent>,
) -> Vec<PreviewEntry<'a>> {
    originals
        .zip(simulated)
        .map(|(original, simulated)| PreviewEntry { original, simulated })
        .collect()
}
