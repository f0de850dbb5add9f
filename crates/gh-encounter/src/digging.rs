//! Digging strategies: one group drawing from a shared resource.
//!
//! Two primitives carry all of them:
//!
//! - **priority digging**: agents dig one after another and keep what they
//!   dig, so with a finite resource whoever goes first gets the most;
//! - **collective digging**: everyone digs into a shared pot that is split
//!   afterwards.

use gh_agent::Agent;
use gh_core::math::ceil_div;
use gh_core::Resource;
use tracing::{debug, trace};

use crate::aggregate::{order_by_gold_ascending, order_by_strength_descending};
use crate::error::{division_by_zero, EncounterResult};
use crate::MaxGoldAggregation;

// ── Primitives ────────────────────────────────────────────────────────────────

/// Every agent digs once, in slice order, and keeps its own haul.
pub fn priority_digging<R: Resource + ?Sized>(agents: &mut [Agent], resource: &mut R) {
    let order: Vec<usize> = (0..agents.len()).collect();
    dig_in_order(agents, &order, resource);
}

/// Every agent digs once; returns the pooled haul.  No gold changes hands.
pub fn collective_digging<R: Resource + ?Sized>(agents: &[Agent], resource: &mut R) -> f64 {
    agents.iter().map(|agent| agent.dig(&mut *resource)).sum()
}

fn dig_in_order<R: Resource + ?Sized>(agents: &mut [Agent], order: &[usize], resource: &mut R) {
    for &i in order {
        let agent = &mut agents[i];
        let collected = agent.dig(&mut *resource);
        agent.add_gold(collected);
        trace!(agent = %agent.id(), collected, "dug");
    }
}

// ── Strategies ────────────────────────────────────────────────────────────────

/// Pool the haul and give every agent `ceil(pool / n)`.
///
/// Rounding up is not reconciled: the group can end up with up to `n - 1`
/// more gold than was dug.
pub fn collaboration<R: Resource + ?Sized>(
    agents: &mut [Agent],
    resource: &mut R,
) -> EncounterResult<()> {
    if agents.is_empty() {
        return Err(division_by_zero("collaboration", "group size"));
    }

    let pool = collective_digging(agents, resource);
    let share = ceil_div(pool, agents.len() as f64)
        .ok_or_else(|| division_by_zero("collaboration", "group size"))?;
    for agent in agents.iter_mut() {
        agent.add_gold(share);
    }

    debug!(agents = agents.len(), pool, share, "collaboration resolved");
    Ok(())
}

/// Poorest agents dig first.
pub fn philanthropy<R: Resource + ?Sized>(agents: &mut [Agent], resource: &mut R) {
    let order = order_by_gold_ascending(agents);
    dig_in_order(agents, &order, resource);
    debug!(agents = agents.len(), "philanthropy resolved");
}

/// Strongest agents dig first.
pub fn monopoly<R: Resource + ?Sized>(agents: &mut [Agent], resource: &mut R) {
    let order = order_by_strength_descending(agents);
    dig_in_order(agents, &order, resource);
    debug!(agents = agents.len(), "monopoly resolved");
}

/// Pool the haul and pay each agent in proportion to its max-gold-per-turn.
///
/// The denominator comes from `aggregation`; with the default
/// [`MaxGoldAggregation::LastAgent`] the shares do not add up to the pool.
pub fn competition<R: Resource + ?Sized>(
    agents: &mut [Agent],
    resource: &mut R,
    aggregation: MaxGoldAggregation,
) -> EncounterResult<()> {
    let total_max_gold = aggregation.total(agents);
    if total_max_gold == 0.0 {
        return Err(division_by_zero("competition", "total max gold per turn"));
    }

    let pool = collective_digging(agents, resource);
    for agent in agents.iter_mut() {
        let earned = agent.max_gold_per_turn() * pool / total_max_gold;
        agent.add_gold(earned);
        trace!(agent = %agent.id(), earned, "competition payout");
    }

    debug!(agents = agents.len(), pool, total_max_gold, ?aggregation, "competition resolved");
    Ok(())
}
