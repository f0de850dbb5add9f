//! Read-only group queries shared by several strategies.

use gh_agent::Agent;

use crate::error::{division_by_zero, EncounterResult};

/// Max-gold-per-turn of the LAST agent in input order; 0 for an empty group.
///
/// This is not a sum.  Use [`summed_max_gold_per_turn`] (or
/// `MaxGoldAggregation::Sum`) for the true total.
pub fn total_max_gold_per_turn(agents: &[Agent]) -> f64 {
    agents.last().map_or(0.0, Agent::max_gold_per_turn)
}

pub fn summed_max_gold_per_turn(agents: &[Agent]) -> f64 {
    agents.iter().map(Agent::max_gold_per_turn).sum()
}

pub fn total_strength(agents: &[Agent]) -> f64 {
    agents.iter().map(Agent::strength).sum()
}

/// `total_strength / count`.  Fails on an empty group.
pub fn average_strength(agents: &[Agent]) -> EncounterResult<f64> {
    if agents.is_empty() {
        return Err(division_by_zero("average_strength", "group size"));
    }
    Ok(total_strength(agents) / agents.len() as f64)
}

pub fn total_gold_owned(agents: &[Agent]) -> f64 {
    agents.iter().map(Agent::gold).sum()
}

// ── Orderings ─────────────────────────────────────────────────────────────────
//
// Both sorts are stable: agents with equal keys keep their input order.
// They return indices; the slice itself is never reordered.

/// Indices of `agents`, poorest first.
pub fn order_by_gold_ascending(agents: &[Agent]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..agents.len()).collect();
    order.sort_by(|&a, &b| agents[a].gold().total_cmp(&agents[b].gold()));
    order
}

/// Indices of `agents`, strongest first.
pub fn order_by_strength_descending(agents: &[Agent]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..agents.len()).collect();
    order.sort_by(|&a, &b| agents[b].strength().total_cmp(&agents[a].strength()));
    order
}
