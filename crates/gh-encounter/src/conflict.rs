//! Conflict strategies: robbery between an aggressive and a passive group,
//! or free-for-alls within one group.
//!
//! Dual-group strategies always take `(aggressive, passive)` in that order.

use gh_agent::Agent;
use gh_core::math::{ceil_div, ceil_half, ceil_share};
use tracing::{debug, trace};

use crate::aggregate::{order_by_strength_descending, total_gold_owned, total_strength};
use crate::error::{division_by_zero, EncounterResult};

/// Aggressors threaten the passive group into handing over its gold.
///
/// Succeeds when `total aggressive strength >= ratio * total passive
/// strength`: every passive agent is emptied and the loot is shared out by
/// strength, each share rounded up.  Otherwise every aggressor pays a flat
/// `ceil(total passive strength / aggressor count)`.
pub fn intimidation(
    aggressive: &mut [Agent],
    passive: &mut [Agent],
    ratio: f64,
) -> EncounterResult<()> {
    let aggressive_strength = total_strength(aggressive);
    let passive_strength = total_strength(passive);

    if aggressive_strength >= passive_strength * ratio {
        if !aggressive.is_empty() && aggressive_strength == 0.0 {
            return Err(division_by_zero("intimidation", "total aggressive strength"));
        }

        let stolen: f64 = passive
            .iter_mut()
            .map(|victim| {
                let gold = victim.gold();
                victim.remove_gold(gold)
            })
            .sum();

        for agent in aggressive.iter_mut() {
            let earned = ceil_share(stolen, agent.strength(), aggressive_strength)
                .ok_or_else(|| division_by_zero("intimidation", "total aggressive strength"))?;
            agent.add_gold(earned);
            trace!(agent = %agent.id(), earned, "intimidation share");
        }

        debug!(aggressive_strength, passive_strength, stolen, "intimidation succeeded");
    } else {
        let penalty = ceil_div(passive_strength, aggressive.len() as f64)
            .ok_or_else(|| division_by_zero("intimidation", "aggressive group size"))?;
        for agent in aggressive.iter_mut() {
            agent.remove_gold(penalty);
        }

        debug!(aggressive_strength, passive_strength, penalty, "intimidation failed");
    }
    Ok(())
}

/// Each aggressor robs the next unrobbed passive agent, pairing by position.
///
/// Surplus aggressors (or surplus victims) sit the raid out.  Returns the
/// number of robberies performed.
pub fn raid(aggressive: &mut [Agent], passive: &mut [Agent]) -> usize {
    let mut robberies = 0;
    for (robber, victim) in aggressive.iter_mut().zip(passive.iter_mut()) {
        let loot = robber.rob(victim);
        robberies += 1;
        trace!(robber = %robber.id(), victim = %victim.id(), loot, "raid robbery");
    }
    debug!(aggressive = aggressive.len(), passive = passive.len(), robberies, "raid resolved");
    robberies
}

/// A coordinated robbery.
///
/// The haul is `total aggressive strength - total passive strength`.  When
/// positive, passive agents lose it in proportion to their gold and
/// aggressors gain it in proportion to their strength (both rounded up, so
/// the two sides need not balance).  Win or lose, every aggressor then pays
/// an exposure penalty of `ceil((1 - own share of strength) * total passive
/// strength)`, which weighs heaviest on the weakest members.
pub fn heist(aggressive: &mut [Agent], passive: &mut [Agent]) -> EncounterResult<()> {
    let aggressive_strength = total_strength(aggressive);
    let passive_strength = total_strength(passive);
    let passive_gold = total_gold_owned(passive);
    let haul = aggressive_strength - passive_strength;

    if haul > 0.0 && !passive.is_empty() && passive_gold == 0.0 {
        return Err(division_by_zero("heist", "total passive gold"));
    }
    if !aggressive.is_empty() && aggressive_strength == 0.0 {
        return Err(division_by_zero("heist", "total aggressive strength"));
    }

    if haul > 0.0 {
        for victim in passive.iter_mut() {
            let lost = ceil_share(haul, victim.gold(), passive_gold)
                .ok_or_else(|| division_by_zero("heist", "total passive gold"))?;
            victim.remove_gold(lost);
            trace!(victim = %victim.id(), lost, "heist loss");
        }
        for agent in aggressive.iter_mut() {
            let gained = ceil_share(haul, agent.strength(), aggressive_strength)
                .ok_or_else(|| division_by_zero("heist", "total aggressive strength"))?;
            agent.add_gold(gained);
            trace!(agent = %agent.id(), gained, "heist share");
        }
    }

    for agent in aggressive.iter_mut() {
        let penalty = ((1.0 - agent.strength() / aggressive_strength) * passive_strength).ceil();
        agent.remove_gold(penalty);
        trace!(agent = %agent.id(), penalty, "heist exposure");
    }

    debug!(aggressive_strength, passive_strength, haul, "heist resolved");
    Ok(())
}

/// Everyone robs their right-hand neighbour: agent `i` robs agent
/// `(i + 1) % n`, in input order.
///
/// Robberies are applied immediately, so an agent robbed early in the pass
/// has less left when its own victim comes around.  A lone agent would rob
/// itself, which changes nothing.
pub fn sabotage(agents: &mut [Agent]) {
    let n = agents.len();
    for i in 0..n {
        let j = (i + 1) % n;
        if i == j {
            continue;
        }
        let (robber, victim) = pair_mut(agents, i, j);
        let loot = robber.rob(victim);
        trace!(robber = %robber.id(), victim = %victim.id(), loot, "sabotage robbery");
    }
    debug!(agents = n, "sabotage resolved");
}

/// The strongest agent wins and takes half of everyone's gold.
///
/// Ties go to the earliest agent in input order.  Each loser pays
/// `ceil(gold / 2)` as prize plus `ceil(winner strength / 2)` as fighting
/// penalty.  The winner collects the prizes and then pays
/// `ceil(average loser strength / 3)`.  Needs at least two agents.
pub fn combat(agents: &mut [Agent]) -> EncounterResult<()> {
    if agents.len() < 2 {
        return Err(division_by_zero("combat", "loser count"));
    }

    let order = order_by_strength_descending(agents);
    let (winner, losers) = (order[0], &order[1..]);
    let winner_strength = agents[winner].strength();
    let fighting_penalty = ceil_half(winner_strength);

    let mut prize = 0.0;
    let mut loser_strength = 0.0;
    for &i in losers {
        let loser = &mut agents[i];
        let lost = ceil_half(loser.gold());
        loser.remove_gold(lost + fighting_penalty);
        prize += lost;
        loser_strength += loser.strength();
        trace!(loser = %loser.id(), lost, fighting_penalty, "combat loss");
    }

    let average_loser_strength = loser_strength / losers.len() as f64;
    let winner_penalty = (average_loser_strength / 3.0).ceil();
    let champion = &mut agents[winner];
    champion.add_gold(prize);
    champion.remove_gold(winner_penalty);

    debug!(winner = %champion.id(), prize, winner_penalty, "combat resolved");
    Ok(())
}

/// Two distinct mutable borrows out of one slice.
fn pair_mut(agents: &mut [Agent], a: usize, b: usize) -> (&mut Agent, &mut Agent) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = agents.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = agents.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}
