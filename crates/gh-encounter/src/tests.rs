//! Unit tests for gh-encounter.

use gh_agent::{Agent, AgentBuilder};
use gh_core::AgentId;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Route engine logs to the test harness.  `RUST_LOG=gh_encounter=trace`
/// shows every transfer.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fighter(id: u32, strength: f64, gold: f64) -> Agent {
    AgentBuilder::new("robber", AgentId(id))
        .strength(strength)
        .gold(gold)
        .build()
        .unwrap()
}

fn digger(id: u32, max_gold_per_turn: f64, gold: f64) -> Agent {
    AgentBuilder::new("digger", AgentId(id))
        .max_gold_per_turn(max_gold_per_turn)
        .gold(gold)
        .build()
        .unwrap()
}

fn golds(agents: &[Agent]) -> Vec<f64> {
    agents.iter().map(Agent::gold).collect()
}

// ── Aggregate queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregate {
    use crate::aggregate::*;
    use crate::EncounterError;

    use super::*;

    #[test]
    fn total_strength_sums_group() {
        let group = vec![fighter(0, 3.0, 0.0), fighter(1, 4.5, 0.0), fighter(2, 2.5, 0.0)];
        let expected: f64 = group.iter().map(Agent::strength).sum();
        assert_eq!(total_strength(&group), expected);
        assert_eq!(total_strength(&group), 10.0);
        assert_eq!(total_strength(&[]), 0.0);
    }

    #[test]
    fn average_strength_of_empty_group_fails() {
        assert_eq!(
            average_strength(&[]).unwrap_err(),
            EncounterError::DivisionByZero { context: "average_strength", divisor: "group size" }
        );
        let pair = vec![fighter(0, 2.0, 0.0), fighter(1, 4.0, 0.0)];
        assert_eq!(average_strength(&pair).unwrap(), 3.0);
    }

    #[test]
    fn total_max_gold_per_turn_is_last_agent() {
        let group = vec![digger(0, 5.0, 0.0), digger(1, 9.0, 0.0), digger(2, 2.0, 0.0)];
        assert_eq!(total_max_gold_per_turn(&group), 2.0);
        assert_eq!(summed_max_gold_per_turn(&group), 16.0);
        assert_eq!(total_max_gold_per_turn(&[]), 0.0);
    }

    #[test]
    fn total_gold_owned_sums_group() {
        let group = vec![fighter(0, 1.0, 7.0), fighter(1, 1.0, 3.5)];
        assert_eq!(total_gold_owned(&group), 10.5);
    }

    #[test]
    fn orderings_are_stable() {
        let by_gold = vec![
            fighter(0, 1.0, 5.0),
            fighter(1, 1.0, 1.0),
            fighter(2, 1.0, 5.0),
            fighter(3, 1.0, 0.0),
        ];
        assert_eq!(order_by_gold_ascending(&by_gold), vec![3, 1, 0, 2]);

        let by_strength = vec![
            fighter(0, 2.0, 0.0),
            fighter(1, 7.0, 0.0),
            fighter(2, 7.0, 0.0),
            fighter(3, 1.0, 0.0),
        ];
        assert_eq!(order_by_strength_descending(&by_strength), vec![1, 2, 0, 3]);
    }
}

// ── Digging ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod digging {
    use gh_core::{GoldVein, Resource, Unlimited};

    use crate::digging::*;
    use crate::{EncounterError, MaxGoldAggregation};

    use super::*;

    #[test]
    fn priority_digging_follows_slice_order() {
        let mut group = vec![digger(0, 6.0, 0.0), digger(1, 6.0, 0.0), digger(2, 6.0, 0.0)];
        let mut vein = GoldVein::depleting(10.0).unwrap();
        priority_digging(&mut group, &mut vein);
        assert_eq!(golds(&group), vec![6.0, 4.0, 0.0]);
        assert!(vein.is_exhausted());
    }

    #[test]
    fn collective_digging_pools_without_paying() {
        let group = vec![digger(0, 4.0, 1.0), digger(1, 4.0, 1.0), digger(2, 4.0, 1.0)];
        let mut vein = GoldVein::depleting(10.0).unwrap();
        assert_eq!(collective_digging(&group, &mut vein), 10.0);
        assert_eq!(golds(&group), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn collaboration_rounds_each_share_up() {
        init_tracing();
        let mut group = vec![digger(0, 4.0, 0.0), digger(1, 4.0, 0.0), digger(2, 4.0, 0.0)];
        let mut vein = GoldVein::depleting(10.0).unwrap();
        collaboration(&mut group, &mut vein).unwrap();
        // pool 10, ceil(10 / 3) = 4 each: 12 paid out for 10 dug.
        assert_eq!(golds(&group), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn collaboration_share_bounds() {
        for pool in 0..20u32 {
            for n in 1..6u32 {
                // The first digger's appetite exceeds the vein, so the pool is exact.
                let mut group: Vec<Agent> = (0..n).map(|i| digger(i, 100.0, 0.0)).collect();
                let mut vein = GoldVein::depleting(f64::from(pool)).unwrap();
                collaboration(&mut group, &mut vein).unwrap();

                let share = (f64::from(pool) / f64::from(n)).ceil();
                assert!(group.iter().all(|a| a.gold() == share), "pool {pool}, n {n}");
                let paid: f64 = golds(&group).iter().sum();
                assert!(paid >= f64::from(pool));
                assert!(paid - f64::from(pool) <= f64::from(n - 1));
            }
        }
    }

    #[test]
    fn collaboration_of_empty_group_fails() {
        let mut vein = GoldVein::depleting(10.0).unwrap();
        let err = collaboration(&mut [], &mut vein).unwrap_err();
        assert_eq!(
            err,
            EncounterError::DivisionByZero { context: "collaboration", divisor: "group size" }
        );
        assert_eq!(vein.remaining(), Some(10.0));
    }

    /// A rich strong agent, a broke weak one and a middling one.
    fn village() -> Vec<Agent> {
        let mk = |id, strength, gold| {
            AgentBuilder::new("digger", AgentId(id))
                .strength(strength)
                .max_gold_per_turn(6.0)
                .gold(gold)
                .build()
                .unwrap()
        };
        vec![mk(0, 10.0, 50.0), mk(1, 1.0, 0.0), mk(2, 5.0, 20.0)]
    }

    #[test]
    fn philanthropy_lets_the_poor_dig_first() {
        let mut group = village();
        let mut vein = GoldVein::depleting(10.0).unwrap();
        philanthropy(&mut group, &mut vein);
        // Order: agent 1 (0 gold), agent 2 (20), agent 0 (50).
        assert_eq!(golds(&group), vec![50.0, 6.0, 24.0]);
    }

    #[test]
    fn monopoly_lets_the_strong_dig_first() {
        let mut group = village();
        let mut vein = GoldVein::depleting(10.0).unwrap();
        monopoly(&mut group, &mut vein);
        // Order: agent 0 (strength 10), agent 2 (5), agent 1 (1).
        assert_eq!(golds(&group), vec![56.0, 0.0, 24.0]);
    }

    #[test]
    fn philanthropy_and_monopoly_diverge_on_finite_vein() {
        let (mut a, mut b) = (village(), village());
        philanthropy(&mut a, &mut GoldVein::depleting(10.0).unwrap());
        monopoly(&mut b, &mut GoldVein::depleting(10.0).unwrap());
        assert_ne!(golds(&a), golds(&b));
    }

    #[test]
    fn philanthropy_ties_keep_input_order() {
        let mut group = vec![digger(0, 6.0, 0.0), digger(1, 6.0, 0.0)];
        philanthropy(&mut group, &mut GoldVein::depleting(6.0).unwrap());
        assert_eq!(golds(&group), vec![6.0, 0.0]);
    }

    #[test]
    fn competition_divides_by_last_agent_rate() {
        let mut group = vec![digger(0, 2.0, 0.0), digger(1, 4.0, 0.0)];
        competition(&mut group, &mut Unlimited, MaxGoldAggregation::LastAgent).unwrap();
        // pool 6, denominator 4 (last agent): 2*6/4 = 3, 4*6/4 = 6.
        assert_eq!(golds(&group), vec![3.0, 6.0]);
    }

    #[test]
    fn competition_with_true_sum_splits_pool_exactly() {
        let mut group = vec![digger(0, 2.0, 0.0), digger(1, 4.0, 0.0)];
        competition(&mut group, &mut Unlimited, MaxGoldAggregation::Sum).unwrap();
        assert_eq!(golds(&group), vec![2.0, 4.0]);
    }

    #[test]
    fn competition_with_zero_denominator_fails_untouched() {
        let mut group = vec![digger(0, 3.0, 1.0), digger(1, 0.0, 1.0)];
        let mut vein = GoldVein::depleting(10.0).unwrap();
        let err = competition(&mut group, &mut vein, MaxGoldAggregation::LastAgent).unwrap_err();
        assert!(matches!(err, EncounterError::DivisionByZero { context: "competition", .. }));
        assert_eq!(golds(&group), vec![1.0, 1.0]);
        assert_eq!(vein.remaining(), Some(10.0));

        assert!(competition(&mut [], &mut vein, MaxGoldAggregation::Sum).is_err());
    }
}

// ── Conflict ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod conflict {
    use crate::conflict::*;
    use crate::EncounterError;

    use super::*;

    #[test]
    fn intimidation_succeeds_at_exactly_double() {
        init_tracing();
        let mut aggressive = vec![fighter(0, 4.0, 0.0), fighter(1, 2.0, 0.0)];
        let mut passive = vec![fighter(2, 3.0, 10.0)];
        intimidation(&mut aggressive, &mut passive, 2.0).unwrap();
        assert_eq!(golds(&passive), vec![0.0]);
        // ceil(10 * 4/6) = 7, ceil(10 * 2/6) = 4.
        assert_eq!(golds(&aggressive), vec![7.0, 4.0]);
    }

    #[test]
    fn failed_intimidation_charges_flat_penalty() {
        let mut aggressive = vec![fighter(0, 3.0, 10.0), fighter(1, 2.0, 1.0)];
        let mut passive = vec![fighter(2, 3.0, 10.0)];
        intimidation(&mut aggressive, &mut passive, 2.0).unwrap();
        // 5 < 6: each aggressor pays ceil(3 / 2) = 2, clamped at zero.
        assert_eq!(golds(&aggressive), vec![8.0, 0.0]);
        assert_eq!(golds(&passive), vec![10.0]);
    }

    #[test]
    fn intimidation_without_aggressors_fails_untouched() {
        let mut passive = vec![fighter(0, 3.0, 10.0)];
        let err = intimidation(&mut [], &mut passive, 2.0).unwrap_err();
        assert_eq!(
            err,
            EncounterError::DivisionByZero {
                context: "intimidation",
                divisor: "aggressive group size",
            }
        );
        assert_eq!(golds(&passive), vec![10.0]);
    }

    #[test]
    fn intimidation_with_zero_strength_fails_untouched() {
        let mut aggressive = vec![fighter(0, 0.0, 0.0)];
        let mut passive = vec![fighter(1, 0.0, 9.0)];
        assert!(intimidation(&mut aggressive, &mut passive, 2.0).is_err());
        assert_eq!(golds(&passive), vec![9.0]);
    }

    #[test]
    fn raid_pairs_robbers_with_first_unrobbed_victims() {
        let mut aggressive = vec![fighter(0, 5.0, 0.0), fighter(1, 5.0, 0.0), fighter(2, 5.0, 0.0)];
        let mut passive = vec![fighter(3, 1.0, 20.0), fighter(4, 1.0, 3.0)];
        assert_eq!(raid(&mut aggressive, &mut passive), 2);
        assert_eq!(golds(&aggressive), vec![5.0, 3.0, 0.0]);
        assert_eq!(golds(&passive), vec![15.0, 0.0]);
        // The caller's passive group is not consumed.
        assert_eq!(passive.len(), 2);
    }

    #[test]
    fn heist_with_positive_haul() {
        let mut aggressive = vec![fighter(0, 6.0, 10.0), fighter(1, 4.0, 10.0)];
        let mut passive = vec![fighter(2, 2.0, 30.0), fighter(3, 2.0, 10.0)];
        heist(&mut aggressive, &mut passive).unwrap();
        // haul 6: passive lose ceil(4.5) = 5 and ceil(1.5) = 2.
        assert_eq!(golds(&passive), vec![25.0, 8.0]);
        // gains ceil(3.6) = 4, ceil(2.4) = 3; exposure ceil(1.6) = 2, ceil(2.4) = 3.
        assert_eq!(golds(&aggressive), vec![12.0, 10.0]);
    }

    #[test]
    fn heist_without_haul_still_charges_exposure() {
        let mut aggressive = vec![fighter(0, 2.0, 10.0), fighter(1, 2.0, 1.0)];
        let mut passive = vec![fighter(2, 5.0, 20.0)];
        heist(&mut aggressive, &mut passive).unwrap();
        assert_eq!(golds(&passive), vec![20.0]);
        // ceil((1 - 0.5) * 5) = 3 each.
        assert_eq!(golds(&aggressive), vec![7.0, 0.0]);
    }

    #[test]
    fn heist_on_broke_victims_fails_untouched() {
        let mut aggressive = vec![fighter(0, 10.0, 1.0)];
        let mut passive = vec![fighter(1, 1.0, 0.0)];
        let err = heist(&mut aggressive, &mut passive).unwrap_err();
        assert_eq!(
            err,
            EncounterError::DivisionByZero { context: "heist", divisor: "total passive gold" }
        );
        assert_eq!(golds(&aggressive), vec![1.0]);
    }

    #[test]
    fn heist_with_powerless_aggressors_fails() {
        let mut aggressive = vec![fighter(0, 0.0, 4.0)];
        let mut passive = vec![fighter(1, 0.0, 5.0)];
        assert!(matches!(
            heist(&mut aggressive, &mut passive),
            Err(EncounterError::DivisionByZero { divisor: "total aggressive strength", .. })
        ));
        assert_eq!(golds(&aggressive), vec![4.0]);
    }

    #[test]
    fn sabotage_is_circular_and_sequential() {
        let mut group = vec![fighter(0, 5.0, 10.0), fighter(1, 5.0, 0.0), fighter(2, 5.0, 3.0)];
        sabotage(&mut group);
        // 0 robs 1 (nothing), 1 robs 2 (3), 2 robs 0 (5).
        assert_eq!(golds(&group), vec![5.0, 3.0, 5.0]);
    }

    #[test]
    fn sabotage_of_lone_or_empty_group_is_noop() {
        let mut lone = vec![fighter(0, 5.0, 10.0)];
        sabotage(&mut lone);
        assert_eq!(golds(&lone), vec![10.0]);
        sabotage(&mut []);
    }

    #[test]
    fn combat_strongest_takes_half() {
        init_tracing();
        let mut group = vec![fighter(0, 10.0, 100.0), fighter(1, 5.0, 50.0), fighter(2, 3.0, 20.0)];
        combat(&mut group).unwrap();
        // Losers: 50 - (25 + 5) = 20, 20 - (10 + 5) = 5.
        // Winner: 100 + 35 - ceil(4 / 3) = 133.
        assert_eq!(golds(&group), vec![133.0, 20.0, 5.0]);
    }

    #[test]
    fn combat_winner_need_not_be_first() {
        let mut group = vec![fighter(0, 3.0, 20.0), fighter(1, 10.0, 100.0), fighter(2, 5.0, 50.0)];
        combat(&mut group).unwrap();
        assert_eq!(golds(&group), vec![5.0, 133.0, 20.0]);
    }

    #[test]
    fn combat_tie_goes_to_earliest() {
        let mut group = vec![fighter(0, 4.0, 10.0), fighter(1, 4.0, 10.0)];
        combat(&mut group).unwrap();
        // Loser: 10 - (5 + 2) = 3.  Winner: 10 + 5 - ceil(4 / 3) = 13.
        assert_eq!(golds(&group), vec![13.0, 3.0]);
    }

    #[test]
    fn combat_needs_two_agents() {
        let mut lone = vec![fighter(0, 4.0, 10.0)];
        assert_eq!(
            combat(&mut lone).unwrap_err(),
            EncounterError::DivisionByZero { context: "combat", divisor: "loser count" }
        );
        assert_eq!(golds(&lone), vec![10.0]);
        assert!(combat(&mut []).is_err());
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use gh_core::{GhError, GoldVein};

    use crate::{
        EncounterConfig, EncounterEngine, EncounterError, GroupShape, MaxGoldAggregation,
        Participants, Strategy,
    };

    use super::*;

    #[test]
    fn strategy_names_roundtrip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>().unwrap(), s);
        }
        assert_eq!(" Heist ".parse::<Strategy>().unwrap(), Strategy::Heist);
        assert!("ambush".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_shapes() {
        assert_eq!(Strategy::Raid.shape(), GroupShape::Dual);
        assert_eq!(Strategy::Combat.shape(), GroupShape::Single);
        assert!(Strategy::Monopoly.needs_resource());
        assert!(!Strategy::Sabotage.needs_resource());
    }

    #[test]
    fn run_dispatches_single_group() {
        let mut group = vec![fighter(0, 10.0, 100.0), fighter(1, 5.0, 50.0), fighter(2, 3.0, 20.0)];
        EncounterEngine::default()
            .run(Strategy::Combat, Participants::Single(&mut group), None)
            .unwrap();
        assert_eq!(golds(&group), vec![133.0, 20.0, 5.0]);
    }

    #[test]
    fn run_dispatches_dual_group() {
        let mut aggressive = vec![fighter(0, 5.0, 0.0)];
        let mut passive = vec![fighter(1, 1.0, 8.0)];
        EncounterEngine::default()
            .run(
                Strategy::Raid,
                Participants::Dual { aggressive: &mut aggressive, passive: &mut passive },
                None,
            )
            .unwrap();
        assert_eq!(golds(&aggressive), vec![5.0]);
        assert_eq!(golds(&passive), vec![3.0]);
    }

    #[test]
    fn run_rejects_wrong_shape() {
        let mut group = vec![fighter(0, 1.0, 1.0)];
        let err = EncounterEngine::default()
            .run(Strategy::Raid, Participants::Single(&mut group), None)
            .unwrap_err();
        assert!(matches!(err, EncounterError::ArgumentShape(_)));
    }

    #[test]
    fn run_digging_without_resource_fails() {
        let mut group = vec![digger(0, 1.0, 0.0)];
        let err = EncounterEngine::default()
            .run(Strategy::Collaboration, Participants::Single(&mut group), None)
            .unwrap_err();
        assert_eq!(err, EncounterError::MissingResource(Strategy::Collaboration));
    }

    #[test]
    fn run_uses_configured_aggregation() {
        let engine = EncounterEngine::new(EncounterConfig {
            max_gold_aggregation: MaxGoldAggregation::Sum,
            ..EncounterConfig::default()
        })
        .unwrap();
        let mut group = vec![digger(0, 2.0, 0.0), digger(1, 4.0, 0.0)];
        let mut vein = GoldVein::depleting(100.0).unwrap();
        engine
            .run(Strategy::Competition, Participants::Single(&mut group), Some(&mut vein))
            .unwrap();
        assert_eq!(golds(&group), vec![2.0, 4.0]);
    }

    #[test]
    fn run_uses_configured_intimidation_ratio() {
        let engine = EncounterEngine::new(EncounterConfig {
            intimidation_ratio: 1.0,
            ..EncounterConfig::default()
        })
        .unwrap();
        let mut aggressive = vec![fighter(0, 5.0, 0.0)];
        let mut passive = vec![fighter(1, 5.0, 12.0)];
        engine
            .run(
                Strategy::Intimidation,
                Participants::Dual { aggressive: &mut aggressive, passive: &mut passive },
                None,
            )
            .unwrap();
        assert_eq!(golds(&aggressive), vec![12.0]);
        assert_eq!(golds(&passive), vec![0.0]);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = EncounterEngine::new(EncounterConfig {
            intimidation_ratio: -1.0,
            ..EncounterConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, EncounterError::Core(GhError::Config(_))));
    }
}

// ── Preview ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod preview {
    use std::ptr;

    use gh_core::{GoldVein, Resource};

    use crate::{EncounterEngine, EncounterError, PreviewArgs, Strategy};

    use super::*;

    fn brawl() -> Vec<Agent> {
        vec![fighter(0, 10.0, 100.0), fighter(1, 5.0, 50.0), fighter(2, 3.0, 20.0)]
    }

    #[test]
    fn combat_preview_leaves_originals_untouched() {
        init_tracing();
        let agents = brawl();
        let preview = EncounterEngine::default()
            .preview(Strategy::Combat, PreviewArgs::single(&agents))
            .unwrap();

        assert_eq!(golds(&agents), vec![100.0, 50.0, 20.0]);
        assert_eq!(preview.len(), agents.len());
        for (i, entry) in preview.entries().iter().enumerate() {
            assert!(ptr::eq(entry.original, &agents[i]));
        }
        let simulated: Vec<f64> = preview.entries().iter().map(|e| e.simulated.gold()).collect();
        assert_eq!(simulated, vec![133.0, 20.0, 5.0]);
        let deltas: Vec<f64> = preview.entries().iter().map(|e| e.gold_delta()).collect();
        assert_eq!(deltas, vec![33.0, -30.0, -15.0]);
        assert_eq!(preview.simulated_for(&agents[1]).unwrap().gold(), 20.0);
        assert_eq!(preview.total_gold_delta(), -12.0);
    }

    #[test]
    fn lookup_is_by_reference_not_by_value() {
        let agents = brawl();
        let twin = agents[0].clone();
        let preview = EncounterEngine::default()
            .preview(Strategy::Combat, PreviewArgs::single(&agents))
            .unwrap();
        assert!(preview.simulated_for(&twin).is_none());
    }

    #[test]
    fn dual_preview_pairs_passive_then_aggressive() {
        let passive = vec![fighter(10, 3.0, 10.0)];
        let aggressive = vec![fighter(0, 4.0, 0.0), fighter(1, 2.0, 0.0)];
        let preview = EncounterEngine::default()
            .preview(Strategy::Intimidation, PreviewArgs::dual(&passive, &aggressive))
            .unwrap();

        let ids: Vec<AgentId> = preview.entries().iter().map(|e| e.original.id()).collect();
        assert_eq!(ids, vec![AgentId(10), AgentId(0), AgentId(1)]);
        let simulated: Vec<f64> = preview.entries().iter().map(|e| e.simulated.gold()).collect();
        assert_eq!(simulated, vec![0.0, 7.0, 4.0]);
        assert_eq!(golds(&passive), vec![10.0]);
        assert_eq!(golds(&aggressive), vec![0.0, 0.0]);
    }

    #[test]
    fn digging_preview_forks_the_resource() {
        let agents = vec![digger(0, 4.0, 0.0), digger(1, 4.0, 0.0), digger(2, 4.0, 0.0)];
        let vein = GoldVein::depleting(10.0).unwrap();
        let preview = EncounterEngine::default()
            .preview(
                Strategy::Collaboration,
                PreviewArgs::single(&agents).with_resource(&vein),
            )
            .unwrap();
        assert!(preview.entries().iter().all(|e| e.simulated.gold() == 4.0));
        assert_eq!(vein.remaining(), Some(10.0));
    }

    #[test]
    fn repeated_previews_agree() {
        let agents = brawl();
        let engine = EncounterEngine::default();
        let first = engine.preview(Strategy::Sabotage, PreviewArgs::single(&agents)).unwrap();
        let second = engine.preview(Strategy::Sabotage, PreviewArgs::single(&agents)).unwrap();
        let a: Vec<f64> = first.entries().iter().map(|e| e.simulated.gold()).collect();
        let b: Vec<f64> = second.entries().iter().map(|e| e.simulated.gold()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_arguments_rejected() {
        let agents = brawl();
        let engine = EncounterEngine::default();
        let shape_err = |args| {
            matches!(
                engine.preview(Strategy::Raid, args),
                Err(EncounterError::ArgumentShape(_))
            )
        };

        assert!(shape_err(PreviewArgs::default()));
        assert!(shape_err(PreviewArgs { passive: Some(&agents), ..PreviewArgs::default() }));
        assert!(shape_err(PreviewArgs {
            agents: Some(&agents),
            passive: Some(&agents),
            aggressive: Some(&agents),
            ..PreviewArgs::default()
        }));
        // Raid needs two groups, not one.
        assert!(shape_err(PreviewArgs::single(&agents)));
    }

    #[test]
    fn preview_propagates_strategy_errors() {
        let lone = vec![fighter(0, 1.0, 1.0)];
        let engine = EncounterEngine::default();
        assert!(matches!(
            engine.preview(Strategy::Combat, PreviewArgs::single(&lone)),
            Err(EncounterError::DivisionByZero { context: "combat", .. })
        ));
        assert_eq!(
            engine
                .preview(Strategy::Monopoly, PreviewArgs::single(&lone))
                .unwrap_err(),
            EncounterError::MissingResource(Strategy::Monopoly)
        );
    }
}
