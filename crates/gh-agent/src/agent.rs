//! The `Agent` aggregate: identity, stats, traits, inventory and the two
//! interaction primitives (`dig`, `rob`) that encounters build on.
//!
//! # Derived state
//!
//! `actions`, `offensive_actions` and `defensive_actions` are caches of the
//! trait set.  They are rebuilt by [`Agent::reload_traits`], which every
//! trait mutation calls, so they are never observed stale.  Traits live in a
//! `BTreeMap` keyed by name, so the rebuilt lists follow trait-name order.
//!
//! # Cloning
//!
//! `Agent: Clone` copies stats, inventory and properties, and bumps the
//! reference count of each shared `Arc<Trait>`.  Trait objects themselves are
//! never mutated, so a clone can be simulated freely without touching the
//! original.

use std::collections::BTreeMap;
use std::sync::Arc;

use gh_core::{AgentId, Resource};

use crate::inventory::{Inventory, GOLD};
use crate::{AgentError, AgentResult, KeyMap, PowerType, Property, Trait};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    kind: String,
    id:   AgentId,

    /// Hit points.  Not read by any encounter rule.
    pub health: f64,
    /// Turns survived.
    pub age: u32,
    /// Weight of this agent when the world counts its population.
    pub population_contribution: u32,

    pub(crate) strength:          f64,
    pub(crate) max_gold_per_turn: f64,

    pub(crate) traits:           BTreeMap<String, Arc<Trait>>,
    pub(crate) inventory:        Inventory,
    pub(crate) other_properties: KeyMap<Property>,

    // ── Derived from `traits` by `reload_traits` ──────────────────────────
    actions:           Vec<String>,
    offensive_actions: Vec<PowerType>,
    defensive_actions: Vec<PowerType>,
}

impl Agent {
    /// A bare agent with default stats, zero gold and no traits.
    ///
    /// [`AgentBuilder`](crate::AgentBuilder) starts from this and validates
    /// whatever the caller overrides.
    pub(crate) fn blank(kind: String, id: AgentId) -> Self {
        let mut inventory = Inventory::new();
        inventory.set(GOLD, 0.0);
        Self {
            kind,
            id,
            health: 1.0,
            age: 0,
            population_contribution: 1,
            strength: 1.0,
            max_gold_per_turn: 1.0,
            traits: BTreeMap::new(),
            inventory,
            other_properties: KeyMap::default(),
            actions: Vec::new(),
            offensive_actions: Vec::new(),
            defensive_actions: Vec::new(),
        }
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// Category tag, e.g. `"digger"` or `"robber"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    // ── Stats read by encounters ──────────────────────────────────────────

    #[inline]
    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn set_strength(&mut self, strength: f64) {
        self.strength = strength.max(0.0);
    }

    /// Most gold this agent asks of a resource in one dig.
    #[inline]
    pub fn max_gold_per_turn(&self) -> f64 {
        self.max_gold_per_turn
    }

    pub fn set_max_gold_per_turn(&mut self, amount: f64) {
        self.max_gold_per_turn = amount.max(0.0);
    }

    // ── Gold ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn gold(&self) -> f64 {
        self.inventory.quantity(GOLD)
    }

    pub fn add_gold(&mut self, amount: f64) {
        self.inventory.add(GOLD, amount);
    }

    /// Remove up to `amount` gold; returns what was actually taken.
    pub fn remove_gold(&mut self, amount: f64) -> f64 {
        self.inventory.remove(GOLD, amount)
    }

    // ── Interaction primitives ────────────────────────────────────────────

    /// Ask `resource` for `max_gold_per_turn` units and return what it
    /// granted.  The agent's own gold is left alone; callers decide where
    /// the haul goes.
    pub fn dig<R: Resource + ?Sized>(&self, resource: &mut R) -> f64 {
        resource.extract(self.max_gold_per_turn)
    }

    /// Take `min(victim gold, own strength)` from `victim`.  Returns the loot.
    pub fn rob(&mut self, victim: &mut Agent) -> f64 {
        let loot = victim.remove_gold(self.strength);
        self.add_gold(loot);
        loot
    }

    // ── Inventory ─────────────────────────────────────────────────────────

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add_to_inventory(&mut self, key: impl Into<String>, amount: f64) {
        self.inventory.add(key, amount);
    }

    pub fn update_inventory(&mut self, key: impl Into<String>, value: f64) {
        self.inventory.set(key, value);
    }

    pub fn remove_from_inventory(&mut self, key: &str, amount: f64) -> f64 {
        self.inventory.remove(key, amount)
    }

    pub fn get_from_inventory(&self, key: &str) -> AgentResult<f64> {
        self.inventory.get(key)
    }

    pub fn delete_key_from_inventory(&mut self, key: &str) -> AgentResult<f64> {
        self.inventory.delete(key).ok_or_else(|| AgentError::MissingKey {
            store: "inventory",
            key:   key.to_owned(),
        })
    }

    // ── Traits ────────────────────────────────────────────────────────────

    /// Attach `t`, replacing any trait with the same name.
    pub fn add_trait(&mut self, t: impl Into<Arc<Trait>>) {
        let t = t.into();
        self.traits.insert(t.name().to_owned(), t);
        self.reload_traits();
    }

    pub fn remove_trait(&mut self, t: &Trait) -> AgentResult<Arc<Trait>> {
        self.remove_trait_by_name(t.name())
    }

    pub fn remove_trait_by_name(&mut self, name: &str) -> AgentResult<Arc<Trait>> {
        let removed = self
            .traits
            .remove(name)
            .ok_or_else(|| AgentError::UnknownTrait(name.to_owned()))?;
        self.reload_traits();
        Ok(removed)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    pub fn traits(&self) -> impl Iterator<Item = &Trait> + '_ {
        self.traits.values().map(Arc::as_ref)
    }

    /// Rebuild the derived action lists from the current trait set.
    ///
    /// Idempotent: calling it twice in a row yields the same lists.
    pub fn reload_traits(&mut self) {
        self.actions.clear();
        self.offensive_actions.clear();
        self.defensive_actions.clear();
        for t in self.traits.values() {
            self.actions.extend(t.actions().iter().cloned());
            self.offensive_actions.extend_from_slice(t.offensive_actions());
            self.defensive_actions.extend_from_slice(t.defensive_actions());
        }
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

    // ── Other properties ──────────────────────────────────────────────────

    pub fn set_other_property(&mut self, key: impl Into<String>, value: impl Into<Property>) {
        self.other_properties.insert(key.into(), value.into());
    }

    pub fn get_other_property(&self, key: &str) -> AgentResult<&Property> {
        self.other_properties.get(key).ok_or_else(|| AgentError::MissingKey {
            store: "other properties",
            key:   key.to_owned(),
        })
    }
}
