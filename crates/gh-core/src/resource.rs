//! Depletable pools that agents dig from.
//!
//! The encounter engine never reads or writes a resource directly; it only
//! hands one to `Agent::dig`.  Depletion and regeneration policy belong to
//! the resource implementation.

use crate::error::{ensure_quantity, GhResult};
use crate::SimRng;

/// A pool of gold that agents extract from.
pub trait Resource {
    /// Take up to `requested` units out of the pool and return how much was
    /// actually granted.  Negative requests grant nothing.
    fn extract(&mut self, requested: f64) -> f64;

    /// Units left in the pool, or `None` if the pool never runs dry.
    fn remaining(&self) -> Option<f64>;

    /// Independent copy of the current state, used by previews so a dry run
    /// cannot deplete the live pool.
    fn fork(&self) -> Box<dyn Resource>;
}

// ── GoldVein ──────────────────────────────────────────────────────────────────

/// A finite vein that replenishes a random amount each turn, up to capacity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldVein {
    remaining: f64,
    capacity: f64,
    /// Upper bound (inclusive) of whole units added per `regenerate` call.
    regen_per_turn: u32,
}

impl GoldVein {
    /// A full vein of `capacity` units.
    pub fn new(capacity: f64, regen_per_turn: u32) -> GhResult<Self> {
        let capacity = ensure_quantity("vein capacity", capacity)?;
        Ok(Self { remaining: capacity, capacity, regen_per_turn })
    }

    /// A non-regenerating vein holding exactly `amount` units.
    pub fn depleting(amount: f64) -> GhResult<Self> {
        Self::new(amount, 0)
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// `true` once every unit has been extracted.
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Add a random whole amount in `0..=regen_per_turn`, capped at capacity.
    ///
    /// Returns the amount actually added.
    pub fn regenerate(&mut self, rng: &mut SimRng) -> f64 {
        if self.regen_per_turn == 0 {
            return 0.0;
        }
        let rolled = f64::from(rng.gen_range(0..=self.regen_per_turn));
        self.replenish(rolled)
    }

    /// Add `amount` units, capped at capacity.  Returns the amount added.
    pub fn replenish(&mut self, amount: f64) -> f64 {
        let before = self.remaining;
        self.remaining = (self.remaining + amount.max(0.0)).min(self.capacity);
        self.remaining - before
    }
}

impl Resource for GoldVein {
    fn extract(&mut self, requested: f64) -> f64 {
        let granted = requested.max(0.0).min(self.remaining);
        self.remaining -= granted;
        granted
    }

    fn remaining(&self) -> Option<f64> {
        Some(self.remaining)
    }

    fn fork(&self) -> Box<dyn Resource> {
        Box::new(self.clone())
    }
}

// ── Unlimited ─────────────────────────────────────────────────────────────────

/// A pool that grants every request in full.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unlimited;

impl Resource for Unlimited {
    fn extract(&mut self, requested: f64) -> f64 {
        requested.max(0.0)
    }

    fn remaining(&self) -> Option<f64> {
        None
    }

    fn fork(&self) -> Box<dyn Resource> {
        Box::new(*self)
    }
}
