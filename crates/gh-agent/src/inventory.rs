//! Per-agent item quantities.
//!
//! Quantities are never negative: every write path clamps at zero, so a
//! removal larger than the holding empties the slot instead of going into
//! debt.  The backing map is private; callers only see the methods below.

use crate::{AgentError, AgentResult, KeyMap};

/// Inventory key used by every encounter strategy.
pub const GOLD: &str = "gold";

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: KeyMap<f64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, creating the slot if absent.
    pub fn add(&mut self, key: impl Into<String>, amount: f64) {
        let slot = self.items.entry(key.into()).or_insert(0.0);
        *slot = clamp(*slot + amount);
    }

    /// Overwrite `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.items.insert(key.into(), clamp(value));
    }

    /// Subtract `amount` from `key` and return how much was actually removed.
    ///
    /// An absent key is created at zero.
    pub fn remove(&mut self, key: &str, amount: f64) -> f64 {
        match self.items.get_mut(key) {
            Some(slot) => {
                let before = *slot;
                *slot = clamp(before - amount);
                before - *slot
            }
            None => {
                self.items.insert(key.to_owned(), 0.0);
                0.0
            }
        }
    }

    /// Quantity held under `key`.
    pub fn get(&self, key: &str) -> AgentResult<f64> {
        self.items.get(key).copied().ok_or_else(|| AgentError::MissingKey {
            store: "inventory",
            key:   key.to_owned(),
        })
    }

    /// Quantity held under `key`, zero when absent.
    #[inline]
    pub fn quantity(&self, key: &str) -> f64 {
        self.items.get(key).copied().unwrap_or(0.0)
    }

    /// Drop the slot entirely, returning what it held.
    pub fn delete(&mut self, key: &str) -> Option<f64> {
        self.items.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[inline]
fn clamp(value: f64) -> f64 {
    // NaN.max(0.0) is 0.0, so a poisoned amount also lands on zero.
    value.max(0.0)
}
