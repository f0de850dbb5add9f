//! Ceiling arithmetic shared by the encounter strategies.
//!
//! Every helper returns `None` instead of dividing by zero so callers can
//! turn the condition into their own error variant.  The operand order of
//! each helper is fixed: `ceil(amount * (part / whole))` and
//! `ceil(amount * part / whole)` round differently for some inputs, and
//! replays must reproduce the exact same gold.

/// `ceil(numerator / denominator)`, or `None` when `denominator == 0`.
#[inline]
pub fn ceil_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some((numerator / denominator).ceil())
    }
}

/// `ceil(amount * (part / whole))`, or `None` when `whole == 0`.
#[inline]
pub fn ceil_share(amount: f64, part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some((amount * (part / whole)).ceil())
    }
}

/// `ceil(value / 2)`, the "half, rounded up" used by combat.
#[inline]
pub fn ceil_half(value: f64) -> f64 {
    (value / 2.0).ceil()
}
