//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `GhError` as one variant
//! via `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `gh-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GhError {
    #[error("{what} must be a finite, non-negative quantity (got {value})")]
    InvalidQuantity { what: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `gh-*` crates.
pub type GhResult<T> = Result<T, GhError>;

/// Reject NaN, infinities and negatives with [`GhError::InvalidQuantity`].
pub fn ensure_quantity(what: &'static str, value: f64) -> GhResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GhError::InvalidQuantity { what, value })
    }
}
