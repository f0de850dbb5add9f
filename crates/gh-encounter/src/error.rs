use gh_core::GhError;
use thiserror::Error;

use crate::Strategy;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncounterError {
    /// A group-derived divisor was zero (empty group, zero total strength,
    /// zero total gold, ...).  Nothing was mutated.
    #[error("{context}: division by zero ({divisor} is zero)")]
    DivisionByZero {
        context: &'static str,
        divisor: &'static str,
    },

    #[error("malformed encounter arguments: {0}")]
    ArgumentShape(String),

    #[error("{0} needs a resource to dig from")]
    MissingResource(Strategy),

    #[error(transparent)]
    Core(#[from] GhError),
}

pub type EncounterResult<T> = Result<T, EncounterError>;

/// Build a [`EncounterError::DivisionByZero`], logging the rejection.
pub(crate) fn division_by_zero(context: &'static str, divisor: &'static str) -> EncounterError {
    tracing::warn!(context, divisor, "encounter rejected: division by zero");
    EncounterError::DivisionByZero { context, divisor }
}

/// Build a [`EncounterError::ArgumentShape`], logging the rejection.
pub(crate) fn argument_shape(message: String) -> EncounterError {
    tracing::warn!(%message, "encounter rejected: malformed arguments");
    EncounterError::ArgumentShape(message)
}
