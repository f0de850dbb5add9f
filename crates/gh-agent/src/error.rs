use gh_core::GhError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    #[error("no {store} entry with key {key:?}")]
    MissingKey { store: &'static str, key: String },

    #[error("agent has no trait named {0:?}")]
    UnknownTrait(String),

    #[error(transparent)]
    Invalid(#[from] GhError),
}

pub type AgentResult<T> = Result<T, AgentError>;
