//! Error types for world management and action resolution

use crate::dice::FormulaError;
use crate::types::EntityId;
use thiserror::Error;

/// Invalid use of the entity arena
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),
    #[error("entity {0} is not an actor")]
    NotAnActor(EntityId),
    #[error("entity {0} is not a context")]
    NotAContext(EntityId),
}

/// Failure while resolving an action
///
/// Raised before any target state changes, so a failed resolution never
/// leaves a half-applied outcome behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error("attribute {key} holds a malformed formula: {source}")]
    Formula {
        key: String,
        #[source]
        source: FormulaError,
    },
}

