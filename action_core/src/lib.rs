//! action_core - Action resolution engine for turn-based role-playing games
//!
//! This library provides:
//! - Dice: formula parsing and rolling against an injected roll source
//! - AttributeStore: layered `BASE` / `BASE.SUBTYPE` attributes
//! - World: an arena of objects, actors and nested contexts
//! - Action: turns accuracy/damage or power/stacks into a delivery
//! - Resolution: per-target handler chains producing an [`Outcome`]

pub mod action;
pub mod attributes;
pub mod config;
pub mod dice;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod resolution;
pub mod types;

// Re-export core types for convenience
pub use action::Action;
pub use attributes::{keys, AttrValue, AttributeStore};
pub use config::{ConfigError, RulesConfig};
pub use dice::{FixedRoll, Formula, FormulaError, RollSource, ScriptedRolls};
pub use entity::{ActorState, ContextState, Entity, Role, World};
pub use error::{ResolveError, WorldError};
pub use resolution::Outcome;
pub use types::{EntityId, Verb};
