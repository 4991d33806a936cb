//! Common imports for driving a world
//!
//! ```
//! use action_core::prelude::*;
//!
//! let mut world = World::new();
//! let hero = world.spawn_actor("Hero", None);
//! let goblin = world.spawn_actor("Goblin", None);
//! let club = world.spawn_object("club", None);
//! world.set(goblin, keys::LIFE, 3).unwrap();
//!
//! let mut swing = Action::new(club, "ATTACK.blunt");
//! swing.set(keys::DAMAGE, "3");
//! let outcome = world.take_action(hero, &mut swing, goblin, &mut FixedRoll(1)).unwrap();
//! assert!(outcome.is_kill());
//! ```

// Core types
pub use crate::attributes::{keys, AttrValue};
pub use crate::entity::World;
pub use crate::types::EntityId;

// Resolution
pub use crate::action::Action;
pub use crate::resolution::Outcome;
pub use crate::error::{ResolveError, WorldError};

// Dice
pub use crate::dice::{FixedRoll, Formula, RollSource, ScriptedRolls};

// Config
pub use crate::config::RulesConfig;
