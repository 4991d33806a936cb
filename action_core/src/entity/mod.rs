//! Entities - objects, actors and contexts
//!
//! Every entity owns a name, an optional description and an attribute
//! store. Its [`Role`] decides how it receives actions and whether its
//! attribute lookups fall back to a parent.

mod actor;
mod context;
mod world;

pub use actor::ActorState;
pub use context::ContextState;
pub use world::World;

use crate::attributes::{AttrValue, AttributeStore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of entity this is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Role {
    /// A plain object: weapons, skills, furniture
    Object,
    Actor(ActorState),
    Context(ContextState),
}

/// A named holder of attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub description: Option<String>,
    pub attributes: AttributeStore,
    role: Role,
}

impl Entity {
    /// Create a plain object entity
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self::with_role(name, description, Role::Object)
    }

    pub(crate) fn with_role(name: impl Into<String>, description: Option<&str>, role: Role) -> Self {
        Entity {
            name: name.into(),
            description: description.map(str::to_string),
            attributes: AttributeStore::new(),
            role,
        }
    }

    /// Own attribute value, without any context fallback
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.set(key, value);
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn as_actor(&self) -> Option<&ActorState> {
        match &self.role {
            Role::Actor(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn as_actor_mut(&mut self) -> Option<&mut ActorState> {
        match &mut self.role {
            Role::Actor(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&ContextState> {
        match &self.role {
            Role::Context(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn as_context_mut(&mut self) -> Option<&mut ContextState> {
        match &mut self.role {
            Role::Context(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_actor(&self) -> bool {
        self.as_actor().is_some()
    }

    pub fn is_context(&self) -> bool {
        self.as_context().is_some()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}({})", self.name, description),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity() {
        let describe = "simple get/set test object";
        let entity = Entity::new("GameObject 1", Some(describe));
        assert_eq!(entity.name, "GameObject 1");
        assert_eq!(entity.description.as_deref(), Some(describe));
        assert!(entity.attributes.is_empty());
        assert_eq!(entity.role(), &Role::Object);
    }

    #[test]
    fn test_display() {
        assert_eq!(Entity::new("bench", Some("obvious object")).to_string(), "bench(obvious object)");
        assert_eq!(Entity::new("coin", None).to_string(), "coin");
    }

    #[test]
    fn test_role_accessors() {
        let actor = Entity::with_role("Hero", None, Role::Actor(ActorState::default()));
        assert!(actor.is_actor());
        assert!(!actor.is_context());
        assert!(actor.as_actor().unwrap().is_alive());
    }
}
