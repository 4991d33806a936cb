//! Action - one offered or initiated capability
//!
//! An action carries the entity it comes from (its instrument), a verb and
//! its own attributes. [`Action::act`] turns the owner-supplied potential
//! (`ACCURACY`/`DAMAGE` or `POWER`/`STACKS`) into concrete `TO_HIT` and
//! `HIT_POINTS`/`TOTAL` values and delivers the action to its target.

mod resolve;

use crate::attributes::{keys, AttrValue, AttributeStore};
use crate::types::{EntityId, Verb};
use std::fmt;

/// A single use of a capability, resolved once and then discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    source: EntityId,
    verb: Verb,
    pub attributes: AttributeStore,
}

impl Action {
    /// Create an action offered by `source`
    pub fn new(source: EntityId, verb: impl Into<Verb>) -> Self {
        Action {
            source,
            verb: verb.into(),
            attributes: AttributeStore::new(),
        }
    }

    /// The entity that offers this action (weapon, skill set, the actor itself)
    pub fn source(&self) -> EntityId {
        self.source
    }

    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.set(key, value);
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |key: &str| {
            self.get(key)
                .map(AttrValue::to_string)
                .unwrap_or_else(|| "None".to_string())
        };
        if self.verb.is_attack() {
            write!(
                f,
                "{} (ACCURACY={}%, DAMAGE={})",
                self.verb,
                show(keys::ACCURACY),
                show(keys::DAMAGE)
            )
        } else {
            write!(
                f,
                "{} (POWER={}%, STACKS={})",
                self.verb,
                show(keys::POWER),
                show(keys::STACKS)
            )
        }
    }
}
