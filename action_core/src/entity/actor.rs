//! ActorState - what an entity gains by being a PC or NPC

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Actor-specific state
///
/// `alive` and `incapacitated` flip once, when an attack drops `LIFE` to
/// zero or below, and are never reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorState {
    /// Non-owning handle to the context the actor acts in
    pub(crate) context: Option<EntityId>,
    alive: bool,
    incapacitated: bool,
}

impl Default for ActorState {
    fn default() -> Self {
        ActorState {
            context: None,
            alive: true,
            incapacitated: false,
        }
    }
}

impl ActorState {
    pub fn context(&self) -> Option<EntityId> {
        self.context
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_incapacitated(&self) -> bool {
        self.incapacitated
    }

    pub(crate) fn knock_out(&mut self) {
        self.alive = false;
        self.incapacitated = true;
    }
}
