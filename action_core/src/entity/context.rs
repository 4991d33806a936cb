//! ContextState - locations that hold actors and objects

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

/// Context-specific state
///
/// Contexts nest (kingdom, village, building, room) through `parent`.
/// A parent always exists before its children, so the chain is acyclic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextState {
    pub(crate) parent: Option<EntityId>,
    party: Vec<EntityId>,
    npcs: Vec<EntityId>,
    objects: Vec<EntityId>,
}

fn push_unique(list: &mut Vec<EntityId>, id: EntityId) -> bool {
    if list.contains(&id) {
        return false;
    }
    list.push(id);
    true
}

impl ContextState {
    pub(crate) fn with_parent(parent: Option<EntityId>) -> Self {
        ContextState {
            parent,
            ..Default::default()
        }
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn party(&self) -> &[EntityId] {
        &self.party
    }

    pub fn npcs(&self) -> &[EntityId] {
        &self.npcs
    }

    pub fn objects(&self) -> &[EntityId] {
        &self.objects
    }

    pub(crate) fn add_member(&mut self, id: EntityId) -> bool {
        push_unique(&mut self.party, id)
    }

    pub(crate) fn add_npc(&mut self, id: EntityId) -> bool {
        push_unique(&mut self.npcs, id)
    }

    pub(crate) fn add_object(&mut self, id: EntityId) -> bool {
        push_unique(&mut self.objects, id)
    }
}
