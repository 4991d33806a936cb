//! World - the arena that owns every entity
//!
//! Entities refer to each other by [`EntityId`]: an actor's current
//! context, a context's parent and its membership lists are all handles
//! into the same arena. Attribute lookups that fall back through a
//! context's parents walk these handles instead of live references.

use super::{ActorState, ContextState, Entity, Role};
use crate::action::Action;
use crate::attributes::{keys, numeric_or_zero, AttrValue};
use crate::config::RulesConfig;
use crate::dice::RollSource;
use crate::error::{ResolveError, WorldError};
use crate::resolution::{self, Outcome};
use crate::types::EntityId;

/// Owner of all entities and the rules they are resolved under
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: Vec<Entity>,
    rules: RulesConfig,
}

impl World {
    /// Create an empty world with default rules
    pub fn new() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    pub fn with_rules(rules: RulesConfig) -> Self {
        World {
            entities: Vec::new(),
            rules,
        }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len());
        tracing::trace!(id = %id, name = %entity.name, "spawned entity");
        self.entities.push(entity);
        id
    }

    /// Add a plain object (weapon, skill set, furniture)
    pub fn spawn_object(&mut self, name: impl Into<String>, description: Option<&str>) -> EntityId {
        self.spawn(Entity::new(name, description))
    }

    /// Add an actor, alive and not yet placed in any context
    pub fn spawn_actor(&mut self, name: impl Into<String>, description: Option<&str>) -> EntityId {
        self.spawn(Entity::with_role(
            name,
            description,
            Role::Actor(ActorState::default()),
        ))
    }

    /// Add a context nested under an existing `parent` context
    pub fn spawn_context(
        &mut self,
        name: impl Into<String>,
        description: Option<&str>,
        parent: Option<EntityId>,
    ) -> Result<EntityId, WorldError> {
        if let Some(parent) = parent {
            self.context_state(parent)?;
        }
        Ok(self.spawn(Entity::with_role(
            name,
            description,
            Role::Context(ContextState::with_parent(parent)),
        )))
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0)
    }

    /// Like [`World::entity`], but an unknown id is an error
    pub fn require(&self, id: EntityId) -> Result<&Entity, WorldError> {
        self.entity(id).ok_or(WorldError::UnknownEntity(id))
    }

    fn require_mut(&mut self, id: EntityId) -> Result<&mut Entity, WorldError> {
        self.entity_mut(id).ok_or(WorldError::UnknownEntity(id))
    }

    fn context_state(&self, id: EntityId) -> Result<&ContextState, WorldError> {
        self.require(id)?
            .as_context()
            .ok_or(WorldError::NotAContext(id))
    }

    fn context_state_mut(&mut self, id: EntityId) -> Result<&mut ContextState, WorldError> {
        self.require_mut(id)?
            .as_context_mut()
            .ok_or(WorldError::NotAContext(id))
    }

    fn actor_state_mut(&mut self, id: EntityId) -> Result<&mut ActorState, WorldError> {
        self.require_mut(id)?
            .as_actor_mut()
            .ok_or(WorldError::NotAnActor(id))
    }

    /// Look up an attribute as seen from `id`
    ///
    /// Objects and actors only see their own attributes. A context that
    /// lacks the key asks its parent, recursively; the root returns `None`.
    pub fn get(&self, id: EntityId, key: &str) -> Option<&AttrValue> {
        let mut current = self.entity(id)?;
        loop {
            if let Some(value) = current.get(key) {
                return Some(value);
            }
            let parent = current.as_context()?.parent()?;
            tracing::trace!(key, from = %current.name, parent = %parent, "attribute falls back to parent");
            current = self.entity(parent)?;
        }
    }

    pub fn get_int(&self, id: EntityId, key: &str) -> Option<i64> {
        self.get(id, key).and_then(AttrValue::as_int)
    }

    /// Numeric attribute for additive combination, absent values reading as 0
    pub fn int_or_zero(&self, id: EntityId, key: &str) -> i64 {
        numeric_or_zero(key, self.get(id, key))
    }

    /// Set an attribute on the entity itself, never on a parent
    pub fn set(
        &mut self,
        id: EntityId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<(), WorldError> {
        self.require_mut(id)?.set(key, value);
        Ok(())
    }

    pub fn actor_state(&self, id: EntityId) -> Option<&ActorState> {
        self.entity(id).and_then(Entity::as_actor)
    }

    /// Mark an actor dead and incapacitated
    pub(crate) fn knock_out(&mut self, id: EntityId) -> Result<(), WorldError> {
        self.actor_state_mut(id)?.knock_out();
        tracing::debug!(actor = %id, "actor knocked out");
        Ok(())
    }

    /// Move an actor into `context`
    ///
    /// Only the actor's handle changes. Registering it in the context's
    /// party or npc list is a separate step.
    pub fn set_context(&mut self, actor: EntityId, context: EntityId) -> Result<(), WorldError> {
        self.context_state(context)?;
        self.actor_state_mut(actor)?.context = Some(context);
        Ok(())
    }

    pub fn actor_context(&self, actor: EntityId) -> Option<EntityId> {
        self.actor_state(actor).and_then(ActorState::context)
    }

    fn add_actor_to(
        &mut self,
        context: EntityId,
        actor: EntityId,
        add: fn(&mut ContextState, EntityId) -> bool,
    ) -> Result<bool, WorldError> {
        if !self.require(actor)?.is_actor() {
            return Err(WorldError::NotAnActor(actor));
        }
        Ok(add(self.context_state_mut(context)?, actor))
    }

    /// Register a player character; returns false if already present
    pub fn add_member(&mut self, context: EntityId, actor: EntityId) -> Result<bool, WorldError> {
        self.add_actor_to(context, actor, ContextState::add_member)
    }

    /// Register a non-player character; returns false if already present
    pub fn add_npc(&mut self, context: EntityId, actor: EntityId) -> Result<bool, WorldError> {
        self.add_actor_to(context, actor, ContextState::add_npc)
    }

    /// Place an object in a context; returns false if already present
    pub fn add_object(&mut self, context: EntityId, object: EntityId) -> Result<bool, WorldError> {
        self.require(object)?;
        Ok(self.context_state_mut(context)?.add_object(object))
    }

    pub fn party(&self, context: EntityId) -> Result<&[EntityId], WorldError> {
        Ok(self.context_state(context)?.party())
    }

    pub fn npcs(&self, context: EntityId) -> Result<&[EntityId], WorldError> {
        Ok(self.context_state(context)?.npcs())
    }

    pub fn objects(&self, context: EntityId) -> Result<&[EntityId], WorldError> {
        Ok(self.context_state(context)?.objects())
    }

    fn is_concealed(&self, object: EntityId) -> bool {
        self.int_or_zero(object, &keys::scoped(keys::RESISTANCE, &[keys::SEARCH])) > 0
    }

    fn is_found(&self, object: EntityId) -> bool {
        self.int_or_zero(object, keys::SEARCH) > 0
    }

    /// Objects in `context` that are either not concealed or already found
    pub fn visible_objects(&self, context: EntityId) -> Result<Vec<EntityId>, WorldError> {
        Ok(self
            .objects(context)?
            .iter()
            .copied()
            .filter(|&object| self.is_found(object) || !self.is_concealed(object))
            .collect())
    }

    /// Concealed objects in `context` that nobody has found yet
    pub fn hidden_objects(&self, context: EntityId) -> Result<Vec<EntityId>, WorldError> {
        Ok(self
            .objects(context)?
            .iter()
            .copied()
            .filter(|&object| self.is_concealed(object) && !self.is_found(object))
            .collect())
    }

    /// Actions `owner` offers, one per entry of its `ACTIONS` list
    ///
    /// Attack verbs are primed with the owner's accuracy (base plus
    /// sub-type) and damage formula (sub-type if present, else base,
    /// else `"0"`). Damage formulas are picked, not summed.
    pub fn possible_actions(
        &self,
        owner: EntityId,
        actor: Option<EntityId>,
        context: Option<EntityId>,
    ) -> Result<Vec<Action>, WorldError> {
        self.require(owner)?;
        tracing::trace!(owner = %owner, ?actor, ?context, "listing possible actions");
        let Some(list) = self.get(owner, keys::ACTIONS) else {
            return Ok(Vec::new());
        };

        let list = list.to_string();
        let mut actions = Vec::new();
        for verb in list.split(',').map(str::trim).filter(|verb| !verb.is_empty()) {
            let mut action = Action::new(owner, verb);
            if action.verb().is_attack() {
                self.prime_attack(owner, &mut action);
            }
            actions.push(action);
        }
        Ok(actions)
    }

    fn prime_attack(&self, owner: EntityId, action: &mut Action) {
        let sub_type = action.verb().sub_type().map(str::to_string);

        let mut accuracy = self.int_or_zero(owner, keys::ACCURACY);
        let mut damage = None;
        if let Some(sub) = sub_type.as_deref() {
            accuracy += self.int_or_zero(owner, &keys::scoped(keys::ACCURACY, &[sub]));
            damage = self.get(owner, &keys::scoped(keys::DAMAGE, &[sub]));
        }
        let damage = damage
            .or_else(|| self.get(owner, keys::DAMAGE))
            .cloned()
            .unwrap_or_else(|| AttrValue::from("0"));

        action.set(keys::ACCURACY, accuracy);
        action.set(keys::DAMAGE, damage);
    }

    /// Deliver an already resolved action to `target`
    pub fn accept_action(
        &mut self,
        target: EntityId,
        action: &Action,
        initiator: EntityId,
        context: Option<EntityId>,
        rolls: &mut dyn RollSource,
    ) -> Result<Outcome, ResolveError> {
        resolution::deliver(self, target, action, initiator, context, rolls)
    }

    /// `actor` performs `action` on `target` in the actor's current context
    pub fn take_action(
        &mut self,
        actor: EntityId,
        action: &mut Action,
        target: EntityId,
        rolls: &mut dyn RollSource,
    ) -> Result<Outcome, ResolveError> {
        let state = self
            .require(actor)?
            .as_actor()
            .ok_or(WorldError::NotAnActor(actor))?;
        let context = state.context();
        tracing::debug!(actor = %actor, target_id = %target, action = %action, "taking action");
        action.act(self, actor, target, context, rolls)
    }
}
