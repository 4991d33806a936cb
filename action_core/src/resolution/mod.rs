//! Resolution - how a target processes a delivered action
//!
//! Each kind of entity has an ordered chain of handlers. The first handler
//! that recognises the action produces the [`Outcome`]; if none does, the
//! result is [`Outcome::Unhandled`] rather than an error.
//!
//! | Target  | Chain                          |
//! |---------|--------------------------------|
//! | Actor   | attack, condition              |
//! | Context | search, condition              |
//! | Object  | condition                      |

mod attack;
mod condition;
mod outcome;
mod search;

pub use attack::AttackHandler;
pub use condition::ConditionHandler;
pub use outcome::Outcome;
pub use search::SearchHandler;

use crate::action::Action;
use crate::dice::RollSource;
use crate::entity::{Role, World};
use crate::error::ResolveError;
use crate::types::EntityId;

/// Everything a handler needs to process one delivery
pub struct Delivery<'a> {
    pub world: &'a mut World,
    pub action: &'a Action,
    pub initiator: EntityId,
    pub target: EntityId,
    pub context: Option<EntityId>,
    pub rolls: &'a mut dyn RollSource,
}

impl Delivery<'_> {
    /// Display name of an entity, or its id if the world does not know it
    pub fn name(&self, id: EntityId) -> String {
        self.world
            .entity(id)
            .map(|entity| entity.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Numeric attribute of the target, absent values reading as 0
    pub fn target_int(&self, key: &str) -> i64 {
        self.world.int_or_zero(self.target, key)
    }
}

/// One link in a target's handler chain
pub trait ActionHandler {
    fn name(&self) -> &'static str;

    /// Process the delivery, or return `Ok(None)` to pass it down the chain
    fn handle(&self, delivery: &mut Delivery<'_>) -> Result<Option<Outcome>, ResolveError>;
}

const ACTOR_CHAIN: &[&dyn ActionHandler] = &[&AttackHandler, &ConditionHandler];
const CONTEXT_CHAIN: &[&dyn ActionHandler] = &[&SearchHandler, &ConditionHandler];
const OBJECT_CHAIN: &[&dyn ActionHandler] = &[&ConditionHandler];

/// Handler chain for a kind of target
pub fn handler_chain(role: &Role) -> &'static [&'static dyn ActionHandler] {
    match role {
        Role::Actor(_) => ACTOR_CHAIN,
        Role::Context(_) => CONTEXT_CHAIN,
        Role::Object => OBJECT_CHAIN,
    }
}

/// Deliver an already resolved action to its target
pub(crate) fn deliver(
    world: &mut World,
    target: EntityId,
    action: &Action,
    initiator: EntityId,
    context: Option<EntityId>,
    rolls: &mut dyn RollSource,
) -> Result<Outcome, ResolveError> {
    let chain = handler_chain(world.require(target)?.role());

    let mut delivery = Delivery {
        world,
        action,
        initiator,
        target,
        context,
        rolls,
    };

    for handler in chain {
        if let Some(outcome) = handler.handle(&mut delivery)? {
            tracing::debug!(
                handler = handler.name(),
                target_id = %target,
                verb = %action.verb(),
                "action resolved"
            );
            return Ok(outcome);
        }
    }

    tracing::debug!(target_id = %target, verb = %action.verb(), "no handler accepted action");
    Ok(Outcome::Unhandled {
        target: delivery.name(target),
        initiator: delivery.name(initiator),
        source: delivery.name(action.source()),
        verb: action.verb().to_string(),
    })
}
