//! Search handling - contexts forward searches to concealed objects

use super::{deliver, ActionHandler, Delivery, Outcome};
use crate::attributes::keys::{self, scoped};
use crate::error::ResolveError;

/// Forwards a `SEARCH` delivered to a context to every concealed object in it
///
/// An object is concealed while `RESISTANCE.SEARCH > 0`. Each object then
/// resolves the search through its own chain, so landed stacks accumulate
/// under its `SEARCH` attribute.
pub struct SearchHandler;

impl ActionHandler for SearchHandler {
    fn name(&self) -> &'static str {
        "search"
    }

    fn handle(&self, delivery: &mut Delivery<'_>) -> Result<Option<Outcome>, ResolveError> {
        if delivery.action.verb().base() != keys::SEARCH {
            return Ok(None);
        }
        let Some(state) = delivery
            .world
            .entity(delivery.target)
            .and_then(|entity| entity.as_context())
        else {
            return Ok(None);
        };

        let concealment = scoped(keys::RESISTANCE, &[keys::SEARCH]);
        let concealed: Vec<_> = state
            .objects()
            .iter()
            .copied()
            .filter(|&object| delivery.world.int_or_zero(object, &concealment) > 0)
            .collect();

        let mut findings = Vec::with_capacity(concealed.len());
        for object in concealed {
            findings.push(deliver(
                &mut *delivery.world,
                object,
                delivery.action,
                delivery.initiator,
                delivery.context,
                &mut *delivery.rolls,
            )?);
        }

        Ok(Some(Outcome::Searched {
            context: delivery.name(delivery.target),
            findings,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::dice::FixedRoll;
    use crate::entity::World;

    #[test]
    fn test_search_reaches_only_concealed_objects() {
        let mut world = World::new();
        let square = world.spawn_context("town square", None, None).unwrap();
        let hero = world.spawn_actor("Hero", None);
        let bench = world.spawn_object("bench", Some("obvious object"));
        let trap_door = world.spawn_object("trap-door", Some("hidden object"));
        world.set(trap_door, "RESISTANCE.SEARCH", 75).unwrap();
        world.add_object(square, bench).unwrap();
        world.add_object(square, trap_door).unwrap();

        let mut action = Action::new(square, "SEARCH");
        action.set(keys::TO_HIT, 125);
        action.set(keys::TOTAL, 2);

        let outcome = deliver(&mut world, square, &action, hero, Some(square), &mut FixedRoll(1)).unwrap();

        let Outcome::Searched { findings, .. } = &outcome else {
            panic!("expected a search outcome, got {:?}", outcome);
        };
        assert_eq!(findings.len(), 1);
        assert_eq!(outcome.stacks_landed(), 2);
        assert_eq!(world.get_int(trap_door, "SEARCH"), Some(2));
        assert_eq!(world.get(bench, "SEARCH"), None);
    }

    #[test]
    fn test_empty_search() {
        let mut world = World::new();
        let square = world.spawn_context("town square", None, None).unwrap();
        let hero = world.spawn_actor("Hero", None);
        let mut action = Action::new(square, "SEARCH");
        action.set(keys::TO_HIT, 100);
        action.set(keys::TOTAL, 1);

        let outcome = deliver(&mut world, square, &action, hero, None, &mut FixedRoll(1)).unwrap();
        assert_eq!(outcome.to_string(), "nothing is concealed in town square");
    }

    #[test]
    fn test_other_verbs_fall_through() {
        let mut world = World::new();
        let square = world.spawn_context("town square", None, None).unwrap();
        let hero = world.spawn_actor("Hero", None);
        let mut action = Action::new(square, "MENTAL");
        action.set(keys::TO_HIT, 100);
        action.set(keys::TOTAL, 1);

        let outcome = deliver(&mut world, square, &action, hero, None, &mut FixedRoll(1)).unwrap();
        assert!(matches!(outcome, Outcome::Conditions { landed: 1, .. }));
    }
}
