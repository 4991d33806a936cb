//! Condition handling - the generic resistance and stacks fallback

use super::{ActionHandler, Delivery, Outcome};
use crate::attributes::keys::{self, scoped};
use crate::error::ResolveError;

/// Resolves any verb carrying `TO_HIT` against resistance
///
/// An absent `TOTAL` sends no stacks, so a resolved attack reaching an
/// object still gets a resistance report.
/// `power = TO_HIT - (RESISTANCE + RESISTANCE.<base> + RESISTANCE.<base>.<sub>)`.
/// Each of the `TOTAL` stacks lands on a check-die roll at or below `power`.
/// Landed stacks accumulate on the target under the full verb key.
pub struct ConditionHandler;

impl ConditionHandler {
    fn resistance(delivery: &Delivery<'_>, base: &str, sub_type: Option<&str>) -> i64 {
        let mut resistance = delivery.target_int(keys::RESISTANCE);
        resistance += delivery.target_int(&scoped(keys::RESISTANCE, &[base]));
        if let Some(sub) = sub_type {
            resistance += delivery.target_int(&scoped(keys::RESISTANCE, &[base, sub]));
        }
        resistance
    }
}

impl ActionHandler for ConditionHandler {
    fn name(&self) -> &'static str {
        "condition"
    }

    fn handle(&self, delivery: &mut Delivery<'_>) -> Result<Option<Outcome>, ResolveError> {
        let action = delivery.action;
        let Some(to_hit) = action.attributes.get_int(keys::TO_HIT) else {
            return Ok(None);
        };
        let total = action.attributes.int_or_zero(keys::TOTAL);
        let verb = action.verb();
        let target = delivery.target;

        let resistance = Self::resistance(delivery, verb.base(), verb.sub_type());
        let power = to_hit - resistance;
        let die = delivery.world.rules().check_die;

        let mut landed = 0;
        if power > 0 {
            for _ in 0..total.max(0) {
                if delivery.rolls.roll_range(1, die) <= power {
                    landed += 1;
                }
            }
        }

        let mut accumulated = delivery.target_int(verb.as_str());
        if landed > 0 {
            accumulated += landed;
            delivery.world.set(target, verb.as_str(), accumulated)?;
        }
        tracing::debug!(target_id = %target, verb = %verb, power, landed, total, "condition delivered");

        Ok(Some(Outcome::Conditions {
            target: delivery.name(target),
            initiator: delivery.name(delivery.initiator),
            verb: verb.to_string(),
            power,
            landed,
            total,
            accumulated,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::dice::{FixedRoll, RollSource, ScriptedRolls};
    use crate::entity::World;
    use crate::types::EntityId;

    fn send(
        world: &mut World,
        target: EntityId,
        verb: &str,
        to_hit: i64,
        total: i64,
        rolls: &mut dyn RollSource,
    ) -> Outcome {
        let source = world.spawn_object("artifact", None);
        let sender = world.spawn_actor("sender", None);
        let mut action = Action::new(source, verb);
        action.set(keys::TO_HIT, to_hit);
        action.set(keys::TOTAL, total);
        super::super::deliver(world, target, &action, sender, None, rolls).unwrap()
    }

    #[test]
    fn test_no_power_lands_nothing() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        let mut rolls = ScriptedRolls::new(vec![1]);

        let outcome = send(&mut world, victim, "MENTAL", 0, 12, &mut rolls);

        assert_eq!(outcome.stacks_landed(), 0);
        assert_eq!(rolls.drawn(), 0);
        assert_eq!(world.get(victim, "MENTAL"), None);
    }

    #[test]
    fn test_full_power_lands_everything() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);

        let outcome = send(&mut world, victim, "MENTAL", 100, 10, &mut FixedRoll(100));

        assert_eq!(outcome.stacks_landed(), 10);
        assert_eq!(world.get_int(victim, "MENTAL"), Some(10));
    }

    #[test]
    fn test_resistance_layers_sum() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        world.set(victim, "RESISTANCE", 10).unwrap();
        world.set(victim, "RESISTANCE.MENTAL", 15).unwrap();
        world.set(victim, "RESISTANCE.MENTAL.fear", 25).unwrap();

        let outcome = send(&mut world, victim, "MENTAL.fear", 100, 0, &mut FixedRoll(1));
        assert!(matches!(outcome, Outcome::Conditions { power: 50, .. }));

        // The sub-type layer only applies to its own sub-type
        let outcome = send(&mut world, victim, "MENTAL.doubt", 100, 0, &mut FixedRoll(1));
        assert!(matches!(outcome, Outcome::Conditions { power: 75, .. }));
    }

    #[test]
    fn test_each_stack_rolls_independently() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        world.set(victim, "RESISTANCE.PHYSICAL", 50).unwrap();
        let mut rolls = ScriptedRolls::new(vec![10, 60, 50, 51, 1]);

        let outcome = send(&mut world, victim, "PHYSICAL", 100, 5, &mut rolls);

        assert_eq!(outcome.stacks_landed(), 3);
        assert_eq!(rolls.drawn(), 5);
    }

    #[test]
    fn test_stacks_accumulate_across_deliveries() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        world.set(victim, "MENTAL", 2).unwrap();

        send(&mut world, victim, "MENTAL", 100, 3, &mut FixedRoll(1));
        let outcome = send(&mut world, victim, "MENTAL", 100, 4, &mut FixedRoll(1));

        assert!(matches!(outcome, Outcome::Conditions { accumulated: 9, .. }));
        assert_eq!(world.get_int(victim, "MENTAL"), Some(9));
    }

    #[test]
    fn test_cycling_rolls_land_half_at_half_power() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        world.set(victim, "RESISTANCE.MENTAL", 25).unwrap();
        world.set(victim, "RESISTANCE.MENTAL.fear", 25).unwrap();
        let mut rolls = ScriptedRolls::new((1..=100).rev().collect());

        let mut landed = 0;
        for _ in 0..10 {
            landed += send(&mut world, victim, "MENTAL.fear", 100, 10, &mut rolls).stacks_landed();
        }

        assert_eq!(landed, 50);
    }

    #[test]
    fn test_resolved_attack_on_object_sends_no_stacks() {
        let mut world = World::new();
        let crate_box = world.spawn_object("crate", None);
        world.set(crate_box, "RESISTANCE", 30).unwrap();
        let sender = world.spawn_actor("sender", None);
        let mut action = Action::new(sender, "ATTACK.slash");
        action.set(keys::TO_HIT, 100);
        action.set(keys::HIT_POINTS, 4);
        let mut rolls = ScriptedRolls::new(vec![1]);

        let outcome = super::super::deliver(&mut world, crate_box, &action, sender, None, &mut rolls).unwrap();

        assert!(matches!(
            outcome,
            Outcome::Conditions {
                power: 70,
                landed: 0,
                total: 0,
                ..
            }
        ));
        assert_eq!(rolls.drawn(), 0);
        assert_eq!(world.get(crate_box, "ATTACK.slash"), None);
    }

    #[test]
    fn test_unresolved_action_passes_down_chain() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        let sender = world.spawn_actor("sender", None);
        let action = Action::new(sender, "MENTAL");

        let outcome = super::super::deliver(&mut world, victim, &action, sender, None, &mut FixedRoll(1)).unwrap();
        assert!(!outcome.is_handled());
    }

    #[test]
    fn test_negative_total_sends_nothing() {
        let mut world = World::new();
        let victim = world.spawn_object("victim", None);
        let outcome = send(&mut world, victim, "MENTAL", 100, -3, &mut FixedRoll(1));
        assert_eq!(outcome.stacks_landed(), 0);
    }
}
