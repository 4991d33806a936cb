//! Attack handling - evasion, protection and life loss for actors

use super::{ActionHandler, Delivery, Outcome};
use crate::attributes::keys::{self, scoped};
use crate::error::ResolveError;

/// Resolves `ATTACK` verbs against an actor's defenses
///
/// 1. `evasion = EVASION + EVASION.<sub>`
/// 2. effective to-hit below the check die triggers a percentile roll;
///    rolling above it evades
/// 3. `protection = PROTECTION + PROTECTION.<sub>` at or above the hit
///    points absorbs the hit
/// 4. otherwise the difference comes off `LIFE`, and reaching zero kills
pub struct AttackHandler;

impl AttackHandler {
    /// Defensive attribute plus its sub-type specialisation
    fn defense(delivery: &Delivery<'_>, key: &str, sub_type: Option<&str>) -> i64 {
        let base = delivery.target_int(key);
        let specialised = sub_type
            .map(|sub| delivery.target_int(&scoped(key, &[sub])))
            .unwrap_or(0);
        base + specialised
    }
}

impl ActionHandler for AttackHandler {
    fn name(&self) -> &'static str {
        "attack"
    }

    fn handle(&self, delivery: &mut Delivery<'_>) -> Result<Option<Outcome>, ResolveError> {
        let action = delivery.action;
        let verb = action.verb();
        if !verb.is_attack() {
            return Ok(None);
        }
        let (Some(to_hit), Some(hit_points)) = (
            action.attributes.get_int(keys::TO_HIT),
            action.attributes.get_int(keys::HIT_POINTS),
        ) else {
            return Ok(None);
        };
        let sub_type = verb.sub_type();
        let target = delivery.target;

        let evasion = Self::defense(delivery, keys::EVASION, sub_type);
        let effective = to_hit - evasion;
        let die = delivery.world.rules().check_die;
        if effective < die {
            let roll = delivery.rolls.roll_range(1, die);
            if roll > effective {
                tracing::debug!(target_id = %target, to_hit, evasion, roll, "attack evaded");
                return Ok(Some(Outcome::Evaded {
                    target: delivery.name(target),
                    source: delivery.name(action.source()),
                    verb: verb.to_string(),
                    evasion,
                    to_hit,
                    roll,
                }));
            }
        }

        let protection = Self::defense(delivery, keys::PROTECTION, sub_type);
        if protection >= hit_points {
            tracing::debug!(target_id = %target, hit_points, protection, "hit absorbed");
            return Ok(Some(Outcome::Absorbed {
                target: delivery.name(target),
                verb: verb.to_string(),
                delivered: hit_points,
                protection,
            }));
        }

        let life_before = delivery.target_int(keys::LIFE);
        let life_after = life_before - (hit_points - protection);
        delivery.world.set(target, keys::LIFE, life_after)?;

        let killed = life_after <= 0;
        if killed {
            delivery.world.knock_out(target)?;
        }
        tracing::debug!(target_id = %target, life_before, life_after, killed, "attack landed");

        Ok(Some(Outcome::Hit {
            target: delivery.name(target),
            initiator: delivery.name(delivery.initiator),
            source: delivery.name(action.source()),
            context: delivery.context.map(|context| delivery.name(context)),
            delivered: hit_points,
            protection,
            life_before,
            life_after,
            killed,
        }))
    }
}
