//! Turning an action's potential into a concrete delivery

use super::Action;
use crate::attributes::{keys, numeric_or_zero, AttrValue};
use crate::dice::RollSource;
use crate::entity::World;
use crate::error::ResolveError;
use crate::resolution::{self, Outcome};
use crate::types::EntityId;

/// Roll an optional formula value, absent values contributing 0
fn roll_optional(
    key: &str,
    value: Option<&AttrValue>,
    rolls: &mut dyn RollSource,
) -> Result<i64, ResolveError> {
    match value {
        None => Ok(0),
        Some(value) => {
            let formula = value.to_formula().map_err(|source| ResolveError::Formula {
                key: key.to_string(),
                source,
            })?;
            Ok(formula.roll(rolls))
        }
    }
}

impl Action {
    /// Own accuracy plus the initiator's base and sub-type accuracy
    pub fn accuracy(&self, world: &World, initiator: EntityId) -> i64 {
        let mut accuracy = numeric_or_zero(keys::ACCURACY, self.get(keys::ACCURACY));
        accuracy += world.int_or_zero(initiator, keys::ACCURACY);
        if let Some(sub) = self.verb.sub_type() {
            accuracy += world.int_or_zero(initiator, &keys::scoped(keys::ACCURACY, &[sub]));
        }
        accuracy
    }

    /// Rolled damage of the action, the initiator and the initiator's sub-type
    ///
    /// Each present formula is rolled once and the results are summed.
    pub fn damage(
        &self,
        world: &World,
        initiator: EntityId,
        rolls: &mut dyn RollSource,
    ) -> Result<i64, ResolveError> {
        let mut damage = roll_optional(keys::DAMAGE, self.get(keys::DAMAGE), rolls)?;
        damage += roll_optional(keys::DAMAGE, world.get(initiator, keys::DAMAGE), rolls)?;
        if let Some(sub) = self.verb.sub_type() {
            let key = keys::scoped(keys::DAMAGE, &[sub]);
            damage += roll_optional(&key, world.get(initiator, &key), rolls)?;
        }
        Ok(damage)
    }

    /// Own power plus the initiator's `POWER.<base>` and `POWER.<base>.<sub>`
    pub fn power(&self, world: &World, initiator: EntityId) -> i64 {
        let base = self.verb.base();
        let mut power = numeric_or_zero(keys::POWER, self.get(keys::POWER));
        power += world.int_or_zero(initiator, &keys::scoped(keys::POWER, &[base]));
        if let Some(sub) = self.verb.sub_type() {
            power += world.int_or_zero(initiator, &keys::scoped(keys::POWER, &[base, sub]));
        }
        power
    }

    /// Rolled stacks of the action plus the initiator's base and sub-type stacks
    pub fn stacks(
        &self,
        world: &World,
        initiator: EntityId,
        rolls: &mut dyn RollSource,
    ) -> Result<i64, ResolveError> {
        let base = self.verb.base();
        let mut stacks = roll_optional(keys::STACKS, self.get(keys::STACKS), rolls)?;
        let key = keys::scoped(keys::STACKS, &[base]);
        stacks += roll_optional(&key, world.get(initiator, &key), rolls)?;
        if let Some(sub) = self.verb.sub_type() {
            let key = keys::scoped(keys::STACKS, &[base, sub]);
            stacks += roll_optional(&key, world.get(initiator, &key), rolls)?;
        }
        Ok(stacks)
    }

    /// Resolve this action and deliver it to `target`
    ///
    /// Attacks gain `TO_HIT` and `HIT_POINTS`; every other verb gains
    /// `TO_HIT` and `TOTAL`. Both are written onto the action before the
    /// target's handler chain sees it. A malformed formula aborts the
    /// action before the target is touched.
    pub fn act(
        &mut self,
        world: &mut World,
        initiator: EntityId,
        target: EntityId,
        context: Option<EntityId>,
        rolls: &mut dyn RollSource,
    ) -> Result<Outcome, ResolveError> {
        world.require(initiator)?;
        world.require(target)?;
        let base_to_hit = world.rules().base_to_hit;

        if self.verb.is_attack() {
            let to_hit = base_to_hit + self.accuracy(world, initiator);
            let hit_points = self.damage(world, initiator, rolls)?;
            self.set(keys::TO_HIT, to_hit);
            self.set(keys::HIT_POINTS, hit_points);
            tracing::debug!(verb = %self.verb, to_hit, hit_points, "attack resolved");
        } else {
            let to_hit = base_to_hit + self.power(world, initiator);
            let total = self.stacks(world, initiator, rolls)?;
            self.set(keys::TO_HIT, to_hit);
            self.set(keys::TOTAL, total);
            tracing::debug!(verb = %self.verb, to_hit, total, "condition resolved");
        }

        resolution::deliver(world, target, self, initiator, context, rolls)
    }
}
