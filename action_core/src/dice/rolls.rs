//! Deterministic roll sources for replays and exact-outcome tests

use super::RollSource;

/// Always rolls the same value, clamped into the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub i64);

impl RollSource for FixedRoll {
    fn roll_range(&mut self, min: i64, max: i64) -> i64 {
        self.0.clamp(min, max.max(min))
    }
}

/// Replays a recorded sequence of rolls, wrapping around when exhausted
///
/// Each value is clamped into the requested range. An empty sequence
/// always rolls the minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRolls {
    values: Vec<i64>,
    index: usize,
}

impl ScriptedRolls {
    /// Create a new source from recorded values
    pub fn new(values: Vec<i64>) -> Self {
        ScriptedRolls { values, index: 0 }
    }

    /// Number of rolls drawn so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl RollSource for ScriptedRolls {
    fn roll_range(&mut self, min: i64, max: i64) -> i64 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(min, max.max(min))
    }
}
