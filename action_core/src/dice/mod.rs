//! Dice formulas - parsing and rolling
//!
//! Three grammars are accepted, tried in this order:
//! - dice: `[N]D<M>[+B]` (`d` also works, `%` means a 100-sided die,
//!   at most [`MAX_DICE`] dice, `B` non-negative)
//! - range: `<MIN>-<MAX>`, inclusive, `MIN < MAX`
//! - constant: a bare non-negative integer
//!
//! Rolling never touches global state. Every roll draws from a caller
//! supplied [`RollSource`].

mod formula;
mod rolls;

pub use formula::{Formula, MAX_DICE};
pub use rolls::{FixedRoll, ScriptedRolls};

use rand::{Rng, RngCore};
use thiserror::Error;

/// A formula string that does not match any accepted grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    #[error("unrecognized formula '{0}'")]
    Unrecognized(String),
    #[error("formula '{0}' must have exactly two parts")]
    WrongArity(String),
    #[error("non-numeric value in formula '{0}'")]
    NonNumeric(String),
    #[error("illegal range in formula '{0}': minimum must be below maximum")]
    IllegalRange(String),
    #[error("formula '{0}' rolls a die with no sides")]
    NoSides(String),
    #[error("formula '{0}' rolls more than {max} dice", max = MAX_DICE)]
    TooManyDice(String),
}

impl FormulaError {
    /// The formula text that failed to parse
    pub fn formula(&self) -> &str {
        match self {
            FormulaError::Unrecognized(f)
            | FormulaError::WrongArity(f)
            | FormulaError::NonNumeric(f)
            | FormulaError::IllegalRange(f)
            | FormulaError::NoSides(f)
            | FormulaError::TooManyDice(f) => f,
        }
    }
}

/// Source of uniformly distributed integers
///
/// Every `rand` generator is a roll source, so a seeded `StdRng` can be
/// passed anywhere the engine rolls. [`FixedRoll`] and [`ScriptedRolls`]
/// cover replays and exact-outcome tests.
pub trait RollSource {
    /// Uniform integer in `[min, max]` inclusive. Callers guarantee `min <= max`.
    fn roll_range(&mut self, min: i64, max: i64) -> i64;
}

impl<R: RngCore + ?Sized> RollSource for R {
    fn roll_range(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.gen_range(min..=max)
    }
}

/// Parse a formula string
pub fn parse(formula: &str) -> Result<Formula, FormulaError> {
    formula.parse()
}

/// Roll a parsed formula against a roll source
pub fn roll(formula: &Formula, rolls: &mut dyn RollSource) -> i64 {
    formula.roll(rolls)
}
