//! Formula - a parsed dice, range, or constant expression

use super::{FormulaError, RollSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Most dice a single formula may roll
pub const MAX_DICE: u32 = 1000;

/// A validated roll formula
///
/// Constructors reject empty dice, oversized dice pools and inverted
/// ranges, so every `Formula` can be rolled without panicking. Dice
/// bounds always fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Formula {
    /// Sum of `count` dice with `sides` faces, plus `bonus`
    Dice { count: u32, sides: u32, bonus: u32 },
    /// One uniform draw from `[min, max]`
    Range { min: i64, max: i64 },
    /// A fixed value
    Constant(i64),
}

impl Formula {
    /// Create a dice formula, e.g. `Formula::dice(3, 6, 2)` for `3D6+2`
    pub fn dice(count: u32, sides: u32, bonus: u32) -> Result<Self, FormulaError> {
        checked_dice(count, sides, bonus, || format!("{}D{}+{}", count, sides, bonus))
    }

    /// Create an inclusive range formula
    pub fn range(min: i64, max: i64) -> Result<Self, FormulaError> {
        if min >= max {
            return Err(FormulaError::IllegalRange(format!("{}-{}", min, max)));
        }
        Ok(Formula::Range { min, max })
    }

    /// Create a constant formula
    pub fn constant(value: i64) -> Self {
        Formula::Constant(value)
    }

    /// Whether this formula always rolls the same value
    pub fn is_constant(&self) -> bool {
        matches!(self, Formula::Constant(_))
    }

    /// Smallest value this formula can roll
    pub fn min(&self) -> i64 {
        match *self {
            Formula::Dice { count, bonus, .. } => i64::from(count) + i64::from(bonus),
            Formula::Range { min, .. } => min,
            Formula::Constant(value) => value,
        }
    }

    /// Largest value this formula can roll
    pub fn max(&self) -> i64 {
        match *self {
            Formula::Dice { count, sides, bonus } => {
                i64::from(count) * i64::from(sides) + i64::from(bonus)
            }
            Formula::Range { max, .. } => max,
            Formula::Constant(value) => value,
        }
    }

    /// Roll the formula
    pub fn roll<R: RollSource + ?Sized>(&self, rolls: &mut R) -> i64 {
        match *self {
            Formula::Dice { count, sides, bonus } => {
                let total: i64 = (0..count)
                    .map(|_| rolls.roll_range(1, i64::from(sides)))
                    .sum();
                total + i64::from(bonus)
            }
            Formula::Range { min, max } => rolls.roll_range(min, max),
            Formula::Constant(value) => value,
        }
    }
}

fn parse_number<T: FromStr>(part: &str, formula: &str) -> Result<T, FormulaError> {
    part.parse()
        .map_err(|_| FormulaError::NonNumeric(formula.to_string()))
}

fn checked_dice(
    count: u32,
    sides: u32,
    bonus: u32,
    formula: impl FnOnce() -> String,
) -> Result<Formula, FormulaError> {
    if sides == 0 {
        return Err(FormulaError::NoSides(formula()));
    }
    if count > MAX_DICE {
        return Err(FormulaError::TooManyDice(formula()));
    }
    Ok(Formula::Dice { count, sides, bonus })
}

fn parse_dice(formula: &str, delimiter: char) -> Result<Formula, FormulaError> {
    let parts: Vec<&str> = formula.split(delimiter).collect();
    if parts.len() != 2 {
        return Err(FormulaError::WrongArity(formula.to_string()));
    }

    let count: u32 = if parts[0].is_empty() {
        1
    } else {
        parse_number(parts[0], formula)?
    };

    // The bonus, if any, trails the die size
    let (sides, bonus) = match parts[1].split_once('+') {
        Some((sides, bonus)) => (sides, parse_number::<u32>(bonus, formula)?),
        None => (parts[1], 0),
    };

    let sides: u32 = if sides == "%" {
        100
    } else {
        parse_number(sides, formula)?
    };

    checked_dice(count, sides, bonus, || formula.to_string())
}

fn parse_range(formula: &str) -> Result<Formula, FormulaError> {
    let parts: Vec<&str> = formula.split('-').collect();
    if parts.len() != 2 {
        return Err(FormulaError::WrongArity(formula.to_string()));
    }

    let min: i64 = parse_number(parts[0], formula)?;
    let max: i64 = parse_number(parts[1], formula)?;
    if min >= max {
        return Err(FormulaError::IllegalRange(formula.to_string()));
    }

    Ok(Formula::Range { min, max })
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let formula = s.trim();

        if formula.contains('D') {
            parse_dice(formula, 'D')
        } else if formula.contains('d') {
            parse_dice(formula, 'd')
        } else if formula.contains('-') {
            parse_range(formula)
        } else if !formula.is_empty() && formula.chars().all(|c| c.is_ascii_digit()) {
            Ok(Formula::Constant(parse_number(formula, formula)?))
        } else {
            Err(FormulaError::Unrecognized(formula.to_string()))
        }
    }
}

impl TryFrom<String> for Formula {
    type Error = FormulaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Formula> for String {
    fn from(formula: Formula) -> Self {
        formula.to_string()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Formula::Dice { count, sides, bonus } => {
                write!(f, "{}D{}", count, sides)?;
                if bonus > 0 {
                    write!(f, "+{}", bonus)?;
                }
                Ok(())
            }
            Formula::Range { min, max } => write!(f, "{}-{}", min, max),
            Formula::Constant(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FixedRoll, ScriptedRolls};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_test_rng() -> StdRng {
        StdRng::seed_from_u64(12345)
    }

    fn assert_rolls_within(formula: &str, min: i64, max: i64, rolls: usize) {
        let parsed: Formula = formula.parse().unwrap();
        let mut rng = make_test_rng();
        for _ in 0..rolls {
            let rolled = parsed.roll(&mut rng);
            assert!(
                (min..=max).contains(&rolled),
                "{} rolled {} outside [{}, {}]",
                formula,
                rolled,
                min,
                max
            );
        }
    }

    #[test]
    fn test_legal_formulas_roll_in_bounds() {
        assert_rolls_within("3D4", 3, 12, 40);
        assert_rolls_within("d20", 1, 20, 80);
        assert_rolls_within("D%", 1, 100, 300);
        assert_rolls_within("2D2+3", 5, 7, 20);
        assert_rolls_within("3-9", 3, 9, 20);
        assert_rolls_within("47", 47, 47, 10);
    }

    #[test]
    fn test_illegal_formulas_rejected() {
        for formula in ["2D", "D", "xDy", "4-2", "-", "3-", "x-y", "7to9", ""] {
            assert!(
                formula.parse::<Formula>().is_err(),
                "illegal formula '{}' was accepted",
                formula
            );
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            "4-2".parse::<Formula>(),
            Err(FormulaError::IllegalRange("4-2".to_string()))
        );
        assert_eq!(
            "1-2-3".parse::<Formula>(),
            Err(FormulaError::WrongArity("1-2-3".to_string()))
        );
        assert_eq!(
            "xDy".parse::<Formula>(),
            Err(FormulaError::NonNumeric("xDy".to_string()))
        );
        assert_eq!(
            "7to9".parse::<Formula>(),
            Err(FormulaError::Unrecognized("7to9".to_string()))
        );
        assert_eq!(
            "2D0".parse::<Formula>(),
            Err(FormulaError::NoSides("2D0".to_string()))
        );
    }

    #[test]
    fn test_percent_die_is_d100() {
        let formula: Formula = "D%".parse().unwrap();
        assert_eq!(formula, Formula::Dice { count: 1, sides: 100, bonus: 0 });
        assert_eq!(formula.to_string(), "1D100");
    }

    #[test]
    fn test_display_canonical_forms() {
        assert_eq!("3d6+2".parse::<Formula>().unwrap().to_string(), "3D6+2");
        assert_eq!("3-18".parse::<Formula>().unwrap().to_string(), "3-18");
        assert_eq!("14".parse::<Formula>().unwrap().to_string(), "14");
    }

    #[test]
    fn test_bounds() {
        let formula: Formula = "2D6+3".parse().unwrap();
        assert_eq!(formula.min(), 5);
        assert_eq!(formula.max(), 15);
    }

    #[test]
    fn test_dice_sum_uses_every_roll() {
        let formula: Formula = "3D6+1".parse().unwrap();
        let mut rolls = ScriptedRolls::new(vec![2, 4, 6]);
        assert_eq!(formula.roll(&mut rolls), 13);
    }

    #[test]
    fn test_fixed_roll_clamps() {
        let formula: Formula = "2D4".parse().unwrap();
        assert_eq!(formula.roll(&mut FixedRoll(99)), 8);
        assert_eq!(formula.roll(&mut FixedRoll(0)), 2);
    }

    #[test]
    fn test_constructors_validate() {
        assert!(Formula::dice(2, 0, 0).is_err());
        assert!(Formula::range(5, 5).is_err());
        assert_eq!(Formula::range(1, 3).unwrap().max(), 3);
        assert!(Formula::constant(7).is_constant());
    }

    #[test]
    fn test_oversized_bonus_rejected() {
        assert_eq!(
            "1D6+9223372036854775807".parse::<Formula>(),
            Err(FormulaError::NonNumeric("1D6+9223372036854775807".to_string()))
        );
    }

    #[test]
    fn test_largest_formula_rolls_without_overflow() {
        let text = format!("{}D{}+{}", MAX_DICE, u32::MAX, u32::MAX);
        let formula: Formula = text.parse().unwrap();
        let expected = i64::from(MAX_DICE) * i64::from(u32::MAX) + i64::from(u32::MAX);

        assert_eq!(formula.max(), expected);
        assert_eq!(formula.roll(&mut FixedRoll(i64::MAX)), expected);
        assert_eq!(formula.min(), i64::from(MAX_DICE) + i64::from(u32::MAX));
    }

    #[test]
    fn test_negative_bonus_rejected() {
        assert_eq!(
            "1D6+-3".parse::<Formula>(),
            Err(FormulaError::NonNumeric("1D6+-3".to_string()))
        );
        assert!(serde_json::from_str::<Formula>("\"1D6+-3\"").is_err());
    }

    #[test]
    fn test_dice_pool_is_capped() {
        assert_eq!(
            "4294967295D1".parse::<Formula>(),
            Err(FormulaError::TooManyDice("4294967295D1".to_string()))
        );
        assert!(Formula::dice(MAX_DICE + 1, 6, 0).is_err());
        assert_eq!(Formula::dice(MAX_DICE, 1, 0).unwrap().max(), i64::from(MAX_DICE));
    }

    #[test]
    fn test_bonus_survives_serde() {
        let formula: Formula = "1D6+3".parse().unwrap();
        let json = serde_json::to_string(&formula).unwrap();
        let back: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(back, formula);
        assert_eq!(back.max(), 9);
    }

    #[test]
    fn test_serde_as_string() {
        let formula: Formula = "2d8+1".parse().unwrap();
        let json = serde_json::to_string(&formula).unwrap();
        assert_eq!(json, "\"2D8+1\"");

        let back: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(back, formula);
        assert!(serde_json::from_str::<Formula>("\"9-1\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_dice_rolls_within_bounds(count in 0u32..12, sides in 1u32..30, bonus in 0u32..50, seed in any::<u64>()) {
            let formula = Formula::dice(count, sides, bonus).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let rolled = formula.roll(&mut rng);
            prop_assert!(rolled >= formula.min() && rolled <= formula.max());
        }

        #[test]
        fn prop_range_rolls_within_bounds(min in 0i64..500, span in 1i64..500, seed in any::<u64>()) {
            let formula: Formula = format!("{}-{}", min, min + span).parse().unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let rolled = formula.roll(&mut rng);
            prop_assert!(rolled >= min && rolled <= min + span);
        }
    }
}
