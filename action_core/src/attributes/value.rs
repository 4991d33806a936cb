//! AttrValue - the tagged scalar stored under an attribute key

use crate::dice::{Formula, FormulaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single attribute value
///
/// Numeric combination and formula rolling go through [`AttrValue::as_int`]
/// and [`AttrValue::to_formula`], which define which variants count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Int(i64),
    Bool(bool),
    Formula(Formula),
    Str(String),
}

impl AttrValue {
    /// Numeric reading of this value
    ///
    /// Integers, integer-valued strings and constant formulas are numeric.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(value) => Some(*value),
            AttrValue::Str(text) => text.trim().parse().ok(),
            AttrValue::Formula(Formula::Constant(value)) => Some(*value),
            AttrValue::Formula(_) | AttrValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Formula reading of this value
    ///
    /// Strings are parsed on demand; a non-negative integer is a constant.
    pub fn to_formula(&self) -> Result<Formula, FormulaError> {
        match self {
            AttrValue::Formula(formula) => Ok(*formula),
            AttrValue::Str(text) => text.parse(),
            AttrValue::Int(value) if *value >= 0 => Ok(Formula::constant(*value)),
            other => Err(FormulaError::Unrecognized(other.to_string())),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(value) => write!(f, "{}", value),
            AttrValue::Bool(value) => write!(f, "{}", value),
            AttrValue::Formula(formula) => write!(f, "{}", formula),
            AttrValue::Str(text) => f.write_str(text),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Formula> for AttrValue {
    fn from(formula: Formula) -> Self {
        AttrValue::Formula(formula)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        AttrValue::Str(text.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(text: String) -> Self {
        AttrValue::Str(text)
    }
}
