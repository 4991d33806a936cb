//! Core identifier and verb types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an entity stored in a [`World`](crate::entity::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Action verb, either `BASE` or `BASE.SUBTYPE`
///
/// Only the first two dot-separated components are meaningful; an empty
/// sub-type (`"ATTACK."`) is treated as none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Verb {
    raw: String,
}

impl Verb {
    pub fn new(raw: impl Into<String>) -> Self {
        Verb { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn base(&self) -> &str {
        self.raw.split('.').next().unwrap_or_default()
    }

    pub fn sub_type(&self) -> Option<&str> {
        self.raw.split('.').nth(1).filter(|sub| !sub.is_empty())
    }

    /// Attacks are any verb mentioning `ATTACK`; everything else is a condition
    pub fn is_attack(&self) -> bool {
        self.raw.contains("ATTACK")
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Verb {
    fn from(raw: &str) -> Self {
        Verb::new(raw)
    }
}

impl From<String> for Verb {
    fn from(raw: String) -> Self {
        Verb::new(raw)
    }
}

impl From<Verb> for String {
    fn from(verb: Verb) -> Self {
        verb.raw
    }
}
