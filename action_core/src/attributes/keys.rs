//! Well-known attribute keys
//!
//! Keys are flat strings namespaced with dots, e.g. `EVASION.slash` or
//! `RESISTANCE.MENTAL.fear`.

/// Comma-separated verbs an entity offers
pub const ACTIONS: &str = "ACTIONS";

pub const ACCURACY: &str = "ACCURACY";
pub const DAMAGE: &str = "DAMAGE";
pub const POWER: &str = "POWER";
pub const STACKS: &str = "STACKS";

/// Resolved values written onto an action before delivery
pub const TO_HIT: &str = "TO_HIT";
pub const HIT_POINTS: &str = "HIT_POINTS";
pub const TOTAL: &str = "TOTAL";

pub const EVASION: &str = "EVASION";
pub const PROTECTION: &str = "PROTECTION";
pub const RESISTANCE: &str = "RESISTANCE";
pub const LIFE: &str = "LIFE";

/// Verb that uncovers concealed objects in a context
pub const SEARCH: &str = "SEARCH";

/// Join a key with its dotted qualifiers: `scoped("POWER", &["MENTAL", "fear"])`
/// is `POWER.MENTAL.fear`
pub fn scoped(key: &str, qualifiers: &[&str]) -> String {
    let mut scoped = String::from(key);
    for qualifier in qualifiers {
        scoped.push('.');
        scoped.push_str(qualifier);
    }
    scoped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_keys() {
        assert_eq!(scoped(EVASION, &[]), "EVASION");
        assert_eq!(scoped(EVASION, &["slash"]), "EVASION.slash");
        assert_eq!(scoped(RESISTANCE, &["MENTAL", "fear"]), "RESISTANCE.MENTAL.fear");
    }
}
