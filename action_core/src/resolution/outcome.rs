//! Outcome - what happened when an action reached its target

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of delivering one action to one target
///
/// `Display` renders the human-readable report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The target dodged the attack
    Evaded {
        target: String,
        source: String,
        verb: String,
        evasion: i64,
        to_hit: i64,
        roll: i64,
    },
    /// The attack landed but protection soaked all of it
    Absorbed {
        target: String,
        verb: String,
        delivered: i64,
        protection: i64,
    },
    /// The attack landed and cost the target life
    Hit {
        target: String,
        initiator: String,
        source: String,
        context: Option<String>,
        delivered: i64,
        protection: i64,
        life_before: i64,
        life_after: i64,
        killed: bool,
    },
    /// A condition was delivered as independent stacks
    Conditions {
        target: String,
        initiator: String,
        verb: String,
        power: i64,
        landed: i64,
        total: i64,
        accumulated: i64,
    },
    /// A context forwarded a search to each concealed object
    Searched {
        context: String,
        findings: Vec<Outcome>,
    },
    /// No handler on the target could process the verb
    Unhandled {
        target: String,
        initiator: String,
        source: String,
        verb: String,
    },
}

impl Outcome {
    /// Whether some handler processed the action
    pub fn is_handled(&self) -> bool {
        !matches!(self, Outcome::Unhandled { .. })
    }

    /// Life removed from the target by this outcome
    pub fn life_lost(&self) -> i64 {
        match self {
            Outcome::Hit {
                life_before,
                life_after,
                ..
            } => life_before - life_after,
            _ => 0,
        }
    }

    /// Condition stacks that got through, including stacks landed on searched objects
    pub fn stacks_landed(&self) -> i64 {
        match self {
            Outcome::Conditions { landed, .. } => *landed,
            Outcome::Searched { findings, .. } => findings.iter().map(Outcome::stacks_landed).sum(),
            _ => 0,
        }
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, Outcome::Hit { killed: true, .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Evaded {
                target,
                source,
                verb,
                evasion,
                to_hit,
                roll,
            } => write!(
                f,
                "{} evades {} {} ... evasion={} vs attack={} (rolled {})",
                target, source, verb, evasion, to_hit, roll
            ),
            Outcome::Absorbed {
                target,
                verb,
                delivered,
                protection,
            } => write!(
                f,
                "{}'s protection ({}) absorbs all {} damage from {}",
                target, protection, delivered, verb
            ),
            Outcome::Hit {
                target,
                initiator,
                source,
                context,
                delivered,
                protection,
                life_before,
                life_after,
                killed,
            } => {
                write!(
                    f,
                    "{} hit by {} using {} for {}-{} life-points",
                    target, initiator, source, delivered, protection
                )?;
                if let Some(context) = context {
                    write!(f, " in {}", context)?;
                }
                write!(
                    f,
                    "\n    {} life: {} - {} = {}",
                    target,
                    life_before,
                    life_before - life_after,
                    life_after
                )?;
                if *killed {
                    f.write_str(", and is killed")?;
                }
                Ok(())
            }
            Outcome::Conditions {
                target,
                initiator,
                verb,
                power,
                landed,
                total,
                accumulated,
            } => write!(
                f,
                "{} resists {} of {} {} stacks from {} (power={}), now has {}",
                target,
                total - landed,
                total,
                verb,
                initiator,
                power,
                accumulated
            ),
            Outcome::Searched { context, findings } => {
                if findings.is_empty() {
                    return write!(f, "nothing is concealed in {}", context);
                }
                write!(f, "searching {}:", context)?;
                for finding in findings {
                    write!(f, "\n    {}", finding)?;
                }
                Ok(())
            }
            Outcome::Unhandled {
                target,
                initiator,
                source,
                verb,
            } => write!(
                f,
                "{} cannot process {} event from {} using {}",
                target, verb, initiator, source
            ),
        }
    }
}
