//! Warm-restart phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two alternating modes of a warm-restart schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Linear ramp from the minimum rate up to the ceiling
    #[default]
    Warmup,
    /// Cosine anneal from the ceiling down to the minimum rate
    Cooldown,
}

impl Phase {
    /// The phase entered at the next restart
    pub fn other(self) -> Self {
        match self {
            Phase::Warmup => Phase::Cooldown,
            Phase::Cooldown => Phase::Warmup,
        }
    }

    /// Occurrence count at which the first ceiling drop fires.
    ///
    /// A schedule opening with warmup counts one extra pre-restart check
    /// before its first cooldown finishes.
    pub(crate) fn first_drop_at(self) -> u32 {
        match self {
            Phase::Cooldown => 1,
            Phase::Warmup => 2,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Warmup => write!(f, "warmup"),
            Phase::Cooldown => write!(f, "cooldown"),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warmup" => Ok(Phase::Warmup),
            "cooldown" => Ok(Phase::Cooldown),
            _ => Err(format!("Unknown phase: {s}. Valid phases: warmup, cooldown")),
        }
    }
}
