//! The six abilities and the dice they are rolled on.

use serde::{Deserialize, Serialize};

use crate::dice::Die;
use crate::error::{MechError, MechResult};

/// One of the six fixed abilities.
///
/// The catalog never changes at runtime: each ability is permanently bound
/// to its die, from Brains on a D20 down to Brawn on a D4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Thinking, remembering, and figuring things out (D20).
    Brains,
    /// Fine motor control and working with tools (D12).
    Handle,
    /// Toughness and stubborn persistence (D10).
    Grit,
    /// Winning people over (D8).
    Charm,
    /// Speed, dodging, and running away (D6).
    Flight,
    /// Raw muscle (D4).
    Brawn,
}

impl Ability {
    /// All six abilities in catalog order, largest die first.
    pub const ALL: [Self; 6] = [
        Self::Brains,
        Self::Handle,
        Self::Grit,
        Self::Charm,
        Self::Flight,
        Self::Brawn,
    ];

    /// The die this ability is rolled on.
    pub fn die(self) -> Die {
        match self {
            Self::Brains => Die::D20,
            Self::Handle => Die::D12,
            Self::Grit => Die::D10,
            Self::Charm => Die::D8,
            Self::Flight => Die::D6,
            Self::Brawn => Die::D4,
        }
    }

    /// The ability bound to `die`. Each die backs exactly one ability, so
    /// the lookup never fails.
    pub fn for_die(die: Die) -> Self {
        match die {
            Die::D20 => Self::Brains,
            Die::D12 => Self::Handle,
            Die::D10 => Self::Grit,
            Die::D8 => Self::Charm,
            Die::D6 => Self::Flight,
            Die::D4 => Self::Brawn,
        }
    }

    /// Look up an ability by its label, case-insensitively.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "brains" => Ok(Self::Brains),
            "handle" => Ok(Self::Handle),
            "grit" => Ok(Self::Grit),
            "charm" => Ok(Self::Charm),
            "flight" => Ok(Self::Flight),
            "brawn" => Ok(Self::Brawn),
            _ => Err(MechError::UnknownAbility(s.trim().to_string())),
        }
    }

    /// Look up an ability by its label or by its die descriptor, so front
    /// ends can accept `"grit"` and `"d10"` interchangeably.
    pub fn parse_selector(s: &str) -> MechResult<Self> {
        match Self::parse(s) {
            Ok(ability) => Ok(ability),
            Err(err) => match Die::parse(s) {
                Ok(die) => Ok(Self::for_die(die)),
                Err(_) => Err(err),
            },
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brains => write!(f, "Brains"),
            Self::Handle => write!(f, "Handle"),
            Self::Grit => write!(f, "Grit"),
            Self::Charm => write!(f, "Charm"),
            Self::Flight => write!(f, "Flight"),
            Self::Brawn => write!(f, "Brawn"),
        }
    }
}
