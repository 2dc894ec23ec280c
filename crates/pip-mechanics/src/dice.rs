//! Dice, rollers, and exploding rolls.
//!
//! Every ability is bound to one polyhedral die. Rolls explode: when a die
//! shows its maximum face it is rolled again and all faces are summed, so a
//! single check can produce more than one face value.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A polyhedral die.
///
/// Only the six dice used by the ability catalog exist; there is no custom
/// die, so a die with fewer than two faces is unrepresentable and an
/// exploding roll always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// All six dice, smallest first.
    pub const ALL: [Self; 6] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
    ];

    /// Number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Parse a die descriptor like `"D20"` or `"d6"`.
    ///
    /// Anything that is not one of the six real dice is rejected with
    /// [`MechError::InvalidDie`]; there is no fallback die.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "d4" => Ok(Self::D4),
            "d6" => Ok(Self::D6),
            "d8" => Ok(Self::D8),
            "d10" => Ok(Self::D10),
            "d12" => Ok(Self::D12),
            "d20" => Ok(Self::D20),
            _ => Err(MechError::InvalidDie(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "D{}", self.sides())
    }
}

/// Source of uniform die faces.
///
/// The production implementation wraps [`StdRng`]. Tests substitute a
/// [`ScriptedRoller`] to pin down exact outcomes.
pub trait Roller {
    /// Draw one face of `die`, uniform in `1..=sides`.
    fn roll(&mut self, die: Die) -> u32;
}

/// A [`Roller`] backed by [`StdRng`].
#[derive(Debug)]
pub struct StdRoller {
    rng: StdRng,
}

impl StdRoller {
    /// Seeded roller for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roller seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Roller for StdRoller {
    fn roll(&mut self, die: Die) -> u32 {
        self.rng.random_range(1..=die.sides())
    }
}

/// A [`Roller`] that replays a fixed queue of faces.
///
/// Intended for tests that need exact die results; drawing past the end of
/// the script panics.
#[derive(Debug)]
pub struct ScriptedRoller {
    faces: VecDeque<u32>,
}

impl ScriptedRoller {
    /// Roller that will return `faces` in order.
    pub fn new(faces: &[u32]) -> Self {
        Self {
            faces: faces.iter().copied().collect(),
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, _die: Die) -> u32 {
        self.faces
            .pop_front()
            .expect("scripted roller ran out of faces")
    }
}

/// Roll one exploding die.
///
/// Draws a face, and keeps drawing while the maximum face comes up. The
/// result has at least one element; every element is in `1..=sides`, every
/// element but the last equals `sides`, and the last is strictly below it.
pub fn roll_exploding(die: Die, roller: &mut dyn Roller) -> Vec<u32> {
    let mut faces = Vec::new();
    loop {
        let face = roller.roll(die);
        faces.push(face);
        if face < die.sides() {
            break;
        }
    }
    faces
}
