//! Game mechanics for Pipsqueak: exploding dice, the six-ability catalog,
//! strengths and flaws, the action catalog, and the check engine that
//! averages paired rolls.
//!
//! This crate is pure state and arithmetic — no I/O, no terminal concerns.
//! The session layer in `pip-sheet` drives it and the CLI sits on top of
//! that.

/// The six abilities and their dice.
pub mod ability;
/// The built-in action catalog.
pub mod action;
/// Dice, rollers, and exploding rolls.
pub mod dice;
/// The check engine.
pub mod engine;
/// Error types for mechanics operations.
pub mod error;
/// Strengths, flaws, and modifier resolution.
pub mod traits;

pub use ability::Ability;
pub use action::{Action, action_catalog, action_categories, find_action};
pub use dice::{Die, Roller, ScriptedRoller, StdRoller, roll_exploding};
pub use engine::{RollOutcome, RollResult, roll_check};
pub use error::{MechError, MechResult};
pub use traits::{
    CharacterTrait, Modifier, TraitCategory, TraitSet, flaw_options, strength_options,
};
