//! Error types for the mechanics crate.

use thiserror::Error;

/// Result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur while building or rolling checks.
///
/// All of these are recoverable: the session reports them to the player
/// and carries on. Nothing here should ever end a session.
#[derive(Debug, Error)]
pub enum MechError {
    /// A die descriptor did not name one of the six real dice.
    #[error("invalid die: {0}")]
    InvalidDie(String),

    /// An ability label did not match any catalog ability.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// An action name did not match any catalog action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A trait with the same name is already on the sheet.
    #[error("trait already on the sheet: {0}")]
    DuplicateTrait(String),

    /// A trait name did not match anything on the sheet.
    #[error("no such trait: {0}")]
    UnknownTrait(String),
}
