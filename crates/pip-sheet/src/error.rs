//! Error types for the sheet session.

use thiserror::Error;

use pip_mechanics::MechError;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors raised while driving a character sheet session.
#[derive(Debug, Error)]
pub enum SheetError {
    /// A slot index outside the two selection slots.
    #[error("no such slot: {0} (slots are 1 and 2)")]
    NoSuchSlot(usize),

    /// A session command that could not be understood.
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    /// A session command missing its argument.
    #[error("usage: {0}")]
    Usage(&'static str),

    /// An item name that is not in the inventory.
    #[error("not carrying: {0}")]
    UnknownItem(String),

    /// A mechanics error (unknown ability, duplicate trait, ...).
    #[error(transparent)]
    Mech(#[from] MechError),
}
