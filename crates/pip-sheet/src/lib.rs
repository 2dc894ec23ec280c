//! Session state for the Pipsqueak character sheet.
//!
//! Owns everything that changes while playing: the character (bio, traits,
//! inventory), the capacity-2 FIFO ability selection, the navigable roll
//! history, and the session object that ties them to the check engine in
//! `pip-mechanics`. Front ends observe this state and render it; all
//! mutation goes through the operations defined here.

/// Character identity, traits, and inventory.
pub mod character;
/// Session configuration.
pub mod config;
/// Error types for sheet operations.
pub mod error;
/// The navigable roll-history log.
pub mod history;
/// The interactive session driver.
pub mod session;
/// The two-slot ability selection buffer.
pub mod slots;

pub use character::{Character, CharacterInfo};
pub use config::SheetConfig;
pub use error::{SheetError, SheetResult};
pub use history::{HistoryEntry, MANUAL_ROLL, RollHistory, ordinal};
pub use session::SheetSession;
pub use slots::SelectionSlots;
