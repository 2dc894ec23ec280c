//! The two-slot ability selection buffer.
//!
//! Selections live in an ordered pair `(oldest, newest)`. Toggling a third
//! ability evicts the oldest; toggling a selected ability removes it from
//! its slot. An action auto-fill bypasses these rules and writes both slots
//! directly.

use serde::{Deserialize, Serialize};

use pip_mechanics::Ability;

use crate::error::{SheetError, SheetResult};

/// The capacity-2 FIFO selection state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSlots {
    oldest: Option<Ability>,
    newest: Option<Ability>,
}

impl SelectionSlots {
    /// Empty slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot contents as an ordered pair `(oldest, newest)`.
    pub fn pair(&self) -> (Option<Ability>, Option<Ability>) {
        (self.oldest, self.newest)
    }

    /// The slots as engine input, oldest first.
    pub fn as_slots(&self) -> [Option<Ability>; 2] {
        [self.oldest, self.newest]
    }

    /// Currently selected abilities, oldest first.
    pub fn selected(&self) -> Vec<Ability> {
        [self.oldest, self.newest].into_iter().flatten().collect()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.oldest.is_none() && self.newest.is_none()
    }

    /// True when `ability` occupies either slot.
    pub fn contains(&self, ability: Ability) -> bool {
        self.oldest == Some(ability) || self.newest == Some(ability)
    }

    /// Toggle an ability with FIFO replacement.
    ///
    /// A selected ability is evicted from its slot (the newer selection
    /// shifts into the oldest position when the oldest leaves). An
    /// unselected ability fills the free slot, or replaces the oldest
    /// selection when both are taken.
    pub fn toggle(&mut self, ability: Ability) {
        match (self.oldest, self.newest) {
            (Some(o), _) if o == ability => {
                self.oldest = self.newest.take();
            }
            (_, Some(n)) if n == ability => {
                self.newest = None;
            }
            (None, None) => {
                self.oldest = Some(ability);
            }
            (Some(_), None) => {
                self.newest = Some(ability);
            }
            // Only-newest-filled is reachable through remove_at; treat it
            // like a full buffer shift so order stays oldest-first.
            (None, Some(_)) | (Some(_), Some(_)) => {
                self.oldest = self.newest.take();
                self.newest = Some(ability);
            }
        }
    }

    /// Empty exactly one slot, leaving the other untouched.
    ///
    /// `index` is 0 for the oldest slot and 1 for the newest.
    pub fn remove_at(&mut self, index: usize) -> SheetResult<()> {
        match index {
            0 => self.oldest = None,
            1 => self.newest = None,
            other => return Err(SheetError::NoSuchSlot(other.saturating_add(1))),
        }
        Ok(())
    }

    /// Empty both slots.
    pub fn clear(&mut self) {
        self.oldest = None;
        self.newest = None;
    }

    /// Overwrite both slots in the given order, bypassing toggle rules.
    /// Used by action auto-fill.
    pub fn set_pair(&mut self, first: Ability, second: Ability) {
        self.oldest = Some(first);
        self.newest = Some(second);
    }
}
