//! The navigable roll-history log.
//!
//! Entries are kept newest-first: index 0 is always the most recent roll
//! and new entries push everything else down. A cursor supports stepping
//! through past rolls; every append snaps it back to the newest entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pip_mechanics::RollOutcome;

/// Label recorded when a roll did not come from a catalog action.
pub const MANUAL_ROLL: &str = "Manual Roll";

/// One recorded roll.
///
/// Entries are immutable once appended; the log only grows (unless the
/// session is configured to purge a deselected action's entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the roll happened.
    pub timestamp: DateTime<Utc>,
    /// Per-ability outcomes of the roll.
    pub rolls: Vec<RollOutcome>,
    /// Ceiling average across the outcomes.
    pub average: i32,
    /// Originating action name, or [`MANUAL_ROLL`].
    pub action: String,
}

/// Append-only log of rolls with a navigation cursor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl RollHistory {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry at the front and snap the cursor to it.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.cursor = 0;
    }

    /// The entry at `index` (0 = most recent).
    pub fn at(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been rolled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Cursor position (0 = newest).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step the cursor toward more recent rolls. Returns false when already
    /// at the newest entry.
    pub fn newer(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor toward older rolls. Returns false when already at
    /// the oldest entry (or the log is empty).
    pub fn older(&mut self) -> bool {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// 1-based position of the cursor entry counting from the oldest roll:
    /// the most recent of N rolls is "roll N". Zero on an empty log.
    pub fn roll_number(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// Ordinal label of the cursor entry ("3rd", "21st").
    pub fn roll_label(&self) -> String {
        ordinal(self.roll_number())
    }

    /// Remove every entry recorded for `action`, returning how many were
    /// dropped. The cursor is clamped back into range.
    pub fn purge_action(&mut self, action: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.action != action);
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        before - self.entries.len()
    }

    /// Export the whole log as markdown, oldest roll first.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Roll History\n\n");
        for (number, entry) in self.entries.iter().rev().enumerate() {
            out.push_str(&format!(
                "## {} Roll — {}\n\n",
                ordinal(number + 1),
                entry.timestamp.format("%H:%M"),
            ));
            out.push_str(&format!("**Action**: {}\n", entry.action));
            out.push_str(&format!("**Result**: {}\n", entry.average));
            for outcome in &entry.rolls {
                out.push_str(&format!("- {outcome}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Export the whole log as plain text, oldest roll first.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Roll History\n============\n\n");
        for (number, entry) in self.entries.iter().rev().enumerate() {
            out.push_str(&format!(
                "{} Roll ({}) — {}: {}\n",
                ordinal(number + 1),
                entry.timestamp.format("%H:%M"),
                entry.action,
                entry.average,
            ));
            for outcome in &entry.rolls {
                out.push_str(&format!("  {outcome}\n"));
            }
            out.push('\n');
        }
        out
    }
}

/// English ordinal label: 1st, 2nd, 3rd, 4th, with 11th-13th as the usual
/// exceptions.
pub fn ordinal(n: usize) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pip_mechanics::{Ability, Die, RollOutcome};

    fn entry(action: &str, average: i32) -> HistoryEntry {
        HistoryEntry {
            timestamp: Utc::now(),
            rolls: vec![RollOutcome {
                ability: Ability::Grit,
                die: Die::D10,
                roll_results: vec![average as u32],
                modifier: 0,
                final_total: average,
            }],
            average,
            action: action.to_string(),
        }
    }

    #[test]
    fn append_puts_newest_at_index_zero() {
        let mut history = RollHistory::new();
        history.append(entry(MANUAL_ROLL, 4));
        history.append(entry(MANUAL_ROLL, 9));
        assert_eq!(history.len(), 2);
        assert_eq!(history.at(0).unwrap().average, 9);
        assert_eq!(history.at(1).unwrap().average, 4);
    }

    #[test]
    fn append_resets_cursor() {
        let mut history = RollHistory::new();
        history.append(entry(MANUAL_ROLL, 1));
        history.append(entry(MANUAL_ROLL, 2));
        assert!(history.older());
        assert_eq!(history.cursor(), 1);
        history.append(entry(MANUAL_ROLL, 3));
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current().unwrap().average, 3);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut history = RollHistory::new();
        assert!(!history.older());
        assert!(!history.newer());

        history.append(entry(MANUAL_ROLL, 1));
        history.append(entry(MANUAL_ROLL, 2));

        assert!(!history.newer());
        assert!(history.older());
        assert!(!history.older());
        assert_eq!(history.current().unwrap().average, 1);
        assert!(history.newer());
        assert_eq!(history.current().unwrap().average, 2);
    }

    #[test]
    fn roll_number_counts_from_oldest() {
        let mut history = RollHistory::new();
        for i in 1..=3 {
            history.append(entry(MANUAL_ROLL, i));
        }
        // Cursor on the newest of three rolls.
        assert_eq!(history.roll_number(), 3);
        history.older();
        history.older();
        assert_eq!(history.roll_number(), 1);
        assert_eq!(history.roll_label(), "1st");
    }

    #[test]
    fn ordinal_labels() {
        for (n, expected) in [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (103, "103rd"),
            (111, "111th"),
        ] {
            assert_eq!(ordinal(n), expected);
        }
    }

    #[test]
    fn purge_drops_only_matching_entries() {
        let mut history = RollHistory::new();
        history.append(entry(MANUAL_ROLL, 1));
        history.append(entry("Convince", 2));
        history.append(entry("Convince", 3));
        history.append(entry(MANUAL_ROLL, 4));

        assert_eq!(history.purge_action("Convince"), 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.at(0).unwrap().average, 4);
        assert_eq!(history.at(1).unwrap().average, 1);
    }

    #[test]
    fn purge_clamps_cursor() {
        let mut history = RollHistory::new();
        history.append(entry("Sneak", 1));
        history.append(entry("Sneak", 2));
        history.append(entry(MANUAL_ROLL, 3));
        history.older();
        history.older();
        assert_eq!(history.cursor(), 2);

        history.purge_action("Sneak");
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(history.current().is_some());
    }

    #[test]
    fn exports_run_oldest_first() {
        let mut history = RollHistory::new();
        history.append(entry(MANUAL_ROLL, 5));
        history.append(entry("Hide", 8));

        let md = history.export_markdown();
        let first = md.find("1st Roll").unwrap();
        let second = md.find("2nd Roll").unwrap();
        assert!(first < second);
        assert!(md.contains("**Action**: Hide"));

        let txt = history.export_text();
        assert!(txt.contains("1st Roll"));
        assert!(txt.contains("Hide"));
    }

    #[test]
    fn serde_round_trip() {
        let mut history = RollHistory::new();
        history.append(entry(MANUAL_ROLL, 7));
        let json = serde_json::to_string(&history).unwrap();
        let back: RollHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.at(0).unwrap().average, 7);
    }
}
