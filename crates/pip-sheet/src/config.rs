//! Configuration for a sheet session.

/// Configuration for a sheet session.
#[derive(Debug, Clone, Default)]
pub struct SheetConfig {
    /// RNG seed for reproducible rolls; seeded from the OS when absent.
    pub seed: Option<u64>,
    /// Purge an action's history entries when that action is deselected.
    ///
    /// Off by default, keeping the history strictly append-only. Hosting
    /// layers that want the destructive variant opt in.
    pub purge_history_on_deselect: bool,
}

impl SheetConfig {
    /// Fix the RNG seed for reproducible rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable purging a deselected action's history entries.
    pub fn with_purge_on_deselect(mut self) -> Self {
        self.purge_history_on_deselect = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_history() {
        let cfg = SheetConfig::default();
        assert_eq!(cfg.seed, None);
        assert!(!cfg.purge_history_on_deselect);
    }

    #[test]
    fn builder_methods() {
        let cfg = SheetConfig::default().with_seed(7).with_purge_on_deselect();
        assert_eq!(cfg.seed, Some(7));
        assert!(cfg.purge_history_on_deselect);
    }
}
