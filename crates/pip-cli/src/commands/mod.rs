pub mod catalog;
pub mod play;
pub mod roll;

use pip_sheet::{Character, SheetConfig, SheetSession};

/// Build a session for one-shot commands: a blank character, optionally
/// seeded.
fn one_shot_session(seed: Option<u64>) -> SheetSession {
    let mut config = SheetConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    SheetSession::new(Character::new("Roller"), config)
}
