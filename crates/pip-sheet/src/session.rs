//! Interactive character sheet session.
//!
//! `SheetSession` owns the character, the selection slots, the roll history,
//! and the active action, and exposes the operations a front end binds to.
//! `process` dispatches line commands for REPL front ends; the state-mutating
//! methods are also public so a UI layer can call them directly.

use chrono::Utc;

use pip_mechanics::{
    Ability, Action, RollResult, Roller, StdRoller, TraitCategory, action_catalog,
    action_categories, engine, find_action, flaw_options, strength_options,
};

use crate::character::Character;
use crate::config::SheetConfig;
use crate::error::{SheetError, SheetResult};
use crate::history::{HistoryEntry, MANUAL_ROLL, RollHistory};
use crate::slots::SelectionSlots;

/// A live character sheet with its roll calculator.
pub struct SheetSession {
    character: Character,
    slots: SelectionSlots,
    history: RollHistory,
    active_action: Option<Action>,
    last_result: Option<RollResult>,
    roller: Box<dyn Roller>,
    config: SheetConfig,
}

impl SheetSession {
    /// Start a session for `character`, rolling with a [`StdRoller`].
    pub fn new(character: Character, config: SheetConfig) -> Self {
        let roller: Box<dyn Roller> = match config.seed {
            Some(seed) => Box::new(StdRoller::seeded(seed)),
            None => Box::new(StdRoller::from_os()),
        };
        Self::with_roller(character, config, roller)
    }

    /// Start a session with a caller-supplied roller.
    pub fn with_roller(character: Character, config: SheetConfig, roller: Box<dyn Roller>) -> Self {
        Self {
            character,
            slots: SelectionSlots::new(),
            history: RollHistory::new(),
            active_action: None,
            last_result: None,
            roller,
            config,
        }
    }

    /// The character on the sheet.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Mutable access to the character for the hosting layer.
    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    /// Current selection slots.
    pub fn slots(&self) -> &SelectionSlots {
        &self.slots
    }

    /// The roll history.
    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    /// The currently selected action, if any.
    pub fn active_action(&self) -> Option<&Action> {
        self.active_action.as_ref()
    }

    /// The most recent roll result, cleared by selection changes.
    pub fn last_result(&self) -> Option<&RollResult> {
        self.last_result.as_ref()
    }

    /// Toggle an ability in the selection slots.
    ///
    /// Manual selection detaches any active action (the slots themselves
    /// are left to the toggle rules) and invalidates the displayed result.
    pub fn toggle_ability(&mut self, ability: Ability) {
        self.active_action = None;
        self.slots.toggle(ability);
        self.last_result = None;
    }

    /// Empty one slot (0 = oldest, 1 = newest), leaving the other alone.
    pub fn remove_slot(&mut self, index: usize) -> SheetResult<()> {
        self.slots.remove_at(index)?;
        self.last_result = None;
        Ok(())
    }

    /// Empty both slots and detach any active action.
    pub fn clear_selection(&mut self) {
        self.slots.clear();
        self.active_action = None;
        self.last_result = None;
    }

    /// Roll the current selection.
    ///
    /// On success the result is recorded in the history, labeled with the
    /// active action's name or [`MANUAL_ROLL`]. Returns `None` without
    /// touching the history when nothing is selected.
    pub fn roll(&mut self) -> Option<&RollResult> {
        let Some(result) = engine::roll_check(
            &self.slots.as_slots(),
            &self.character.traits,
            self.roller.as_mut(),
        ) else {
            self.last_result = None;
            return None;
        };

        let action = self
            .active_action
            .as_ref()
            .map_or_else(|| MANUAL_ROLL.to_string(), |a| a.name.clone());
        self.history.append(HistoryEntry {
            timestamp: Utc::now(),
            rolls: result.rolls.clone(),
            average: result.average,
            action,
        });
        self.last_result = Some(result);
        self.last_result.as_ref()
    }

    /// Select a catalog action: auto-fill both slots in the action's
    /// declared order and roll immediately, no confirmation step.
    ///
    /// Fails closed when the action names an unknown ability; the slots are
    /// left untouched.
    pub fn select_action(&mut self, name: &str) -> SheetResult<()> {
        let action = find_action(name)?;
        let [first, second] = action.resolve()?;
        self.slots.set_pair(first, second);
        self.active_action = Some(action);
        self.roll();
        Ok(())
    }

    /// Deselect the active action and clear the slots, returning the action
    /// and how many history entries were purged (always 0 unless the
    /// session is configured to purge).
    pub fn deselect_action(&mut self) -> Option<(Action, usize)> {
        let action = self.active_action.take()?;
        self.slots.clear();
        self.last_result = None;
        let purged = if self.config.purge_history_on_deselect {
            self.history.purge_action(&action.name)
        } else {
            0
        };
        Some((action, purged))
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SheetResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (trimmed.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "bio" => self.do_bio(rest),
            "toggle" | "t" => self.do_toggle(rest),
            "roll" | "r" => Ok(self.do_roll()),
            "clear" => Ok(self.do_clear()),
            "remove" => self.do_remove(rest),
            "slots" => Ok(self.format_slots()),
            "action" | "a" => self.do_action(rest),
            "deselect" => Ok(self.do_deselect()),
            "actions" => Ok(Self::do_list_actions()),
            "abilities" => Ok(Self::do_list_abilities()),
            "strength" => self.do_add_trait(rest, TraitCategory::Strength),
            "flaw" => self.do_add_trait(rest, TraitCategory::Flaw),
            "forget" => self.do_forget(rest),
            "traits" => Ok(self.do_list_traits()),
            "take" => self.do_take(rest),
            "drop" => self.do_drop(rest),
            "pack" => Ok(self.do_pack()),
            "history" | "h" => Ok(self.do_history()),
            "older" | "prev" => Ok(self.do_older()),
            "newer" | "next" => Ok(self.do_newer()),
            "export" => self.do_export(rest),
            "status" => Ok(self.do_status()),
            "help" => Ok(Self::do_help()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(SheetError::UnknownCommand(trimmed.to_string())),
        }
    }

    fn do_bio(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Ok(self.format_bio());
        }
        let (field, value) = rest
            .split_once(' ')
            .ok_or(SheetError::Usage("bio [<field> <value>]"))?;
        let value = value.trim();
        let info = &mut self.character.info;
        match field.to_lowercase().as_str() {
            "name" => info.name = value.to_string(),
            "age" => info.age = value.to_string(),
            "height" => info.height = value.to_string(),
            "weight" => info.weight = value.to_string(),
            "mother" => info.mother = value.to_string(),
            "mother-job" => info.mother_job = value.to_string(),
            "father" => info.father = value.to_string(),
            "father-job" => info.father_job = value.to_string(),
            "siblings" => info.siblings = value.to_string(),
            "friend" => info.significant_others.push(value.to_string()),
            _ => {
                return Err(SheetError::Usage(
                    "bio <name|age|height|weight|mother|mother-job|father|father-job|siblings|friend> <value>",
                ));
            }
        }
        Ok(self.format_bio())
    }

    fn format_bio(&self) -> String {
        let info = &self.character.info;
        let show = |v: &str| if v.is_empty() { "-" } else { v }.to_string();
        let parent = |name: &str, job: &str| {
            if name.is_empty() {
                "-".to_string()
            } else if job.is_empty() {
                name.to_string()
            } else {
                format!("{name} ({job})")
            }
        };
        let mut out = format!(
            "Name: {}\nAge: {}\nHeight: {}\nWeight: {}\nMother: {}\nFather: {}\nSiblings: {}",
            show(&info.name),
            show(&info.age),
            show(&info.height),
            show(&info.weight),
            parent(&info.mother, &info.mother_job),
            parent(&info.father, &info.father_job),
            show(&info.siblings),
        );
        if !info.significant_others.is_empty() {
            out.push_str(&format!(
                "\nImportant people: {}",
                info.significant_others.join(", "),
            ));
        }
        out
    }

    fn do_toggle(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("toggle <ability|die>"));
        }
        let ability = Ability::parse_selector(rest)?;
        self.toggle_ability(ability);
        Ok(self.format_slots())
    }

    fn do_roll(&mut self) -> String {
        match self.roll() {
            Some(result) => result.to_string(),
            None => "Nothing selected. Pick an ability first.".to_string(),
        }
    }

    fn do_clear(&mut self) -> String {
        self.clear_selection();
        "Selection cleared.".to_string()
    }

    fn do_remove(&mut self, rest: &str) -> SheetResult<String> {
        let slot: usize = rest
            .parse()
            .map_err(|_| SheetError::Usage("remove <1|2>"))?;
        if slot == 0 {
            return Err(SheetError::NoSuchSlot(slot));
        }
        self.remove_slot(slot - 1)?;
        Ok(self.format_slots())
    }

    fn do_action(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("action <name>"));
        }
        self.select_action(rest)?;
        let header = self.active_action.as_ref().map_or_else(String::new, |a| {
            format!("Action: {} ({} + {})", a.name, a.abilities[0], a.abilities[1])
        });
        let result = self
            .last_result
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        Ok(format!("{header}\n{result}"))
    }

    fn do_deselect(&mut self) -> String {
        match self.deselect_action() {
            Some((action, 0)) => format!("Deselected {}.", action.name),
            Some((action, purged)) => format!(
                "Deselected {} and dropped {} history entr{}.",
                action.name,
                purged,
                if purged == 1 { "y" } else { "ies" },
            ),
            None => "No action selected.".to_string(),
        }
    }

    fn do_list_actions() -> String {
        let catalog = action_catalog();
        let mut out = String::new();
        for category in action_categories() {
            out.push_str(&format!("{category}:\n"));
            for action in catalog.iter().filter(|a| a.category == category) {
                out.push_str(&format!(
                    "  {} ({} + {}): {}\n",
                    action.name, action.abilities[0], action.abilities[1], action.description,
                ));
            }
        }
        out.trim_end().to_string()
    }

    fn do_list_abilities() -> String {
        let lines: Vec<String> = Ability::ALL
            .iter()
            .map(|a| format!("  {} ({})", a, a.die()))
            .collect();
        format!("Abilities:\n{}", lines.join("\n"))
    }

    fn do_add_trait(&mut self, rest: &str, category: TraitCategory) -> SheetResult<String> {
        let options = match category {
            TraitCategory::Strength => strength_options(),
            TraitCategory::Flaw => flaw_options(),
        };
        if rest.is_empty() {
            let names: Vec<&str> = options.iter().map(|t| t.name.as_str()).collect();
            return Ok(format!(
                "{category} options: {}",
                names.join(", "),
            ));
        }
        let chosen = options
            .into_iter()
            .find(|t| t.name.eq_ignore_ascii_case(rest))
            .ok_or_else(|| {
                pip_mechanics::MechError::UnknownTrait(rest.to_string())
            })?;
        let line = chosen.to_string();
        self.character.add_trait(chosen)?;
        Ok(format!("Added {line}."))
    }

    fn do_forget(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("forget <trait name>"));
        }
        let removed = self.character.remove_trait(rest)?;
        Ok(format!("Forgot {}.", removed.name))
    }

    fn do_list_traits(&self) -> String {
        if self.character.traits.is_empty() {
            return "No traits yet.".to_string();
        }
        let mut out = String::from("Strengths:\n");
        for t in self.character.traits.by_category(TraitCategory::Strength) {
            out.push_str(&format!("  {t}\n"));
        }
        out.push_str("Flaws:\n");
        for t in self.character.traits.by_category(TraitCategory::Flaw) {
            out.push_str(&format!("  {t}\n"));
        }
        out.trim_end().to_string()
    }

    fn do_take(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("take <item>"));
        }
        self.character.add_item(rest);
        Ok(format!("Took {rest}."))
    }

    fn do_drop(&mut self, rest: &str) -> SheetResult<String> {
        if rest.is_empty() {
            return Err(SheetError::Usage("drop <item>"));
        }
        if self.character.remove_item(rest) {
            Ok(format!("Dropped {rest}."))
        } else {
            Err(SheetError::UnknownItem(rest.to_string()))
        }
    }

    fn do_pack(&self) -> String {
        if self.character.inventory.is_empty() {
            return "The pack is empty.".to_string();
        }
        let lines: Vec<String> = self
            .character
            .inventory
            .iter()
            .map(|i| format!("  {i}"))
            .collect();
        format!("Carrying:\n{}", lines.join("\n"))
    }

    fn do_history(&self) -> String {
        match self.history.current() {
            Some(entry) => format_entry(&self.history.roll_label(), entry),
            None => "No rolls yet.".to_string(),
        }
    }

    fn do_older(&mut self) -> String {
        if self.history.is_empty() {
            return "No rolls yet.".to_string();
        }
        if !self.history.older() {
            return "Already at the oldest roll.".to_string();
        }
        self.do_history()
    }

    fn do_newer(&mut self) -> String {
        if self.history.is_empty() {
            return "No rolls yet.".to_string();
        }
        if !self.history.newer() {
            return "Already at the most recent roll.".to_string();
        }
        self.do_history()
    }

    fn do_export(&self, rest: &str) -> SheetResult<String> {
        match rest {
            "markdown" | "md" => Ok(self.history.export_markdown()),
            "text" | "txt" | "" => Ok(self.history.export_text()),
            _ => Err(SheetError::Usage("export <markdown|text>")),
        }
    }

    fn do_status(&self) -> String {
        let action = self
            .active_action
            .as_ref()
            .map_or("none", |a| a.name.as_str());
        let result = self
            .last_result
            .as_ref()
            .map_or_else(|| "Ready to roll".to_string(), |r| r.average.to_string());
        format!(
            "{}\n{}\nAction: {action}\nLast result: {result}\nRolls recorded: {}",
            self.character.name().to_uppercase(),
            self.format_slots(),
            self.history.len(),
        )
    }

    fn format_slots(&self) -> String {
        let (oldest, newest) = self.slots.pair();
        let show = |slot: Option<Ability>| {
            slot.map_or_else(
                || "empty".to_string(),
                |a| format!("{} ({})", a, a.die()),
            )
        };
        format!("Slots: 1) {}  2) {}", show(oldest), show(newest))
    }

    fn do_help() -> String {
        "Commands:\n\
         \x20 bio [field value]  show or edit the sheet biography\n\
         \x20 toggle <ability>   select or deselect an ability (name or die, e.g. d10)\n\
         \x20 roll               roll the selected abilities\n\
         \x20 clear              empty both slots\n\
         \x20 remove <1|2>       empty one slot\n\
         \x20 slots              show the selection slots\n\
         \x20 action <name>      run a catalog action (auto-selects and rolls)\n\
         \x20 deselect           drop the selected action\n\
         \x20 actions            list the action catalog\n\
         \x20 abilities          list the six abilities\n\
         \x20 strength [name]    list or add a strength\n\
         \x20 flaw [name]        list or add a flaw\n\
         \x20 forget <name>      remove a trait\n\
         \x20 traits             list strengths and flaws\n\
         \x20 take <item>        add an item to the pack\n\
         \x20 drop <item>        remove an item from the pack\n\
         \x20 pack               list carried items\n\
         \x20 history            show the roll under the cursor\n\
         \x20 older / newer      step through past rolls\n\
         \x20 export [md|txt]    export the roll history\n\
         \x20 status             show the sheet at a glance\n\
         \x20 quit               leave the session"
            .to_string()
    }
}

/// Render one history entry under its ordinal label.
fn format_entry(label: &str, entry: &HistoryEntry) -> String {
    let mut out = format!(
        "{label} Roll ({})\nAction: {}\nResult: {}",
        entry.timestamp.format("%H:%M"),
        entry.action,
        entry.average,
    );
    for outcome in &entry.rolls {
        out.push_str(&format!("\n  {outcome}"));
    }
    out
}
