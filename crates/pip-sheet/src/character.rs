//! Character identity: biographical info, traits, and inventory.

use serde::{Deserialize, Serialize};

use pip_mechanics::{Ability, CharacterTrait, MechResult, TraitSet};

/// Biographical details from the front of the sheet. All free text; the
/// mechanics never read these.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterInfo {
    /// Character name.
    pub name: String,
    /// Age.
    pub age: String,
    /// Height.
    pub height: String,
    /// Weight.
    pub weight: String,
    /// Mother's name.
    pub mother: String,
    /// Mother's job.
    pub mother_job: String,
    /// Father's name.
    pub father: String,
    /// Father's job.
    pub father_job: String,
    /// Siblings.
    pub siblings: String,
    /// Significant others.
    pub significant_others: Vec<String>,
}

impl CharacterInfo {
    /// Info with only the name filled in.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// A playable character: identity plus mechanical traits and carried gear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Character {
    /// Biographical details.
    pub info: CharacterInfo,
    /// Acquired strengths and flaws.
    pub traits: TraitSet,
    /// Carried items, free text.
    pub inventory: Vec<String>,
}

impl Character {
    /// A fresh character with the given name and nothing else.
    pub fn new(name: &str) -> Self {
        Self {
            info: CharacterInfo::named(name),
            ..Self::default()
        }
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Add a trait; trait names are unique on a sheet.
    pub fn add_trait(&mut self, t: CharacterTrait) -> MechResult<()> {
        self.traits.add(t)
    }

    /// Remove a trait by name, returning it.
    pub fn remove_trait(&mut self, name: &str) -> MechResult<CharacterTrait> {
        self.traits.remove(name)
    }

    /// Net modifier for an ability from every trait on the sheet.
    pub fn modifier_for(&self, ability: Ability) -> i32 {
        self.traits.modifier_for(ability)
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }

    /// Remove the first matching item. Returns true when something was
    /// removed.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self
            .inventory
            .iter()
            .position(|i| i.eq_ignore_ascii_case(item))
        {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pip_mechanics::MechError;

    #[test]
    fn new_character_is_blank() {
        let timmy = Character::new("Timmy");
        assert_eq!(timmy.name(), "Timmy");
        assert!(timmy.traits.is_empty());
        assert!(timmy.inventory.is_empty());
    }

    #[test]
    fn trait_dedupe_goes_through_trait_set() {
        let mut c = Character::new("Timmy");
        c.add_trait(CharacterTrait::strength("Iron Will", Ability::Grit, 2))
            .unwrap();
        assert!(matches!(
            c.add_trait(CharacterTrait::strength("Iron Will", Ability::Grit, 2)),
            Err(MechError::DuplicateTrait(_))
        ));
        assert_eq!(c.modifier_for(Ability::Grit), 2);
    }

    #[test]
    fn inventory_add_and_remove() {
        let mut c = Character::new("Timmy");
        c.add_item("Slingshot");
        c.add_item("Chalk");
        assert!(c.remove_item("slingshot"));
        assert!(!c.remove_item("Slingshot"));
        assert_eq!(c.inventory, vec!["Chalk"]);
    }

    #[test]
    fn serde_round_trip() {
        let mut c = Character::new("Timmy");
        c.info.age = "12".to_string();
        c.info.significant_others.push("Best friend Sam".to_string());
        c.add_item("Slingshot");
        let json = serde_json::to_string(&c).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Timmy");
        assert_eq!(back.info.age, "12");
        assert_eq!(back.inventory, vec!["Slingshot"]);
    }
}
