//! Strengths, flaws, and the ability-modifier resolver.
//!
//! Strengths and flaws share one shape: a named trait carrying a signed
//! modifier to a single ability. The category is display-only — the
//! resolver honors the sign of the value, nothing else.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::{MechError, MechResult};

/// A signed bonus or penalty to one ability's rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// The ability the modifier applies to.
    pub ability: Ability,
    /// Signed amount added to each roll of that ability.
    pub value: i32,
}

/// How a trait is presented on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitCategory {
    /// A positive trait, shown under STRENGTHS.
    Strength,
    /// A negative trait, shown under FLAWS.
    Flaw,
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Flaw => write!(f, "Flaw"),
        }
    }
}

/// A named character trait carrying one ability modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTrait {
    /// Trait name, unique per sheet.
    pub name: String,
    /// Display category.
    pub category: TraitCategory,
    /// The modifier the trait grants.
    pub modifier: Modifier,
}

impl CharacterTrait {
    /// A strength granting `value` to `ability`.
    pub fn strength(name: &str, ability: Ability, value: i32) -> Self {
        Self {
            name: name.to_string(),
            category: TraitCategory::Strength,
            modifier: Modifier { ability, value },
        }
    }

    /// A flaw granting `value` (normally negative) to `ability`.
    pub fn flaw(name: &str, ability: Ability, value: i32) -> Self {
        Self {
            name: name.to_string(),
            category: TraitCategory::Flaw,
            modifier: Modifier { ability, value },
        }
    }
}

impl std::fmt::Display for CharacterTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.modifier.value;
        if value > 0 {
            write!(f, "{} (+{} {})", self.name, value, self.modifier.ability)
        } else {
            write!(f, "{} ({} {})", self.name, value, self.modifier.ability)
        }
    }
}

/// A character's acquired traits, deduplicated by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitSet {
    traits: Vec<CharacterTrait>,
}

impl TraitSet {
    /// An empty trait set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait. Names are unique per sheet, compared case-insensitively.
    pub fn add(&mut self, t: CharacterTrait) -> MechResult<()> {
        if self
            .traits
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&t.name))
        {
            return Err(MechError::DuplicateTrait(t.name));
        }
        self.traits.push(t);
        Ok(())
    }

    /// Remove a trait by name, returning it.
    pub fn remove(&mut self, name: &str) -> MechResult<CharacterTrait> {
        let index = self
            .traits
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MechError::UnknownTrait(name.to_string()))?;
        Ok(self.traits.remove(index))
    }

    /// All traits, in acquisition order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterTrait> {
        self.traits.iter()
    }

    /// Traits in one display category, in acquisition order.
    pub fn by_category(&self, category: TraitCategory) -> Vec<&CharacterTrait> {
        self.traits
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// Number of traits on the sheet.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// True when no traits are held.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Net modifier for `ability`: the sum of every matching trait's value
    /// across both categories. Zero when nothing matches.
    pub fn modifier_for(&self, ability: Ability) -> i32 {
        self.traits
            .iter()
            .filter(|t| t.modifier.ability == ability)
            .map(|t| t.modifier.value)
            .sum()
    }
}

/// The strength options offered on the sheet.
pub fn strength_options() -> Vec<CharacterTrait> {
    vec![
        CharacterTrait::strength("Quick Reflexes", Ability::Flight, 2),
        CharacterTrait::strength("Sharp Mind", Ability::Brains, 2),
        CharacterTrait::strength("Iron Will", Ability::Grit, 2),
    ]
}

/// The flaw options offered on the sheet.
pub fn flaw_options() -> Vec<CharacterTrait> {
    vec![
        CharacterTrait::flaw("Clumsy", Ability::Handle, -1),
        CharacterTrait::flaw("Absent-minded", Ability::Brains, -1),
        CharacterTrait::flaw("Weak Constitution", Ability::Grit, -1),
    ]
}
