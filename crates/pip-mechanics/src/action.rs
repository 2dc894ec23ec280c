//! The action catalog: named tasks that pair two abilities.
//!
//! Actions carry their ability references as labels so that resolution can
//! fail. Resolution is all-or-nothing: an action that names an unknown
//! ability resolves to an error and must not half-fill the selection.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::error::{MechError, MechResult};

/// A named task that rolls a fixed pair of abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action name ("Convince", "Sneak", ...).
    pub name: String,
    /// Labels of the two abilities the action rolls, in order.
    pub abilities: [String; 2],
    /// How the roll is read at the table.
    pub description: String,
    /// Grouping used for display ("Social", "Athletics", ...).
    pub category: String,
}

impl Action {
    /// Resolve both ability labels against the catalog.
    ///
    /// Fails closed: if either label is unknown the whole resolution is an
    /// error and no ability is returned.
    pub fn resolve(&self) -> MechResult<[Ability; 2]> {
        Ok([
            Ability::parse(&self.abilities[0])?,
            Ability::parse(&self.abilities[1])?,
        ])
    }
}

fn action(name: &str, first: &str, second: &str, description: &str, category: &str) -> Action {
    Action {
        name: name.to_string(),
        abilities: [first.to_string(), second.to_string()],
        description: description.to_string(),
        category: category.to_string(),
    }
}

/// The built-in action catalog.
pub fn action_catalog() -> Vec<Action> {
    vec![
        // Social
        action("Convince", "Charm", "Brains", "Average Roll vs TN", "Social"),
        action(
            "Intimidate",
            "Charm",
            "Brawn",
            "Average Roll vs TN",
            "Social",
        ),
        action("Lie", "Charm", "Flight", "Average Roll vs TN", "Social"),
        action("Act", "Charm", "Handle", "Average Roll vs TN", "Social"),
        // Athletics
        action(
            "Move Heavy",
            "Brawn",
            "Grit",
            "Average Roll vs TN",
            "Athletics",
        ),
        action(
            "Sneak",
            "Flight",
            "Grit",
            "Average Roll vs opposing Notice Roll",
            "Athletics",
        ),
        action(
            "Hide",
            "Flight",
            "Brains",
            "Average Roll vs opposing Notice Roll",
            "Athletics",
        ),
        action(
            "Acrobatics",
            "Flight",
            "Handle",
            "Average Roll vs TN",
            "Athletics",
        ),
        // Academics
        action(
            "Study",
            "Brains",
            "Grit",
            "Average Roll vs TN",
            "Academics",
        ),
        action(
            "Technology",
            "Brains",
            "Handle",
            "Average Roll vs TN",
            "Academics",
        ),
        action(
            "Crafting",
            "Charm",
            "Handle",
            "Average Roll vs TN",
            "Academics",
        ),
        // Perception
        action(
            "Notice",
            "Brains",
            "Handle",
            "Average Roll vs TN",
            "Perception",
        ),
        action(
            "Investigate",
            "Brains",
            "Grit",
            "Average Roll vs TN",
            "Perception",
        ),
    ]
}

/// Find a catalog action by name, case-insensitively.
pub fn find_action(name: &str) -> MechResult<Action> {
    action_catalog()
        .into_iter()
        .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| MechError::UnknownAction(name.trim().to_string()))
}

/// Distinct catalog categories, in catalog order.
pub fn action_categories() -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for a in action_catalog() {
        if !categories.contains(&a.category) {
            categories.push(a.category);
        }
    }
    categories
}
