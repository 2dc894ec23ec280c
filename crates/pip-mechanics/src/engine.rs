//! The check engine: exploding rolls, modifiers, and the ceiling average.

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::dice::{Die, Roller, roll_exploding};
use crate::traits::TraitSet;

/// The outcome of rolling one ability within a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The ability that was rolled.
    pub ability: Ability,
    /// The die it was rolled on.
    pub die: Die,
    /// Every face drawn, in order. More than one element means the die
    /// exploded.
    pub roll_results: Vec<u32>,
    /// Net trait modifier applied to the face sum.
    pub modifier: i32,
    /// Face sum plus modifier.
    pub final_total: i32,
}

impl RollOutcome {
    /// Build an outcome from the drawn faces and a net modifier.
    pub fn new(ability: Ability, roll_results: Vec<u32>, modifier: i32) -> Self {
        let mut outcome = Self {
            ability,
            die: ability.die(),
            roll_results,
            modifier,
            final_total: 0,
        };
        outcome.final_total = outcome.face_sum() as i32 + modifier;
        outcome
    }

    /// Sum of the drawn faces, before the modifier.
    pub fn face_sum(&self) -> u32 {
        self.roll_results.iter().sum()
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.roll_results.iter().map(|v| v.to_string()).collect();
        write!(f, "{} ({}): {}", self.ability, self.die, faces.join("+"))?;
        if self.modifier > 0 {
            write!(f, " (+{})", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " ({})", self.modifier)?;
        }
        write!(f, " = {}", self.final_total)
    }
}

/// A completed check across one or two abilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Per-ability outcomes, in slot order.
    pub rolls: Vec<RollOutcome>,
    /// Ceiling of the mean of the final totals.
    pub average: i32,
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Result: {}", self.average)?;
        for outcome in &self.rolls {
            write!(f, "\n  {outcome}")?;
        }
        Ok(())
    }
}

/// Roll every selected ability and average the final totals.
///
/// Empty slots are skipped. Returns `None` when nothing is selected — an
/// idle state, never a zero-valued result. The average rounds up
/// (totals of 7 and 8 average to 8), which deliberately favors the higher
/// outcome.
pub fn roll_check(
    slots: &[Option<Ability>],
    traits: &TraitSet,
    roller: &mut dyn Roller,
) -> Option<RollResult> {
    let selected: Vec<Ability> = slots.iter().flatten().copied().collect();
    if selected.is_empty() {
        return None;
    }

    let rolls: Vec<RollOutcome> = selected
        .into_iter()
        .map(|ability| {
            let roll_results = roll_exploding(ability.die(), roller);
            let modifier = traits.modifier_for(ability);
            RollOutcome::new(ability, roll_results, modifier)
        })
        .collect();

    let sum: i32 = rolls.iter().map(|r| r.final_total).sum();
    let average = (f64::from(sum) / rolls.len() as f64).ceil() as i32;
    Some(RollResult { rolls, average })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRoller;
    use crate::traits::CharacterTrait;

    #[test]
    fn empty_selection_is_no_result() {
        let mut roller = ScriptedRoller::new(&[]);
        assert!(roll_check(&[], &TraitSet::new(), &mut roller).is_none());
        assert!(roll_check(&[None, None], &TraitSet::new(), &mut roller).is_none());
    }

    #[test]
    fn single_ability_with_strength_modifier() {
        // Sharp Mind grants Brains +2; a 15 on the D20 does not explode.
        let mut traits = TraitSet::new();
        traits
            .add(CharacterTrait::strength("Sharp Mind", Ability::Brains, 2))
            .unwrap();
        let mut roller = ScriptedRoller::new(&[15]);

        let result = roll_check(&[Some(Ability::Brains), None], &traits, &mut roller).unwrap();

        assert_eq!(result.rolls.len(), 1);
        let outcome = &result.rolls[0];
        assert_eq!(outcome.ability, Ability::Brains);
        assert_eq!(outcome.die, Die::D20);
        assert_eq!(outcome.roll_results, vec![15]);
        assert_eq!(outcome.modifier, 2);
        assert_eq!(outcome.final_total, 17);
        assert_eq!(result.average, 17);
    }

    #[test]
    fn two_abilities_with_an_explosion() {
        // Brains explodes once (20 then 5 = 25), Grit rolls a flat 3.
        let mut roller = ScriptedRoller::new(&[20, 5, 3]);
        let slots = [Some(Ability::Brains), Some(Ability::Grit)];

        let result = roll_check(&slots, &TraitSet::new(), &mut roller).unwrap();

        assert_eq!(result.rolls[0].roll_results, vec![20, 5]);
        assert_eq!(result.rolls[0].face_sum(), 25);
        assert_eq!(result.rolls[0].final_total, 25);
        assert_eq!(result.rolls[1].roll_results, vec![3]);
        assert_eq!(result.rolls[1].final_total, 3);
        // ceil(28 / 2)
        assert_eq!(result.average, 14);
    }

    #[test]
    fn average_rounds_up() {
        // Totals 7 and 8 average to 8, never 7.
        let mut roller = ScriptedRoller::new(&[7, 8]);
        let slots = [Some(Ability::Brains), Some(Ability::Handle)];
        let result = roll_check(&slots, &TraitSet::new(), &mut roller).unwrap();
        assert_eq!(result.average, 8);
    }

    #[test]
    fn negative_modifier_flows_through() {
        let mut traits = TraitSet::new();
        traits
            .add(CharacterTrait::flaw("Clumsy", Ability::Handle, -1))
            .unwrap();
        let mut roller = ScriptedRoller::new(&[4]);
        let result = roll_check(&[Some(Ability::Handle)], &traits, &mut roller).unwrap();
        assert_eq!(result.rolls[0].final_total, 3);
        assert_eq!(result.average, 3);
    }

    #[test]
    fn outcome_totals_faces_plus_modifier() {
        let outcome = RollOutcome::new(Ability::Brains, vec![20, 5], 2);
        assert_eq!(outcome.die, Die::D20);
        assert_eq!(outcome.face_sum(), 25);
        assert_eq!(outcome.final_total, 27);
    }

    #[test]
    fn outcome_display() {
        let outcome = RollOutcome::new(Ability::Brains, vec![20, 5], 2);
        assert_eq!(outcome.to_string(), "Brains (D20): 20+5 (+2) = 27");

        let flat = RollOutcome::new(Ability::Grit, vec![3], 0);
        assert_eq!(flat.to_string(), "Grit (D10): 3 = 3");
    }

    #[test]
    fn result_display_lists_outcomes() {
        let mut roller = ScriptedRoller::new(&[15]);
        let result = roll_check(&[Some(Ability::Brains)], &TraitSet::new(), &mut roller).unwrap();
        let text = result.to_string();
        assert!(text.starts_with("Result: 15"));
        assert!(text.contains("Brains (D20): 15 = 15"));
    }

    #[test]
    fn serde_round_trip() {
        let mut roller = ScriptedRoller::new(&[20, 2]);
        let result = roll_check(&[Some(Ability::Brains)], &TraitSet::new(), &mut roller).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: RollResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
