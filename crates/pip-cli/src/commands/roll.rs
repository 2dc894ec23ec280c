use colored::Colorize;

use pip_mechanics::Ability;

pub fn run(abilities: &[String], seed: Option<u64>) -> Result<(), String> {
    let mut session = super::one_shot_session(seed);

    for label in abilities {
        let ability = Ability::parse_selector(label).map_err(|e| e.to_string())?;
        if session.slots().contains(ability) {
            return Err(format!("{ability} given twice"));
        }
        session.toggle_ability(ability);
    }

    match session.roll() {
        Some(result) => {
            println!("{}", format!("Result: {}", result.average).bold());
            for outcome in &result.rolls {
                println!("  {outcome}");
            }
            Ok(())
        }
        None => Err("nothing selected".to_string()),
    }
}

pub fn run_action(name: &str, seed: Option<u64>) -> Result<(), String> {
    let mut session = super::one_shot_session(seed);
    session.select_action(name).map_err(|e| e.to_string())?;

    // select_action rolls unconditionally, so both are present.
    if let Some(action) = session.active_action() {
        println!(
            "{} ({} + {})",
            action.name.bold(),
            action.abilities[0],
            action.abilities[1],
        );
    }
    if let Some(result) = session.last_result() {
        println!("{}", format!("Result: {}", result.average).bold());
        for outcome in &result.rolls {
            println!("  {outcome}");
        }
    }

    Ok(())
}
