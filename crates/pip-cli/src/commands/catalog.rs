use comfy_table::{ContentArrangement, Table};

use pip_mechanics::{Ability, action_catalog};

pub fn abilities() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Die"]);

    for ability in Ability::ALL {
        table.add_row(vec![ability.to_string(), ability.die().to_string()]);
    }

    println!("{table}");
    Ok(())
}

pub fn actions() -> Result<(), String> {
    let catalog = action_catalog();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Action", "Abilities", "Category", "Description"]);

    for action in &catalog {
        table.add_row(vec![
            action.name.clone(),
            format!("{} + {}", action.abilities[0], action.abilities[1]),
            action.category.clone(),
            action.description.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} actions", catalog.len());

    Ok(())
}
