use std::io::{self, BufRead, Write};

use colored::Colorize;

use pip_sheet::{Character, SheetConfig, SheetSession};

pub fn run(name: &str, seed: Option<u64>, purge_on_deselect: bool) -> Result<(), String> {
    let mut config = SheetConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if purge_on_deselect {
        config = config.with_purge_on_deselect();
    }

    let mut session = SheetSession::new(Character::new(name), config);

    println!("  {} sheet session for {name}", "Starting".bold());
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
