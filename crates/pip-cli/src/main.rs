//! Terminal front end for the Pipsqueak character sheet and roll calculator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pipsqueak",
    about = "Pipsqueak — character sheet and exploding-dice roll calculator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive sheet session
    Play {
        /// Character name
        #[arg(short, long, default_value = "Timmy")]
        name: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Drop an action's history entries when it is deselected
        #[arg(long)]
        purge_on_deselect: bool,
    },

    /// Roll one or two abilities once and print the result
    Roll {
        /// Ability labels or die descriptors, e.g. `brains grit` or `d20`
        #[arg(required = true, num_args = 1..=2)]
        abilities: Vec<String>,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a catalog action once: auto-select its abilities and roll
    Act {
        /// Action name, e.g. `convince`
        action: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the six abilities and their dice
    Abilities,

    /// List the action catalog
    Actions,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            name,
            seed,
            purge_on_deselect,
        } => commands::play::run(&name, seed, purge_on_deselect),
        Commands::Roll { abilities, seed } => commands::roll::run(&abilities, seed),
        Commands::Act { action, seed } => commands::roll::run_action(&action, seed),
        Commands::Abilities => commands::catalog::abilities(),
        Commands::Actions => commands::catalog::actions(),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        process::exit(1);
    }
}
