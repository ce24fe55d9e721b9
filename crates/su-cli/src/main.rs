//! CLI frontend for the Sales-Up scenario engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "su",
    about = "Sales-Up: a timed, branching sales-simulation engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a deck and report its shape and problems
    Check {
        /// Path to the deck JSON file
        deck: PathBuf,

        /// Entry slide id the session would start at
        #[arg(short, long, default_value = "1")]
        entry: i64,
    },

    /// List slides and answers of a deck
    Show {
        /// Path to the deck JSON file
        deck: PathBuf,
    },

    /// Run a scripted playthrough and print the session record as JSON
    Run {
        /// Path to the deck JSON file
        deck: PathBuf,

        /// Comma-separated answer ids, e.g. "1,2,1"
        #[arg(short, long)]
        answers: String,

        /// Session owner identifier
        #[arg(short, long, default_value = "local")]
        owner: String,

        /// Path to a pricing/sale rules JSON file
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Play a deck interactively
    Play {
        /// Path to the deck JSON file
        deck: PathBuf,

        /// Session owner identifier
        #[arg(short, long, default_value = "local")]
        owner: String,

        /// Path to a pricing/sale rules JSON file
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { deck, entry } => commands::check::run(&deck, entry),
        Commands::Show { deck } => commands::show::run(&deck),
        Commands::Run {
            deck,
            answers,
            owner,
            rules,
        } => commands::run::run(&deck, &answers, &owner, rules.as_deref()),
        Commands::Play { deck, owner, rules } => {
            commands::play::run(&deck, &owner, rules.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
