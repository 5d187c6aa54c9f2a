//! CLI frontend for the Duality Dice roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dh",
    about = "Duality Dice: Hope and Fear rolls for Daggerheart",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON config file (seed, default_difficulty)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the Hope and Fear dice with a flat modifier
    Roll {
        /// Modifier added to both dice
        #[arg(default_value = "0", allow_negative_numbers = true)]
        modifier: f64,

        #[command(flatten)]
        options: RollOptions,
    },

    /// Roll with a trait from a character sheet, paying Hope from the sheet
    Trait {
        /// Character sheet (JSON)
        sheet: PathBuf,

        /// Trait name (agility, strength, finesse, instinct, presence, knowledge)
        name: String,

        /// Situational modifier added on top of the trait modifier
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        modifier: f64,

        #[command(flatten)]
        options: RollOptions,
    },
}

/// Options shared by every roll command.
#[derive(Args, Debug, Clone)]
pub struct RollOptions {
    /// Target the prevailing total must meet (default from config, else 12)
    #[arg(short, long, allow_negative_numbers = true)]
    pub difficulty: Option<f64>,

    /// Hope to spend; added to the Hope die only
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub hope: f64,

    /// Flavor text shown with the result
    #[arg(short, long, default_value = "")]
    pub flavor: String,

    /// RNG seed for a reproducible roll
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    commands::init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { modifier, options } => {
            commands::roll::run(cli.config.as_deref(), modifier, &options)
        }
        Commands::Trait {
            sheet,
            name,
            modifier,
            options,
        } => commands::trait_roll::run(cli.config.as_deref(), &sheet, &name, modifier, &options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
