mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use args::{GenerateArgs, InitArgs};
use commands::{generate, init, validate};

/// kwtree: random phylogenetic trees with k-word counts
///
/// Generates random rooted binary trees, draws branch lengths and evolves
/// per-site k-word counts from the root to the leaves with a
/// birth-death-immigration process.
#[derive(Parser, Debug)]
#[command(name = "kwtree")]
#[command(author, version, about = "Simulates k-word counts on random phylogenetic trees", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate trees from a configuration file.
    Generate(GenerateArgs),

    /// Check a configuration file without generating anything.
    Validate {
        /// YAML configuration file
        config: PathBuf,
    },

    /// Write a commented example configuration.
    Init(InitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Generate(args) => generate::generate(&args)?,
        Commands::Validate { config } => validate::validate_config(&config)?,
        Commands::Init(args) => init::init_config(&args)?,
    }

    Ok(())
}
