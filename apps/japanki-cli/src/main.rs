use clap::{Parser, Subcommand};
use japanki_csvs::NormalizeMode;
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod logging;

use config::JapankiConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "japanki")]
#[command(about = "Japanki - study Japanese vocabulary from a CSV table")]
#[command(version)]
struct Cli {
    /// YAML config file with default paths and categories
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one random vocabulary entry from the given categories
    Show {
        /// Category names, case-insensitive (prompts for one when omitted)
        categories: Vec<String>,

        /// Vocabulary table to read
        #[arg(short, long)]
        words: Option<PathBuf>,
    },

    /// Write a cleaned copy of the vocabulary table
    Normalize {
        /// Transform to apply: split-examples or reindex
        #[arg(short, long, default_value = "split-examples")]
        mode: NormalizeMode,

        /// Source table
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Destination table, must differ from the source
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every vocabulary category
    Categories,
}

fn main() -> CliResult<()> {
    logging::init();

    let cli = Cli::parse();
    let config = JapankiConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Show { categories, words } => {
            let categories = if categories.is_empty() {
                config.default_categories
            } else {
                categories
            };
            commands::show::execute(categories, words.unwrap_or(config.words_csv))
        }

        Commands::Normalize {
            mode,
            input,
            output,
        } => commands::normalize::execute(
            mode,
            input.unwrap_or(config.words_csv),
            output.unwrap_or(config.normalized_csv),
        ),

        Commands::Categories => commands::categories::execute(),
    }
}
