//! CLI command definitions.
//!
//! This module defines the arguments of all CLI subcommands. Ranking
//! arguments accept `"C"` for the champion, a number for a ranked
//! position, and treat anything else as unranked, matching
//! [`Ranking::parse`].

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::fighter::Ranking;

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show fighters in this weight class
    pub weight_class: Option<String>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The fighter's name
    pub name: String,

    /// The fighter's weight class
    pub weight_class: String,

    /// Career wins
    #[arg(short, long, default_value_t = 0)]
    pub wins: u32,

    /// Career losses
    #[arg(short, long, default_value_t = 0)]
    pub losses: u32,

    /// Ranking: "C" for champion, a number, or omit for unranked
    #[arg(short, long, value_parser = parse_ranking)]
    pub ranking: Option<Ranking>,
}

/// Edit command arguments.
///
/// Omitted flags leave the corresponding field unchanged.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// The fighter's name
    pub name: String,

    /// The fighter's weight class
    pub weight_class: String,

    /// New win count
    #[arg(short, long)]
    pub wins: Option<u32>,

    /// New loss count
    #[arg(short, long)]
    pub losses: Option<u32>,

    /// New ranking: "C" for champion, a number, anything else unranks
    #[arg(short, long, value_parser = parse_ranking)]
    pub ranking: Option<Ranking>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// The fighter's name
    pub name: String,

    /// The fighter's weight class
    pub weight_class: String,
}

/// Fight command arguments.
#[derive(Debug, Args)]
pub struct FightCommand {
    /// The fighter's name
    pub name: String,

    /// The fighter's weight class
    pub weight_class: String,

    /// The opponent's name
    pub opponent: String,

    /// The outcome label, e.g. "win" or "loss"
    pub result: String,
}

/// Save command arguments.
#[derive(Debug, Args)]
pub struct SaveCommand {
    /// Where to write the roster snapshot
    pub path: PathBuf,
}

/// Load command arguments.
#[derive(Debug, Args)]
pub struct LoadCommand {
    /// The roster snapshot to load
    pub path: PathBuf,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Clap value parser for ranking arguments. Total, never fails.
fn parse_ranking(input: &str) -> Result<Ranking, std::convert::Infallible> {
    Ok(Ranking::parse(input))
}
