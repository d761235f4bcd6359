//! Command-line interface for fightbook.
//!
//! This module provides the CLI structure and command definitions for
//! the `fightbook` binary, which hosts the roster entry points.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, EditCommand, FightCommand, ListCommand, LoadCommand,
    SaveCommand,
};

/// fightbook - track fighters, records, and rankings
///
/// Keeps a roster of fighters grouped into weight classes, with
/// win/loss records, rankings, and fight histories, persisted to a
/// snapshot file between invocations.
#[derive(Debug, Parser)]
#[command(name = "fightbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List fighters, sorted by weight class and ranking
    List(ListCommand),

    /// Add a fighter to the roster
    Add(AddCommand),

    /// Edit a fighter's wins, losses, or ranking
    Edit(EditCommand),

    /// Delete a fighter from the roster
    Delete(DeleteCommand),

    /// Record a fight in a fighter's history
    Fight(FightCommand),

    /// Save the roster to a snapshot file
    Save(SaveCommand),

    /// Load a roster snapshot, replacing the current roster
    Load(LoadCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
