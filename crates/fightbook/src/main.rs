//! `fightbook` - CLI for the fighter roster tracker
//!
//! This binary hosts the roster entry points: listing, adding,
//! editing, deleting, fight recording, and snapshot save/load. The
//! working roster is read from the configured snapshot path at the
//! start of each invocation and written back after a successful
//! mutation; there is no global roster state.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::bail;
use clap::Parser;

use fightbook::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, FightCommand,
    ListCommand, LoadCommand, SaveCommand,
};
use fightbook::{init_logging, snapshot, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Edit(cmd) => handle_edit(&config, &cmd),
        Command::Delete(cmd) => handle_delete(&config, &cmd),
        Command::Fight(cmd) => handle_fight(&config, &cmd),
        Command::Save(cmd) => handle_save(&config, &cmd),
        Command::Load(cmd) => handle_load(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let mut roster = snapshot::load_or_default(config.snapshot_path())?;
    let fighters = roster.list_fighters(cmd.weight_class.as_deref());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&fighters)?);
    } else if fighters.is_empty() {
        match &cmd.weight_class {
            Some(wc) => println!("No fighters tracked in {wc}."),
            None => println!("No fighters tracked."),
        }
    } else {
        for fighter in fighters {
            println!("{fighter}");
        }
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut roster = snapshot::load_or_default(config.snapshot_path())?;
    roster.add_fighter(
        cmd.name.clone(),
        cmd.weight_class.clone(),
        cmd.wins,
        cmd.losses,
        cmd.ranking.unwrap_or_default(),
    );
    snapshot::save(&roster, config.snapshot_path())?;
    println!("Added {} ({}).", cmd.name, cmd.weight_class);
    Ok(())
}

fn handle_edit(config: &Config, cmd: &EditCommand) -> anyhow::Result<()> {
    let mut roster = snapshot::load_or_default(config.snapshot_path())?;
    if !roster.update_fighter(
        &cmd.name,
        &cmd.weight_class,
        cmd.wins,
        cmd.losses,
        cmd.ranking,
    ) {
        bail!("fighter not found: {} ({})", cmd.name, cmd.weight_class);
    }
    snapshot::save(&roster, config.snapshot_path())?;
    println!("Updated {} ({}).", cmd.name, cmd.weight_class);
    Ok(())
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut roster = snapshot::load_or_default(config.snapshot_path())?;
    if !roster.delete_fighter(&cmd.name, &cmd.weight_class) {
        bail!("fighter not found: {} ({})", cmd.name, cmd.weight_class);
    }
    snapshot::save(&roster, config.snapshot_path())?;
    println!("Deleted {} ({}).", cmd.name, cmd.weight_class);
    Ok(())
}

fn handle_fight(config: &Config, cmd: &FightCommand) -> anyhow::Result<()> {
    let mut roster = snapshot::load_or_default(config.snapshot_path())?;
    if !roster.record_fight(&cmd.name, &cmd.weight_class, &cmd.opponent, &cmd.result) {
        bail!("fighter not found: {} ({})", cmd.name, cmd.weight_class);
    }
    snapshot::save(&roster, config.snapshot_path())?;
    println!(
        "Recorded {} vs {} ({}).",
        cmd.name, cmd.opponent, cmd.result
    );
    Ok(())
}

fn handle_save(config: &Config, cmd: &SaveCommand) -> anyhow::Result<()> {
    let roster = snapshot::load_or_default(config.snapshot_path())?;
    snapshot::save(&roster, &cmd.path)?;
    println!("Saved {} fighters to {}.", roster.len(), cmd.path.display());
    Ok(())
}

fn handle_load(config: &Config, cmd: &LoadCommand) -> anyhow::Result<()> {
    // Load fully before touching the working snapshot, so a bad file
    // leaves the current roster as it was.
    let roster = snapshot::load(&cmd.path)?;
    snapshot::save(&roster, config.snapshot_path())?;
    println!(
        "Loaded {} fighters from {}.",
        roster.len(),
        cmd.path.display()
    );
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Roster]");
                println!("  Snapshot path: {}", config.snapshot_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
