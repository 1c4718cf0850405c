//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands;
use crate::config::{config_path, Config};
use crate::document::{Document, Toggle};
use crate::list::{list, Printer};
use crate::store::{default_store, HostsStore};

const EXAMPLES: &str = "\
Examples:
  hosty cat
  hosty save example-entry 127.0.0.1 example.com
  hosty enable example-entry
  hosty disable example-entry
  hosty remove example-entry";

#[derive(Parser)]
#[command(name = "hosty", version)]
#[command(about = "Manage labeled entries in the hosts file")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Echo the whole hosts file
    #[command(visible_alias = "c")]
    Cat,

    /// Save an entry; use this to create or edit an entry (always enabled after save)
    #[command(visible_alias = "s")]
    Save {
        entry: Option<String>,
        ip: Option<String>,
        domains: Vec<String>,
    },

    /// Enable an entry
    #[command(visible_alias = "e")]
    Enable { entry: String },

    /// Disable an entry
    #[command(visible_alias = "d")]
    Disable { entry: String },

    /// Remove an entry
    #[command(visible_alias = "r")]
    Remove { entry: String },
}

/// Printer writing to stdout, with clap's rendered help as usage.
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&mut self, text: &str) {
        print!("{text}");
    }

    fn usage(&mut self) {
        println!("{}", Cli::command().render_help());
    }
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&config_path())?;
    let store = default_store(&config);
    let mut printer = ConsolePrinter;
    dispatch(cli.command, &store, &mut printer)
}

/// Read the hosts file once, then run one command against it.
pub fn dispatch(
    command: Option<Commands>,
    store: &dyn HostsStore,
    printer: &mut dyn Printer,
) -> Result<()> {
    let content = store.read().context("failed to load hosts file")?;

    if let Some(Commands::Cat) = command {
        commands::cat(&content, printer);
        return Ok(());
    }

    let mut doc = Document::parse(content)?;

    match command {
        None | Some(Commands::Cat) => list(doc.entries(), printer),
        Some(Commands::Save {
            entry: Some(entry),
            ip: Some(ip),
            domains,
        }) if !domains.is_empty() => {
            commands::save(store, &mut doc, printer, &entry, &ip, &domains)?;
        }
        Some(Commands::Save { .. }) => printer.usage(),
        Some(Commands::Enable { entry }) => {
            commands::toggle(store, &mut doc, printer, &entry, Toggle::Enable)?
        }
        Some(Commands::Disable { entry }) => {
            commands::toggle(store, &mut doc, printer, &entry, Toggle::Disable)?
        }
        Some(Commands::Remove { entry }) => commands::remove(store, &mut doc, printer, &entry)?,
    }
    Ok(())
}
