//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod list;
pub mod search;
pub mod show;
pub mod streets;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::loader;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Toronto traffic-camera intersection browser
#[derive(Parser)]
#[command(name = "tocams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all intersections
    List(list::ListArgs),

    /// Show one intersection by camera id or location
    Show(show::ShowArgs),

    /// Search intersections by street name
    Search(search::SearchArgs),

    /// List all distinct street names
    Streets(streets::StreetsArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => list::run(args),
        Commands::Show(args) => show::run(args),
        Commands::Search(args) => search::run(args),
        Commands::Streets(args) => streets::run(args),
        Commands::Config(args) => config::run(args),
    }
}

/// Load the catalog from the dataset file
///
/// `data_override` takes precedence over the configured path. An unreadable
/// file is reported as a `Data` error here; the loader itself only signals
/// absence.
pub(crate) fn load_catalog(data_override: Option<&str>, config: &Config) -> Result<Catalog> {
    let path = data_override.unwrap_or(&config.data.file);

    match loader::load(Path::new(path)) {
        Some(text) => Ok(Catalog::from_csv(&text)),
        None => Err(Error::Data(format!("unable to read dataset file: {}", path))),
    }
}

/// Format records and write them to stdout or a file
pub(crate) fn write_output(
    records: &[crate::catalog::Intersection],
    format: &str,
    output: Option<&str>,
    config: &Config,
) -> Result<()> {
    let formatter = get_formatter(format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;
    let rendered = formatter.format(records, config)?;

    if let Some(path) = output {
        std::fs::write(path, &rendered)?;
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", rendered);
        if !rendered.ends_with('\n') && !rendered.is_empty() {
            println!();
        }
    }

    Ok(())
}
