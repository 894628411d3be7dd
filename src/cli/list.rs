//! List command handler
//!
//! Prints every intersection in the catalog.

use crate::config::Config;
use crate::error::Result;
use crate::format::available_formats;
use clap::Args;

/// List command arguments
#[derive(Args)]
pub struct ListArgs {
    /// Dataset file (overrides configured path)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the list command
pub fn run(args: ListArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;
    let catalog = super::load_catalog(args.data.as_deref(), &config)?;

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    super::write_output(&catalog.all(), &format, args.output.as_deref(), &config)
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
