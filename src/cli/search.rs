//! Search command handler
//!
//! Searches intersections by main or cross road name.

use crate::catalog::StreetMatch;
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// Street name (or fragment) to search for
    pub query: String,

    /// Require a full, case-sensitive match
    #[arg(long, short = 'e')]
    pub exact: bool,

    /// Dataset file (overrides configured path)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,
}

/// Run the search command
pub fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(args.data.as_deref(), &config)?;

    let mode = if args.exact {
        StreetMatch::Exact
    } else {
        StreetMatch::Fuzzy
    };

    let results: Vec<_> = catalog
        .search_by_street(&args.query, mode)
        .into_iter()
        .cloned()
        .collect();

    if results.is_empty() {
        eprintln!("No intersections match {:?}", args.query);
        return Ok(());
    }

    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    super::write_output(&results, &format, args.output.as_deref(), &config)
}
