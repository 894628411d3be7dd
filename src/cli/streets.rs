//! Streets command handler
//!
//! Lists every distinct street name in the catalog.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Streets command arguments
#[derive(Args)]
pub struct StreetsArgs {
    /// Dataset file (overrides configured path)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Output as a JSON array instead of one name per line
    #[arg(long)]
    pub json: bool,
}

/// Run the streets command
pub fn run(args: StreetsArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(args.data.as_deref(), &config)?;

    let streets = catalog.streets();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&streets)?);
    } else {
        for street in streets {
            println!("{}", street);
        }
    }

    Ok(())
}
