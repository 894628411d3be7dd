//! Show command handler
//!
//! Looks up one intersection by camera id or by exact location.

use crate::config::Config;
use crate::error::Result;
use crate::geo::GeoPoint;
use clap::Args;

/// Show command arguments
#[derive(Args)]
pub struct ShowArgs {
    /// Camera id, e.g. 8001
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub id: Option<u32>,

    /// Latitude (requires --lng)
    #[arg(long, requires = "lng")]
    pub lat: Option<f64>,

    /// Longitude (requires --lat)
    #[arg(long, requires = "lat")]
    pub lng: Option<f64>,

    /// Dataset file (overrides configured path)
    #[arg(long, short = 'd')]
    pub data: Option<String>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the show command
pub fn run(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let catalog = super::load_catalog(args.data.as_deref(), &config)?;

    let record = if let Some(id) = args.id {
        catalog.get_by_id(id)
    } else if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        catalog.get_by_location(GeoPoint::new(lat, lng))
    } else {
        eprintln!("Error: No lookup key given. Use --id, or --lat and --lng");
        std::process::exit(1);
    };

    match record {
        Some(record) => {
            let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
            super::write_output(&[record.clone()], &format, None, &config)
        }
        None => {
            eprintln!("No matching intersection found");
            std::process::exit(1);
        }
    }
}
