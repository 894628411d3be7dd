//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default dataset file path
pub const DEFAULT_DATA_FILE: &str = "data/toronto-intersection-cameras.csv";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default map URL provider (the dataset's own browsing UI uses OSM tiles)
pub const DEFAULT_URL_PROVIDER: &str = "openstreetmap";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "tocams";
