//! Output formatters
//!
//! Provides trait-based output formatting for catalog query results.

pub mod gpx;
pub mod json;
pub mod text;
pub mod url;

use crate::catalog::Intersection;
use crate::config::Config;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a list of intersection records
    ///
    /// # Arguments
    /// * `records` - The query results to format
    /// * `config` - Application config (for url providers, etc.)
    fn format(&self, records: &[Intersection], config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "text" => Some(Box::new(text::TextFormatter)),
        "json" => Some(Box::new(json::JsonFormatter)),
        "gpx" => Some(Box::new(gpx::GpxFormatter)),
        "url" => Some(Box::new(url::UrlFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON records".to_string(),
        },
        FormatInfo {
            name: "gpx".to_string(),
            description: "GPX waypoint file".to_string(),
        },
        FormatInfo {
            name: "url".to_string(),
            description: "Map URL per record".to_string(),
        },
    ]
}
