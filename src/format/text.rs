//! Human-readable text output formatter

use crate::catalog::Intersection;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// Text formatter - one block per intersection with its image URLs
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, records: &[Intersection], _config: &Config) -> Result<String> {
        let mut output = String::new();

        for record in records {
            output.push_str(&format!("[{}] {}\n", record.id, record));

            if let Some(url) = &record.traffic_url {
                output.push_str(&format!("  camera: {}\n", url));
            }

            for (direction, url) in record.views.iter() {
                output.push_str(&format!("  {}: {}\n", direction, url));
            }
        }

        Ok(output)
    }
}
