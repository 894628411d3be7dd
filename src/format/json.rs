//! JSON output formatter

use crate::catalog::Intersection;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// JSON formatter - outputs the full records as a JSON array
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON records"
    }

    fn format(&self, records: &[Intersection], _config: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const CSV: &str = "Camera8153,43.739729,-79.421831,AVENUE RD,WILSON AVE,http://opendata.toronto.ca/transportation/tmc/rescucameraimages/CameraImages/loc8153.jpg,  ,  ,  ,";

    #[test]
    fn test_json_format() {
        let formatter = JsonFormatter;
        let catalog = Catalog::from_csv(CSV);
        let config = Config::default();

        let output = formatter.format(&catalog.all(), &config).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["id"], 8153);
        assert_eq!(parsed[0]["main_road"], "AVENUE RD");
        assert_eq!(parsed[0]["location"]["lat"], 43.739729);
        // Absent view slots are omitted, not null
        assert!(parsed[0]["views"].get("north").is_none());
    }

    #[test]
    fn test_json_format_empty_is_valid() {
        let formatter = JsonFormatter;
        let output = formatter.format(&[], &Config::default()).unwrap();
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_json_formatter_info() {
        let formatter = JsonFormatter;
        assert_eq!(formatter.name(), "json");
        assert!(!formatter.description().is_empty());
    }
}
