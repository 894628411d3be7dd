//! Map URL output formatter

use crate::catalog::Intersection;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// URL formatter - outputs a map URL per intersection
pub struct UrlFormatter;

impl UrlFormatter {
    /// Format URLs with an optional provider override
    pub fn format_with_provider(
        &self,
        records: &[Intersection],
        config: &Config,
        provider: Option<&str>,
    ) -> Result<String> {
        let mut output = String::new();
        for record in records {
            let url = config.format_url(provider, record.location.lat, record.location.lng)?;
            output.push_str(&url);
            output.push('\n');
        }
        Ok(output)
    }
}

impl OutputFormatter for UrlFormatter {
    fn name(&self) -> &str {
        "url"
    }

    fn description(&self) -> &str {
        "Map URL per record"
    }

    fn format(&self, records: &[Intersection], config: &Config) -> Result<String> {
        self.format_with_provider(records, config, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const CSV: &str = "Camera8001,43.643079,-79.381407,YORK ST,BREMNER BLVD,u,,,,\nCamera8002,43.64222,-79.384068,BREMNER BLVD,LOWER SIMCOE ST,u,,,,";

    #[test]
    fn test_url_format_default_provider() {
        let formatter = UrlFormatter;
        let catalog = Catalog::from_csv(CSV);
        let config = Config::default();

        let output = formatter.format(&catalog.all(), &config).unwrap();

        // Default provider is OpenStreetMap, one line per record
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("openstreetmap.org"));
        assert!(lines[0].contains("43.643079"));
        assert!(lines[1].contains("-79.384068"));
    }

    #[test]
    fn test_url_format_with_provider() {
        let formatter = UrlFormatter;
        let catalog = Catalog::from_csv(CSV);
        let config = Config::default();

        let output = formatter
            .format_with_provider(&catalog.all(), &config, Some("google"))
            .unwrap();

        assert!(output.contains("google.com/maps"));
    }

    #[test]
    fn test_url_format_unknown_provider() {
        let formatter = UrlFormatter;
        let catalog = Catalog::from_csv(CSV);
        let config = Config::default();

        let result = formatter.format_with_provider(&catalog.all(), &config, Some("nowhere"));
        assert!(result.is_err());
    }

    #[test]
    fn test_url_formatter_info() {
        let formatter = UrlFormatter;
        assert_eq!(formatter.name(), "url");
        assert!(!formatter.description().is_empty());
    }
}
