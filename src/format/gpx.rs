//! GPX output formatter

use crate::catalog::Intersection;
use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;

/// GPX formatter - outputs one waypoint per intersection
pub struct GpxFormatter;

impl OutputFormatter for GpxFormatter {
    fn name(&self) -> &str {
        "gpx"
    }

    fn description(&self) -> &str {
        "GPX waypoint file"
    }

    fn format(&self, records: &[Intersection], _config: &Config) -> Result<String> {
        let mut gpx = String::new();

        // XML header
        gpx.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        gpx.push('\n');
        gpx.push_str(r#"<gpx version="1.1" creator="tocams">"#);
        gpx.push('\n');

        // Metadata
        gpx.push_str("  <metadata>\n");
        gpx.push_str(&format!(
            "    <name>Toronto traffic cameras ({} intersections)</name>\n",
            records.len()
        ));
        gpx.push_str("  </metadata>\n");

        // One waypoint per intersection
        for record in records {
            gpx.push_str(&format!(
                r#"  <wpt lat="{}" lon="{}">"#,
                record.location.lat, record.location.lng
            ));
            gpx.push('\n');
            gpx.push_str(&format!(
                "    <name>{} / {}</name>\n",
                xml_escape(&record.main_road),
                xml_escape(&record.cross_road)
            ));
            gpx.push_str(&format!("    <desc>Camera {}</desc>\n", record.id));

            if let Some(url) = &record.traffic_url {
                gpx.push_str(&format!("    <link href=\"{}\"/>\n", xml_escape(url)));
            }

            gpx.push_str("    <sym>camera</sym>\n");
            gpx.push_str("  </wpt>\n");
        }

        gpx.push_str("</gpx>\n");
        Ok(gpx)
    }
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const CSV: &str = "Camera8001,43.643079,-79.381407,YORK ST,BREMNER BLVD,http://opendata.toronto.ca/transportation/tmc/rescucameraimages/CameraImages/loc8001.jpg,,,,";

    #[test]
    fn test_gpx_format() {
        let formatter = GpxFormatter;
        let catalog = Catalog::from_csv(CSV);
        let config = Config::default();

        let output = formatter.format(&catalog.all(), &config).unwrap();

        // Verify GPX structure
        assert!(output.contains(r#"<?xml version="1.0""#));
        assert!(output.contains(r#"<gpx version="1.1""#));
        assert!(output.contains(r#"<wpt lat="43.643079" lon="-79.381407">"#));
        assert!(output.contains("<name>YORK ST / BREMNER BLVD</name>"));
        assert!(output.contains("<desc>Camera 8001</desc>"));
        assert!(output.contains("</gpx>"));
    }

    #[test]
    fn test_gpx_escapes_names() {
        let formatter = GpxFormatter;
        let csv = "Camera8002,43.6,-79.3,KING & QUEEN,<WEIRD>,u,,,,";
        let catalog = Catalog::from_csv(csv);

        let output = formatter.format(&catalog.all(), &Config::default()).unwrap();
        assert!(output.contains("KING &amp; QUEEN / &lt;WEIRD&gt;"));
    }

    #[test]
    fn test_gpx_formatter_info() {
        let formatter = GpxFormatter;
        assert_eq!(formatter.name(), "gpx");
        assert!(!formatter.description().is_empty());
    }
}
