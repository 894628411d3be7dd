//! Intersection records and the catalog that owns them
//!
//! This module handles:
//! - Parsing the open-data CSV into `Intersection` records
//! - Lookup by id or location
//! - Exact and fuzzy street-name search
//! - Deduplicated, sorted street listing

use crate::camera::CameraViews;
use crate::constants::dataset;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// One traffic-camera intersection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Camera number, e.g. `8034` from the label `Camera8034`
    pub id: u32,

    pub location: GeoPoint,

    pub main_road: String,

    pub cross_road: String,

    /// URL of the live camera image, when the row carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_url: Option<String>,

    pub views: CameraViews,
}

impl Intersection {
    pub fn new(
        id: u32,
        location: GeoPoint,
        main_road: &str,
        cross_road: &str,
        traffic_url: Option<&str>,
        views: CameraViews,
    ) -> Self {
        Self {
            id,
            location,
            main_road: main_road.to_string(),
            cross_road: cross_road.to_string(),
            traffic_url: traffic_url.map(|url| url.to_string()),
            views,
        }
    }
}

impl fmt::Display for Intersection {
    /// `YORK ST / BREMNER BLVD (43.643079, -79.381407)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} {}", self.main_road, self.cross_road, self.location)
    }
}

/// Opaque handle identifying one record inside a catalog
///
/// Handles are what `remove` matches on, so removal is by identity: an
/// equal-but-distinct record added separately has a different handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordHandle(u64);

/// How `search_by_street` compares road names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetMatch {
    /// Full-string, case-sensitive equality
    Exact,
    /// Case-insensitive substring containment
    #[default]
    Fuzzy,
}

impl FromStr for StreetMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "fuzzy" => Ok(Self::Fuzzy),
            _ => Err(format!("Unknown match mode: {}", s)),
        }
    }
}

struct Entry {
    handle: RecordHandle,
    record: Intersection,
}

/// The in-memory, insertion-ordered collection of intersections
///
/// Duplicate ids and locations are permitted; every single-result lookup
/// returns the first match in insertion order.
#[derive(Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    next_handle: u64,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from the raw CSV text
    ///
    /// Rows have ten positional fields: camera label, latitude, longitude,
    /// main road, cross road, live image URL, then the four directional
    /// view URLs (north, east, south, west). Both `\n` and `\r\n` row
    /// separators are accepted, and blank lines are ignored.
    ///
    /// A row with the wrong field count or an unparseable camera label is
    /// logged and skipped; one bad row never aborts the parse. Coordinates
    /// are parsed leniently (a malformed axis becomes NaN, see `GeoPoint`).
    pub fn from_csv(raw: &str) -> Self {
        let mut catalog = Self::new();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());

        for (line, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!("skipping unreadable row {}: {}", line + 1, err);
                    continue;
                }
            };

            if row.len() != dataset::FIELDS_PER_ROW {
                warn!(
                    "skipping row {}: expected {} fields, found {}",
                    line + 1,
                    dataset::FIELDS_PER_ROW,
                    row.len()
                );
                continue;
            }

            let id = match parse_camera_label(&row[0]) {
                Some(id) => id,
                None => {
                    warn!("skipping row {}: bad camera label {:?}", line + 1, &row[0]);
                    continue;
                }
            };

            let location = GeoPoint::parse(&row[1], &row[2]);
            let views = CameraViews::new(Some(&row[6]), Some(&row[7]), Some(&row[8]), Some(&row[9]));
            let traffic_url = Some(row[5].trim()).filter(|url| !url.is_empty());

            catalog.add(Intersection::new(
                id,
                location,
                &row[3],
                &row[4],
                traffic_url,
                views,
            ));
        }

        catalog
    }

    /// A detached copy of all records, in insertion order
    ///
    /// Mutating the returned vector never affects the catalog.
    pub fn all(&self) -> Vec<Intersection> {
        self.entries.iter().map(|e| e.record.clone()).collect()
    }

    /// Iterate the records in insertion order without copying
    pub fn iter(&self) -> impl Iterator<Item = &Intersection> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a record, returning the handle that identifies it
    ///
    /// No uniqueness check is performed; duplicates are allowed.
    pub fn add(&mut self, record: Intersection) -> RecordHandle {
        let handle = RecordHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry { handle, record });
        handle
    }

    /// Remove the record identified by `handle`
    ///
    /// Returns the removed record, or `None` (leaving the catalog
    /// untouched) if the handle is not tracked.
    pub fn remove(&mut self, handle: RecordHandle) -> Option<Intersection> {
        let index = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(index).record)
    }

    /// The record identified by `handle`, if still present
    pub fn get(&self, handle: RecordHandle) -> Option<&Intersection> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| &e.record)
    }

    /// First record whose location equals the given point
    pub fn get_by_location(&self, location: GeoPoint) -> Option<&Intersection> {
        self.iter().find(|record| record.location == location)
    }

    /// First record with the given camera id
    pub fn get_by_id(&self, id: u32) -> Option<&Intersection> {
        self.iter().find(|record| record.id == id)
    }

    /// All records whose main or cross road matches `search`
    ///
    /// `StreetMatch::Exact` requires full, case-sensitive equality;
    /// `StreetMatch::Fuzzy` accepts a case-insensitive substring. Results
    /// keep insertion order and may be empty.
    pub fn search_by_street(&self, search: &str, mode: StreetMatch) -> Vec<&Intersection> {
        match mode {
            StreetMatch::Exact => self
                .iter()
                .filter(|r| r.main_road == search || r.cross_road == search)
                .collect(),
            StreetMatch::Fuzzy => {
                let needle = search.to_lowercase();
                self.iter()
                    .filter(|r| {
                        r.main_road.to_lowercase().contains(&needle)
                            || r.cross_road.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
        }
    }

    /// Every distinct street name, sorted in ascending code-point order
    pub fn streets(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for record in self.iter() {
            names.insert(record.main_road.clone());
            names.insert(record.cross_road.clone());
        }
        names.into_iter().collect()
    }
}

/// Extract the camera number from a label like `Camera8034`
///
/// Any non-numeric prefix is stripped before parsing; `None` if nothing
/// numeric remains.
fn parse_camera_label(label: &str) -> Option<u32> {
    let digits = label.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
    digits.parse().ok()
}
