//! tocams: Toronto Traffic-Camera Intersection Catalog
//!
//! A library and CLI tool for browsing the City of Toronto's RESCU
//! traffic-camera intersections from the published open-data CSV.
//!
//! ## Features
//!
//! - Lenient CSV parsing into typed intersection records
//! - Lookup by camera id or exact location
//! - Exact and fuzzy street-name search
//! - Deduplicated, sorted street listing
//! - Derived open-data image URLs and map links
//! - Text, JSON, GPX, and map-URL output
//!
//! ## Quick Start
//!
//! ```rust
//! use tocams::catalog::{Catalog, StreetMatch};
//! use tocams::geo::GeoPoint;
//!
//! let csv = "Camera8001,43.643079,-79.381407,YORK ST,BREMNER BLVD,\
//!            http://opendata.toronto.ca/transportation/tmc/rescucameraimages/CameraImages/loc8001.jpg,,,,";
//! let catalog = Catalog::from_csv(csv);
//!
//! let record = catalog.get_by_id(8001).unwrap();
//! assert_eq!(record.location, GeoPoint::new(43.643079, -79.381407));
//!
//! let hits = catalog.search_by_street("york", StreetMatch::Fuzzy);
//! assert_eq!(hits.len(), 1);
//! ```

pub mod camera;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod loader;

// Re-export commonly used types
pub use camera::{Camera, CameraViews, Direction};
pub use catalog::{Catalog, Intersection, RecordHandle, StreetMatch};
pub use config::Config;
pub use error::{Error, Result};
pub use geo::GeoPoint;
