//! Camera imagery types
//!
//! This module handles:
//! - The four optional directional camera views of an intersection
//! - Deriving live and comparison image URLs from a camera number
//! - The raw per-camera record from the open-data table

use crate::constants::opendata;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A compass direction a camera can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in the order the dataset stores them
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One-letter code used in comparison image file names
    pub fn code(&self) -> char {
        match self {
            Self::North => 'n',
            Self::East => 'e',
            Self::South => 's',
            Self::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::East => write!(f, "east"),
            Self::South => write!(f, "south"),
            Self::West => write!(f, "west"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "e" | "east" => Ok(Self::East),
            "s" | "south" => Ok(Self::South),
            "w" | "west" => Ok(Self::West),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// Build the live camera image URL for a camera number, e.g.
/// `http://opendata.toronto.ca/.../CameraImages/loc8001.jpg`
pub fn image_url(number: u32) -> String {
    format!("{}/loc{}.jpg", opendata::CAMERA_IMAGES_URL, number)
}

/// Build the comparison image URL for a camera number and direction, e.g.
/// `http://opendata.toronto.ca/.../ComparisonImages/loc8001n.jpg`
pub fn comparison_image_url(number: u32, direction: Direction) -> String {
    format!(
        "{}/loc{}{}.jpg",
        opendata::COMPARISON_IMAGES_URL,
        number,
        direction.code()
    )
}

/// The optional directional image references of one intersection
///
/// A slot is `Some` iff the source field was non-empty after trimming; a
/// whitespace-only or missing field leaves the slot unset. No slot ever
/// holds an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraViews {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<String>,
}

impl CameraViews {
    /// Build views from raw field values, trimming each and dropping any
    /// that are empty afterwards
    pub fn new(
        north: Option<&str>,
        east: Option<&str>,
        south: Option<&str>,
        west: Option<&str>,
    ) -> Self {
        Self {
            north: clean(north),
            east: clean(east),
            south: clean(south),
            west: clean(west),
        }
    }

    /// The view URL for one direction, if present
    pub fn get(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::North => self.north.as_deref(),
            Direction::East => self.east.as_deref(),
            Direction::South => self.south.as_deref(),
            Direction::West => self.west.as_deref(),
        }
    }

    /// Iterate over the present views in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> {
        Direction::ALL
            .iter()
            .filter_map(|&d| self.get(d).map(|url| (d, url)))
    }

    /// True if no direction has a view
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

fn clean(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One directional image of a camera, with its derived URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionImage {
    pub direction: Direction,
    pub url: String,
}

/// A raw camera record from the published traffic-camera table
///
/// The table stores up to four direction codes positionally (D1..D4)
/// without a fixed direction per slot; only the codes that parse are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub number: u32,
    pub name: String,
    pub coords: GeoPoint,
    pub directions: Vec<Direction>,
}

impl Camera {
    pub fn new(number: u32, name: &str, coords: GeoPoint, codes: &[&str]) -> Self {
        let directions = codes
            .iter()
            .filter_map(|code| Direction::from_str(code).ok())
            .collect();
        Self {
            number,
            name: name.to_string(),
            coords,
            directions,
        }
    }

    /// URL of the live camera image
    pub fn image_url(&self) -> String {
        image_url(self.number)
    }

    /// Comparison images for every direction this camera faces
    pub fn direction_images(&self) -> Vec<DirectionImage> {
        self.directions
            .iter()
            .map(|&direction| DirectionImage {
                direction,
                url: comparison_image_url(self.number, direction),
            })
            .collect()
    }
}
