//! Centralized constants for the tocams crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Toronto open-data endpoints for the RESCU camera imagery
pub mod opendata {
    /// Base URL for live camera images (`loc<number>.jpg`)
    pub const CAMERA_IMAGES_URL: &str =
        "http://opendata.toronto.ca/transportation/tmc/rescucameraimages/CameraImages";

    /// Base URL for directional comparison images (`loc<number><direction>.jpg`)
    pub const COMPARISON_IMAGES_URL: &str =
        "http://opendata.toronto.ca/transportation/tmc/rescucameraimages/ComparisonImages";

    /// Dataset landing page on the Toronto open-data portal
    pub const DATASET_PAGE_URL: &str = "https://open.toronto.ca/dataset/traffic-cameras/";
}

/// Dataset file settings
pub mod dataset {
    /// Number of comma-separated fields per row in the intersection CSV
    pub const FIELDS_PER_ROW: usize = 10;

    /// Prefix carried by the camera label in the first CSV field
    pub const CAMERA_LABEL_PREFIX: &str = "Camera";
}
