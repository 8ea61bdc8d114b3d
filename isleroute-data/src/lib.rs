//! Data access for the isleroute planner.
//!
//! Responsibilities:
//! - Fetch route legs from HTTP directions services.
//! - Load place datasets from JSON files and CSV tables.
//!
//! Boundaries:
//! - Do not encode planning rules (they live in `isleroute-core`).
//! - Keep credentials out of URLs reported in errors and logs.

pub mod places;
pub mod routing;

pub use places::{
    PlaceFileError, load_place_dataset, load_place_records, parse_csv_place_records,
    parse_place_records,
};
pub use routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError};
