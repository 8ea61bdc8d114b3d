//! Facade crate for the isleroute tour planner.
//!
//! This crate re-exports the core planning types and, behind the `http`
//! feature, the HTTP directions provider and place-file loaders.
//!
//! ```rust
//! use geo::Coord;
//! use isleroute::test_support::StubDirectionsProvider;
//! use isleroute::{CoordinateResolver, Place, PlaceDataset, RoutePlanner, TravelMode};
//!
//! let places = PlaceDataset::from_places([Place::new("harbour", Coord { x: 0.0, y: 0.0 })]);
//! let planner = RoutePlanner::new(
//!     CoordinateResolver::new().with_dataset(places),
//!     StubDirectionsProvider::default(),
//! );
//!
//! let route = planner.build_route("harbour", &["nowhere"], TravelMode::Walk);
//! assert_eq!(route.order, ["harbour"]);
//! assert!(route.is_empty());
//! ```

#![forbid(unsafe_code)]

pub use isleroute_core::{
    CoordinateResolver, DirectionsClient, DirectionsError, DirectionsProvider, OptimizerConfig,
    Place, PlaceDataset, PlaceLookup, PlaceRecord, PlanRequest, PlanRequestValidationError, Route,
    RouteOptimizer, RoutePlanner, RouteSegment, RouteSummary, Segment, SegmentSource, TravelMode,
};

#[doc(hidden)]
pub use isleroute_core::test_support;

#[cfg(feature = "http")]
pub use isleroute_data::routing::{
    HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};
#[cfg(feature = "http")]
pub use isleroute_data::{PlaceFileError, load_place_dataset};
