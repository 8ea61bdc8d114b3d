//! Core domain for the isleroute tour planner.
//!
//! The crate resolves place names to coordinates, orders waypoints to keep
//! the tour short, and stitches directions for each leg into a [`Route`].
//! External services sit behind the [`DirectionsProvider`] and
//! [`PlaceLookup`] traits so the planning logic stays synchronous and
//! deterministic.
//!
//! # Examples
//!
//! ```rust
//! use geo::Coord;
//! use isleroute_core::test_support::StubDirectionsProvider;
//! use isleroute_core::{CoordinateResolver, Place, PlaceDataset, RoutePlanner, TravelMode};
//!
//! let places = PlaceDataset::from_places([
//!     Place::new("airport", Coord { x: 126.49, y: 33.51 }),
//!     Place::new("market", Coord { x: 126.52, y: 33.51 }),
//!     Place::new("beach", Coord { x: 126.45, y: 33.39 }),
//! ]);
//! let planner = RoutePlanner::new(
//!     CoordinateResolver::new().with_dataset(places),
//!     StubDirectionsProvider::default(),
//! );
//!
//! let route = planner.build_route("airport", &["beach", "market"], TravelMode::Drive);
//! assert_eq!(route.order.first().map(String::as_str), Some("airport"));
//! assert_eq!(route.segments.len(), 2);
//! ```

#![forbid(unsafe_code)]

pub mod directions;
pub mod optimizer;
mod place;
pub mod planner;
mod request;
pub mod resolver;
mod route;
#[cfg(feature = "serde")]
mod serde_support;
#[doc(hidden)]
pub mod test_support;
mod travel_mode;

pub use directions::{DirectionsClient, DirectionsError, DirectionsProvider, Segment};
pub use optimizer::{
    DEFAULT_EXHAUSTIVE_LIMIT, OptimizerConfig, OrderingStrategy, RouteOptimizer, path_cost,
};
pub use place::{Place, PlaceRecord};
pub use planner::RoutePlanner;
pub use request::{PlanRequest, PlanRequestValidationError};
pub use resolver::{CoordinateResolver, PlaceDataset, PlaceLookup};
pub use route::{Route, RouteSegment, RouteSummary, SegmentSource};
pub use travel_mode::TravelMode;
