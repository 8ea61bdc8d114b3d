//! Assemble a complete route from place names.
//!
//! [`RoutePlanner`] resolves names to coordinates, orders the waypoints, and
//! fetches one leg of directions per consecutive pair of stops. Planning never
//! fails: unknown places are skipped, failed legs become straight lines, and
//! fewer than two known stops yield an empty route.

use geo::Coord;
use log::debug;

use crate::{
    CoordinateResolver, DirectionsClient, DirectionsProvider, Place, PlanRequest, Route,
    RouteOptimizer, TravelMode,
};

/// Route planner combining a resolver, an optimizer and a directions provider.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use isleroute_core::test_support::StubDirectionsProvider;
/// use isleroute_core::{CoordinateResolver, Place, PlaceDataset, RoutePlanner, TravelMode};
///
/// let places = PlaceDataset::from_places([
///     Place::new("harbour", Coord { x: 0.0, y: 0.0 }),
///     Place::new("beach", Coord { x: 1.0, y: 0.0 }),
/// ]);
/// let resolver = CoordinateResolver::new().with_dataset(places);
/// let planner = RoutePlanner::new(resolver, StubDirectionsProvider::default());
///
/// let route = planner.build_route("harbour", &["beach"], TravelMode::Walk);
/// assert_eq!(route.order, ["harbour", "beach"]);
/// assert_eq!(route.segments.len(), 1);
/// ```
#[derive(Debug)]
pub struct RoutePlanner<P> {
    resolver: CoordinateResolver,
    optimizer: RouteOptimizer,
    directions: DirectionsClient<P>,
}

impl<P: DirectionsProvider> RoutePlanner<P> {
    /// Construct a planner using the default optimizer configuration.
    #[must_use]
    pub fn new(resolver: CoordinateResolver, provider: P) -> Self {
        Self {
            resolver,
            optimizer: RouteOptimizer::default(),
            directions: DirectionsClient::new(provider),
        }
    }

    /// Replace the optimizer.
    #[must_use]
    pub fn with_optimizer(mut self, optimizer: RouteOptimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Resolver used for place names.
    #[must_use]
    pub const fn resolver(&self) -> &CoordinateResolver {
        &self.resolver
    }

    /// Plan a route from a request.
    #[must_use]
    pub fn plan(&self, request: &PlanRequest) -> Route {
        self.build_route(&request.start, &request.waypoints, request.mode)
    }

    /// Plan a route from `start` through `waypoints`.
    ///
    /// Waypoints that do not resolve are dropped. When the start does not
    /// resolve the route is empty with no stops; when no waypoint resolves the
    /// route is empty with only the start.
    #[must_use]
    pub fn build_route<S: AsRef<str>>(
        &self,
        start: &str,
        waypoints: &[S],
        mode: TravelMode,
    ) -> Route {
        let Some(origin) = self.resolver.resolve(start) else {
            debug!("start {start:?} did not resolve; nothing to route");
            return Route::empty(None);
        };
        let resolved = self.resolve_waypoints(waypoints);
        if resolved.is_empty() {
            debug!("no waypoint resolved; nothing to route from {start:?}");
            return Route::empty(Some(start.to_owned()));
        }

        let ordered = self.optimizer.optimize(origin, &resolved);
        debug!(
            "routing {start:?} through {} waypoints by {mode}",
            ordered.len()
        );
        self.assemble(start, origin, ordered, mode)
    }

    fn resolve_waypoints<S: AsRef<str>>(&self, waypoints: &[S]) -> Vec<Place> {
        waypoints
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|name| {
                let location = self.resolver.resolve(name);
                if location.is_none() {
                    debug!("dropping waypoint {name:?}: not found in any dataset");
                }
                location.map(|coord| Place::new(name, coord))
            })
            .collect()
    }

    fn assemble(
        &self,
        start: &str,
        origin: Coord<f64>,
        ordered: Vec<Place>,
        mode: TravelMode,
    ) -> Route {
        let mut order = Vec::with_capacity(ordered.len() + 1);
        let mut segments = Vec::with_capacity(ordered.len());
        order.push(start.to_owned());
        let mut current = origin;
        for stop in ordered {
            segments.push(self.directions.fetch_segment(current, stop.location, mode));
            current = stop.location;
            order.push(stop.name);
        }
        Route::from_legs(order, segments)
    }
}
