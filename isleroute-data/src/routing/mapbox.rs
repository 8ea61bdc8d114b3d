//! Response types for the Mapbox-style Directions API.
//!
//! Only the fields the planner consumes are modelled. Unknown fields such as
//! `waypoints`, `legs` and `uuid` are ignored.

use serde::Deserialize;

/// Directions API response.
///
/// Successful responses carry `code: "Ok"` and at least one route. Errors
/// either use a non-`Ok` code (for example `"NoRoute"`) or, for rejected
/// requests, only a `message`.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code from the service, absent on some error bodies.
    #[serde(default)]
    pub code: Option<String>,

    /// Human-readable error detail.
    #[serde(default)]
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// A single candidate route.
#[derive(Debug, Deserialize)]
pub struct RouteDto {
    /// GeoJSON line string of the route.
    pub geometry: GeometryDto,
    /// Travel time in seconds.
    pub duration: f64,
    /// Length in metres.
    pub distance: f64,
}

/// GeoJSON `LineString` geometry.
#[derive(Debug, Deserialize)]
pub struct GeometryDto {
    /// `[lon, lat]` pairs along the route.
    pub coordinates: Vec<[f64; 2]>,
}

impl DirectionsResponse {
    /// Whether the response reports success.
    ///
    /// A missing code counts as success so long as routes were returned.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code
            .as_deref()
            .map_or(!self.routes.is_empty(), |code| code == "Ok")
    }
}
