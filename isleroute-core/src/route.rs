//! Routes through an ordered list of stops.
//!
//! A [`Route`] pairs the visiting order with one [`RouteSegment`] per
//! consecutive pair of stops and carries totals derived from the segments.

use std::fmt;
use std::time::Duration;

use geo::Coord;

use crate::directions::Segment;

/// Where a segment's geometry and costs came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SegmentSource {
    /// Directions returned by the provider.
    Provider,
    /// Provider failed; the leg is a straight line with no travel cost.
    StraightLine,
}

/// One leg of a route between consecutive stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    /// Ordered path coordinates (`x = longitude`, `y = latitude`).
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_support::lon_lat"))]
    pub geometry: Vec<Coord<f64>>,
    /// Travel time along the leg.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_support::secs"))]
    pub duration: Duration,
    /// Leg length in metres.
    pub distance_metres: f64,
    /// Whether the leg came from the provider or the fallback.
    pub source: SegmentSource,
}

impl RouteSegment {
    /// Wrap a provider segment.
    #[must_use]
    pub fn routed(segment: Segment) -> Self {
        Self {
            geometry: segment.geometry,
            duration: segment.duration,
            distance_metres: segment.distance_metres,
            source: SegmentSource::Provider,
        }
    }

    /// Straight two-point leg contributing nothing to the totals.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use isleroute_core::{RouteSegment, SegmentSource};
    ///
    /// let from = Coord { x: 0.0, y: 0.0 };
    /// let to = Coord { x: 1.0, y: 0.0 };
    /// let leg = RouteSegment::straight_line(from, to);
    /// assert_eq!(leg.geometry, vec![from, to]);
    /// assert_eq!(leg.source, SegmentSource::StraightLine);
    /// ```
    #[must_use]
    pub fn straight_line(from: Coord<f64>, to: Coord<f64>) -> Self {
        Self {
            geometry: vec![from, to],
            duration: Duration::ZERO,
            distance_metres: 0.0,
            source: SegmentSource::StraightLine,
        }
    }

    /// Whether this leg is a fallback straight line.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == SegmentSource::StraightLine
    }
}

/// A planned route: visiting order, legs, and totals.
///
/// `segments.len() == order.len() - 1` for any route with at least two
/// stops. Routes with fewer stops carry no segments and zero totals.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use isleroute_core::{Route, RouteSegment};
///
/// let leg = RouteSegment::straight_line(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 });
/// let route = Route::from_legs(vec!["harbour".into(), "beach".into()], vec![leg]);
/// assert_eq!(route.segments.len(), 1);
/// assert_eq!(route.duration_minutes, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Stop names in visiting order, start first.
    pub order: Vec<String>,
    /// Legs between consecutive stops.
    pub segments: Vec<RouteSegment>,
    /// Total travel time in minutes.
    pub duration_minutes: f64,
    /// Total distance in kilometres.
    pub distance_km: f64,
}

impl Route {
    /// Build a route from its order and legs, deriving the totals.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "unit conversion of accumulated totals"
    )]
    pub fn from_legs(order: Vec<String>, segments: Vec<RouteSegment>) -> Self {
        let seconds: f64 = segments.iter().map(|leg| leg.duration.as_secs_f64()).sum();
        let metres: f64 = segments.iter().map(|leg| leg.distance_metres).sum();
        Self {
            order,
            segments,
            duration_minutes: seconds / 60.0,
            distance_km: metres / 1000.0,
        }
    }

    /// A route with nothing to travel.
    ///
    /// # Examples
    /// ```
    /// use isleroute_core::Route;
    ///
    /// let route = Route::empty(Some("harbour".to_owned()));
    /// assert_eq!(route.order, vec!["harbour".to_owned()]);
    /// assert!(route.is_empty());
    /// ```
    #[must_use]
    pub fn empty(start: Option<String>) -> Self {
        Self {
            order: start.into_iter().collect(),
            segments: Vec::new(),
            duration_minutes: 0.0,
            distance_km: 0.0,
        }
    }

    /// Whether the route has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of legs that fell back to a straight line.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.segments.iter().filter(|leg| leg.is_fallback()).count()
    }

    /// Human-readable summary of the route.
    #[must_use]
    pub fn summary(&self) -> RouteSummary<'_> {
        RouteSummary { route: self }
    }
}

/// Display adapter summarising a [`Route`].
///
/// # Examples
/// ```
/// use isleroute_core::Route;
///
/// let route = Route::empty(None);
/// assert_eq!(route.summary().to_string(), "no route");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteSummary<'a> {
    route: &'a Route,
}

impl fmt::Display for RouteSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let route = self.route;
        if route.is_empty() {
            return f.write_str("no route");
        }
        write!(
            f,
            "{} stops, {:.1} min, {:.2} km",
            route.order.len(),
            route.duration_minutes,
            route.distance_km
        )?;
        match route.fallback_count() {
            0 => Ok(()),
            1 => f.write_str(" (1 straight-line leg)"),
            n => write!(f, " ({n} straight-line legs)"),
        }
    }
}
