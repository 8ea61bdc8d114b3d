//! Directions provider trait and the segment it returns.

use std::time::Duration;

use geo::Coord;

use super::error::DirectionsError;
use crate::TravelMode;

/// Path geometry and travel cost between two points, as reported by a
/// provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Ordered path coordinates (`x = longitude`, `y = latitude`).
    pub geometry: Vec<Coord<f64>>,
    /// Travel time along the path.
    pub duration: Duration,
    /// Path length in metres.
    pub distance_metres: f64,
}

/// Fetch directions between two coordinates.
///
/// Implementations return the provider's best single route. Any failure is
/// reported as a [`DirectionsError`]; callers decide how to degrade.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use geo::Coord;
/// use isleroute_core::{DirectionsError, DirectionsProvider, Segment, TravelMode};
///
/// struct Teleporter;
///
/// impl DirectionsProvider for Teleporter {
///     fn route_between(
///         &self,
///         from: Coord<f64>,
///         to: Coord<f64>,
///         _mode: TravelMode,
///     ) -> Result<Segment, DirectionsError> {
///         Ok(Segment {
///             geometry: vec![from, to],
///             duration: Duration::ZERO,
///             distance_metres: 0.0,
///         })
///     }
/// }
///
/// let segment = Teleporter.route_between(
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 1.0, y: 1.0 },
///     TravelMode::Walk,
/// )?;
/// assert_eq!(segment.geometry.len(), 2);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsProvider {
    /// Return the best route from `from` to `to` for `mode`.
    fn route_between(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError>;
}

impl<T: DirectionsProvider + ?Sized> DirectionsProvider for &T {
    fn route_between(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        (**self).route_between(from, to, mode)
    }
}

impl<T: DirectionsProvider + ?Sized> DirectionsProvider for Box<T> {
    fn route_between(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        (**self).route_between(from, to, mode)
    }
}
