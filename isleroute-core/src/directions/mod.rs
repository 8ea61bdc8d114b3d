//! Fetch directions for route legs.
//!
//! The [`DirectionsProvider`] trait abstracts an external directions service.
//! [`DirectionsClient`] wraps a provider and never fails: when the provider
//! errors, the leg degrades to a straight line between its endpoints with no
//! travel cost, tagged [`crate::SegmentSource::StraightLine`].

use geo::Coord;
use log::warn;

use crate::{RouteSegment, TravelMode};

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, Segment};

/// Directions for single legs with straight-line fallback.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use isleroute_core::{
///     DirectionsClient, DirectionsError, DirectionsProvider, Segment, SegmentSource, TravelMode,
/// };
///
/// struct Offline;
///
/// impl DirectionsProvider for Offline {
///     fn route_between(
///         &self,
///         _from: Coord<f64>,
///         _to: Coord<f64>,
///         _mode: TravelMode,
///     ) -> Result<Segment, DirectionsError> {
///         Err(DirectionsError::NoRoute)
///     }
/// }
///
/// let from = Coord { x: 126.5, y: 33.5 };
/// let to = Coord { x: 126.6, y: 33.4 };
/// let leg = DirectionsClient::new(Offline).fetch_segment(from, to, TravelMode::Drive);
/// assert_eq!(leg.source, SegmentSource::StraightLine);
/// assert_eq!(leg.geometry, vec![from, to]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectionsClient<P> {
    provider: P,
}

impl<P: DirectionsProvider> DirectionsClient<P> {
    /// Wrap `provider`.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Borrow the wrapped provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetch the leg from `from` to `to`, degrading to a straight line on
    /// provider failure.
    #[must_use]
    pub fn fetch_segment(&self, from: Coord<f64>, to: Coord<f64>, mode: TravelMode) -> RouteSegment {
        match self.provider.route_between(from, to, mode) {
            Ok(segment) => RouteSegment::routed(segment),
            Err(err) => {
                warn!(
                    "directions {:?} -> {:?} ({mode}) failed, using straight line: {err}",
                    (from.x, from.y),
                    (to.x, to.y)
                );
                RouteSegment::straight_line(from, to)
            }
        }
    }
}
