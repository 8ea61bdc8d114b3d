//! Deterministic doubles for unit, behaviour and doc tests.

use std::sync::Mutex;
use std::time::Duration;

use geo::Coord;

use crate::{DirectionsError, DirectionsProvider, Segment, TravelMode};

/// A directions request observed by [`StubDirectionsProvider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedLeg {
    /// Leg origin.
    pub from: Coord<f64>,
    /// Leg destination.
    pub to: Coord<f64>,
    /// Requested travel mode.
    pub mode: TravelMode,
}

/// `DirectionsProvider` returning fixed costs for every leg.
///
/// Geometry runs `from`, a corner at `(from.x, to.y)`, then `to`, so routed
/// legs are distinguishable from straight-line fallbacks. Legs ending at a
/// coordinate registered with [`failing_towards`](Self::failing_towards)
/// fail with [`DirectionsError::NoRoute`]. Every request is recorded.
#[derive(Debug)]
pub struct StubDirectionsProvider {
    duration: Duration,
    distance_metres: f64,
    error: Option<DirectionsError>,
    failing_destinations: Vec<Coord<f64>>,
    calls: Mutex<Vec<RecordedLeg>>,
}

impl Default for StubDirectionsProvider {
    fn default() -> Self {
        Self::fixed(Duration::from_secs(60), 1000.0)
    }
}

impl StubDirectionsProvider {
    /// Succeed on every leg with the given costs.
    #[must_use]
    pub fn fixed(duration: Duration, distance_metres: f64) -> Self {
        Self {
            duration,
            distance_metres,
            error: None,
            failing_destinations: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every leg with `error`.
    #[must_use]
    pub fn failing(error: DirectionsError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Fail legs whose destination is `to`.
    #[must_use]
    pub fn failing_towards(mut self, to: Coord<f64>) -> Self {
        self.failing_destinations.push(to);
        self
    }

    /// Requests observed so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedLeg> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl DirectionsProvider for StubDirectionsProvider {
    fn route_between(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedLeg { from, to, mode });
        }
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        if self.failing_destinations.contains(&to) {
            return Err(DirectionsError::NoRoute);
        }
        Ok(Segment {
            geometry: vec![from, Coord { x: from.x, y: to.y }, to],
            duration: self.duration,
            distance_metres: self.distance_metres,
        })
    }
}
