//! Route planning requests.

use thiserror::Error;

use crate::TravelMode;

/// Parameters for a route planning request.
///
/// # Examples
/// ```rust
/// use isleroute_core::{PlanRequest, TravelMode};
///
/// let request = PlanRequest::new("Jeju Airport", ["Hallasan", "Udo"], TravelMode::Drive);
/// assert_eq!(request.waypoints.len(), 2);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Name of the place the tour begins at.
    pub start: String,
    /// Names of the places to visit, in any order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<String>,
    /// How the tour is travelled.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: TravelMode,
}

/// Reasons a [`PlanRequest`] is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanRequestValidationError {
    /// The start name was empty or whitespace.
    #[error("start place name must not be empty")]
    EmptyStart,
    /// A waypoint name was empty or whitespace.
    #[error("waypoint {index} has an empty name")]
    EmptyWaypoint {
        /// Position of the offending waypoint.
        index: usize,
    },
}

impl PlanRequest {
    /// Construct a request.
    #[must_use]
    pub fn new<I, S>(start: impl Into<String>, waypoints: I, mode: TravelMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            start: start.into(),
            waypoints: waypoints.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    /// Check the request for empty names.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        if self.start.trim().is_empty() {
            return Err(PlanRequestValidationError::EmptyStart);
        }
        if let Some(index) = self
            .waypoints
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(PlanRequestValidationError::EmptyWaypoint { index });
        }
        Ok(())
    }
}
