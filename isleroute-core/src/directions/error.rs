use thiserror::Error;

/// Errors from [`crate::directions::DirectionsProvider::route_between`].
///
/// None of these abort route planning; the planner replaces the failed leg
/// with a straight line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL without credentials.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Request URL without credentials.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Request URL without credentials.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The provider reported a failure in its response body.
    #[error("directions service returned {code}: {message}")]
    Service {
        /// Provider status code, e.g. `"NoSegment"`.
        code: String,
        /// Provider message, possibly empty.
        message: String,
    },
    /// The provider found no route between the two points.
    #[error("no route between the requested points")]
    NoRoute,
    /// The response could not be interpreted.
    #[error("failed to parse directions response: {message}")]
    Parse {
        /// Decoder detail.
        message: String,
    },
}
