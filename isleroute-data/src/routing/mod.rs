//! HTTP directions providers.
//!
//! [`HttpDirectionsProvider`] implements
//! [`isleroute_core::DirectionsProvider`] against a Mapbox-style Directions
//! API. One request is issued per route leg; the best single route is used.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use isleroute_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//!
//! let config = HttpDirectionsProviderConfig::new("pk.example-token")
//!     .with_base_url("http://localhost:8080")
//!     .with_timeout(Duration::from_secs(5))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//! # Ok::<(), isleroute_data::routing::ProviderBuildError>(())
//! ```

mod mapbox;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_PROFILE_PREFIX, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    HttpDirectionsProvider, HttpDirectionsProviderConfig, ProviderBuildError,
};
