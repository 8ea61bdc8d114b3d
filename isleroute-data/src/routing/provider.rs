//! HTTP `DirectionsProvider` using a Mapbox-style Directions API.
//!
//! # Architecture
//!
//! The [`DirectionsProvider`] trait is synchronous so the planner stays
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use isleroute_core::{DirectionsProvider, TravelMode};
//! use isleroute_data::routing::HttpDirectionsProvider;
//!
//! let provider = HttpDirectionsProvider::new("pk.example-token")?;
//! let segment = provider.route_between(
//!     Coord { x: 126.49, y: 33.51 },
//!     Coord { x: 126.94, y: 33.46 },
//!     TravelMode::Drive,
//! )?;
//! println!("{} m", segment.distance_metres);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::time::Duration;

use geo::Coord;
use isleroute_core::{DirectionsError, DirectionsProvider, Segment, TravelMode};
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::mapbox::{DirectionsResponse, RouteDto};

/// Error type for [`HttpDirectionsProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The configured base URL cannot prefix request paths.
    #[error("invalid directions base URL {url:?}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser detail, absent when the URL parsed but cannot be a base.
        #[source]
        source: Option<url::ParseError>,
    },
}

/// Default Directions API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default profile namespace in the request path.
pub const DEFAULT_PROFILE_PREFIX: &str = "mapbox";

/// Default user agent for directions requests.
pub const DEFAULT_USER_AGENT: &str = "isleroute/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`HttpDirectionsProvider`].
///
/// The `Debug` output redacts the access token.
#[derive(Clone)]
pub struct HttpDirectionsProviderConfig {
    /// Base URL for the service (e.g., `"https://api.mapbox.com"`).
    pub base_url: String,
    /// Path segment preceding the travel profile (e.g., `"mapbox"`).
    pub profile_prefix: String,
    /// Credential sent as the `access_token` query parameter.
    pub access_token: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl fmt::Debug for HttpDirectionsProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDirectionsProviderConfig")
            .field("base_url", &self.base_url)
            .field("profile_prefix", &self.profile_prefix)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for HttpDirectionsProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            profile_prefix: DEFAULT_PROFILE_PREFIX.to_owned(),
            access_token: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpDirectionsProviderConfig {
    /// Create a configuration for the default service with `access_token`.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Point requests at another host, such as a self-hosted mirror.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the profile namespace.
    #[must_use]
    pub fn with_profile_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.profile_prefix = prefix.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based directions provider.
///
/// The provider owns a Tokio runtime that is reused across calls, avoiding
/// the overhead of creating a new runtime per leg.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. A
/// `current_thread` runtime cannot block in place, so the request is driven
/// by the stored runtime on a scoped worker thread while the caller's thread
/// waits for it.
pub struct HttpDirectionsProvider {
    client: Client,
    config: HttpDirectionsProviderConfig,
    base_url: Url,
    runtime: Runtime,
}

impl fmt::Debug for HttpDirectionsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpDirectionsProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpDirectionsProvider {
    /// Create a provider for the default service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsProviderConfig::new(access_token))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is unusable or if the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpDirectionsProviderConfig) -> Result<Self, ProviderBuildError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            base_url,
            runtime,
        })
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &HttpDirectionsProviderConfig {
        &self.config
    }

    /// Build the request URL without query parameters.
    ///
    /// The format is
    /// `{base_url}/directions/v5/{prefix}/{profile}/{lon},{lat};{lon},{lat}`.
    /// The access token is sent separately so this string is safe to log.
    fn build_route_url(&self, from: Coord<f64>, to: Coord<f64>, mode: TravelMode) -> String {
        format!(
            "{}/directions/v5/{}/{}/{},{};{},{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.config.profile_prefix,
            mode.profile(),
            from.x,
            from.y,
            to.x,
            to.y
        )
    }

    fn query(&self) -> [(&'static str, &str); 4] {
        [
            ("geometries", "geojson"),
            ("overview", "full"),
            ("alternatives", "false"),
            ("access_token", self.config.access_token.as_str()),
        ]
    }

    /// Fetch the best route asynchronously.
    async fn fetch_route_async(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        let url = self.build_route_url(from, to, mode);

        let response = self
            .client
            .get(&url)
            .query(&self.query())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(err, &url))?;

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|err| self.convert_body_error(err, &url))?;

        convert_response(body)
    }

    /// Classify a failure while reading or decoding the response body.
    ///
    /// The body is read under the same deadline as the request, so a stalled
    /// body is a timeout rather than a malformed answer.
    fn convert_body_error(&self, error: reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return self.convert_reqwest_error(error, url);
        }
        DirectionsError::Parse {
            message: error.without_url().to_string(),
        }
    }

    /// Convert a reqwest error to a `DirectionsError`.
    ///
    /// The URL attached by reqwest carries the access token, so it is
    /// stripped and replaced with the token-free `url`.
    fn convert_reqwest_error(&self, error: reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        let status = error.status();
        let message = error.without_url().to_string();
        match status {
            Some(status) => DirectionsError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message,
            },
            None => DirectionsError::Network {
                url: url.to_owned(),
                message,
            },
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ProviderBuildError> {
    let invalid = |source: Option<url::ParseError>| ProviderBuildError::InvalidBaseUrl {
        url: raw.to_owned(),
        source,
    };
    let url = Url::parse(raw).map_err(|err| invalid(Some(err)))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(None));
    }
    Ok(url)
}

/// Convert a directions response into the first route's segment.
fn convert_response(response: DirectionsResponse) -> Result<Segment, DirectionsError> {
    if !response.is_ok() {
        let code = response.code.unwrap_or_default();
        if code == "NoRoute" {
            return Err(DirectionsError::NoRoute);
        }
        return Err(DirectionsError::Service {
            code,
            message: response.message.unwrap_or_default(),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(DirectionsError::NoRoute)?;
    convert_route(route)
}

fn convert_route(route: RouteDto) -> Result<Segment, DirectionsError> {
    let duration = non_negative(route.duration, "duration")?;
    let distance_metres = non_negative(route.distance, "distance")?;
    let duration =
        Duration::try_from_secs_f64(duration).map_err(|err| DirectionsError::Parse {
            message: err.to_string(),
        })?;

    let geometry: Vec<Coord<f64>> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[x, y]| Coord { x, y })
        .collect();
    if geometry.len() < 2 {
        return Err(DirectionsError::Parse {
            message: format!("route geometry has {} points", geometry.len()),
        });
    }

    Ok(Segment {
        geometry,
        duration,
        distance_metres,
    })
}

fn non_negative(value: f64, field: &str) -> Result<f64, DirectionsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DirectionsError::Parse {
            message: format!("route {field} {value} is not a non-negative number"),
        })
    }
}

impl DirectionsProvider for HttpDirectionsProvider {
    /// Fetch the best route between two points.
    ///
    /// # Runtime requirements
    ///
    /// Callable from any context. Inside a multi-threaded Tokio runtime the
    /// request runs on the caller's runtime via `block_in_place`; inside a
    /// `current_thread` runtime it runs on a scoped thread that drives the
    /// provider's own runtime.
    fn route_between(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                let future = self.fetch_route_async(from, to, mode);
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            Ok(_) => self.route_on_worker_thread(from, to, mode),
            Err(_) => self.runtime.block_on(self.fetch_route_async(from, to, mode)),
        }
    }
}

impl HttpDirectionsProvider {
    /// Drive the request on a scoped thread outside the caller's runtime.
    ///
    /// `Runtime::block_on` panics on a thread that is already running a
    /// runtime, so the stored runtime is entered from a fresh thread.
    fn route_on_worker_thread(
        &self,
        from: Coord<f64>,
        to: Coord<f64>,
        mode: TravelMode,
    ) -> Result<Segment, DirectionsError> {
        std::thread::scope(|scope| {
            scope
                .spawn(|| self.runtime.block_on(self.fetch_route_async(from, to, mode)))
                .join()
                .unwrap_or_else(|_| {
                    Err(DirectionsError::Network {
                        url: self.build_route_url(from, to, mode),
                        message: "directions worker thread panicked".to_owned(),
                    })
                })
        })
    }
}
