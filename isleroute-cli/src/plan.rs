//! Plan command implementation for the isleroute CLI.

use std::fmt;
use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use isleroute_core::{
    CoordinateResolver, DirectionsProvider, OptimizerConfig, PlanRequest, Route, RouteOptimizer,
    RoutePlanner,
};
use isleroute_data::load_place_dataset;
use isleroute_data::routing::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpDirectionsProvider, HttpDirectionsProviderConfig,
};
use isleroute_fs::{create_utf8_file, open_utf8_file};
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_PLAN_ACCESS_TOKEN, ARG_PLAN_DIRECTIONS_BASE_URL, ARG_PLAN_EXHAUSTIVE_LIMIT,
    ARG_PLAN_FORMAT, ARG_PLAN_OUTPUT, ARG_PLAN_PLACES, ARG_PLAN_REQUEST,
    ARG_PLAN_SUPPLEMENTARY_PLACES, ARG_PLAN_TIMEOUT_SECS, CliError, ENV_PLAN_ACCESS_TOKEN,
    ENV_PLAN_PLACES, ENV_PLAN_REQUEST,
};

/// Largest exhaustive search limit accepted from configuration.
///
/// Exhaustive ordering evaluates `n!` permutations; nine waypoints is
/// already 362 880 orders.
pub(crate) const MAX_EXHAUSTIVE_LIMIT: usize = 9;

/// Rendering used for the planned route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON `Route`.
    #[default]
    Json,
    /// Stop list, one line per leg and a summary.
    Text,
}

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a route for a JSON-encoded PlanRequest. Place names \
                 are resolved against the primary place file, then the \
                 supplementary one; waypoints are ordered to keep the tour \
                 short and each leg is routed by a Mapbox-compatible \
                 directions service. Legs the service cannot route are \
                 drawn as straight lines.",
    about = "Plan a route through named places"
)]
#[ortho_config(prefix = "ISLEROUTE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Primary place dataset: a JSON array of `{name, lon, lat}` rows, or a
    /// `.csv` table with `name` and `lon`/`lat` (or `X`/`Y`) columns.
    #[arg(long = ARG_PLAN_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) places: Option<Utf8PathBuf>,
    /// Place dataset consulted when the primary one has no match.
    #[arg(long = ARG_PLAN_SUPPLEMENTARY_PLACES, value_name = "path")]
    #[serde(default)]
    pub(crate) supplementary_places: Option<Utf8PathBuf>,
    /// Base URL of the directions service.
    #[arg(long = ARG_PLAN_DIRECTIONS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) directions_base_url: Option<String>,
    /// Access token sent to the directions service.
    #[arg(long = ARG_PLAN_ACCESS_TOKEN, value_name = "token")]
    #[serde(default)]
    pub(crate) access_token: Option<String>,
    /// Per-request timeout in seconds.
    #[arg(long = ARG_PLAN_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Waypoint count up to which every visiting order is evaluated.
    #[arg(long = ARG_PLAN_EXHAUSTIVE_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) exhaustive_limit: Option<usize>,
    /// Output rendering.
    #[arg(long = ARG_PLAN_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Write the route to this file instead of stdout.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
///
/// The `Debug` output redacts the access token.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Primary place dataset.
    pub(crate) places: Utf8PathBuf,
    /// Optional fallback place dataset.
    pub(crate) supplementary_places: Option<Utf8PathBuf>,
    /// Directions service base URL.
    pub(crate) directions_base_url: String,
    /// Directions service credential.
    pub(crate) access_token: String,
    /// Per-request timeout.
    pub(crate) timeout: Duration,
    /// Exhaustive ordering threshold.
    pub(crate) exhaustive_limit: usize,
    /// Output rendering.
    pub(crate) format: OutputFormat,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl fmt::Debug for PlanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanConfig")
            .field("request_path", &self.request_path)
            .field("places", &self.places)
            .field("supplementary_places", &self.supplementary_places)
            .field("directions_base_url", &self.directions_base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("exhaustive_limit", &self.exhaustive_limit)
            .field("format", &self.format)
            .field("output", &self.output)
            .finish()
    }
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.places, ARG_PLAN_PLACES)?;
        if let Some(path) = &self.supplementary_places {
            Self::require_existing(path, ARG_PLAN_SUPPLEMENTARY_PLACES)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match isleroute_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let places = args.places.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_PLACES,
            env: ENV_PLAN_PLACES,
        })?;
        let access_token = args
            .access_token
            .filter(|token| !token.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_PLAN_ACCESS_TOKEN,
                env: ENV_PLAN_ACCESS_TOKEN,
            })?;

        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_PLAN_TIMEOUT_SECS,
                reason: "must be at least one second".to_owned(),
            });
        }

        let exhaustive_limit = args
            .exhaustive_limit
            .unwrap_or_else(|| OptimizerConfig::default().exhaustive_limit);
        if exhaustive_limit > MAX_EXHAUSTIVE_LIMIT {
            return Err(CliError::InvalidArgument {
                field: ARG_PLAN_EXHAUSTIVE_LIMIT,
                reason: format!("must not exceed {MAX_EXHAUSTIVE_LIMIT}"),
            });
        }

        Ok(Self {
            request_path,
            places,
            supplementary_places: args.supplementary_places,
            directions_base_url: args
                .directions_base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            access_token,
            timeout: Duration::from_secs(timeout_secs),
            exhaustive_limit,
            format: args.format.unwrap_or_default(),
            output: args.output,
        })
    }
}

/// Builds the directions provider for the current plan invocation.
pub(super) trait DirectionsProviderBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn DirectionsProvider>, CliError>;
}

pub(super) struct HttpDirectionsProviderBuilder;

impl DirectionsProviderBuilder for HttpDirectionsProviderBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider_config = HttpDirectionsProviderConfig::new(config.access_token.clone())
            .with_base_url(config.directions_base_url.clone())
            .with_timeout(config.timeout);
        let provider = HttpDirectionsProvider::with_config(provider_config).map_err(|source| {
            CliError::BuildDirectionsProvider {
                base_url: config.directions_base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(provider))
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &HttpDirectionsProviderBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn DirectionsProviderBuilder,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let route = execute_plan(&config, builder)?;
    match &config.output {
        Some(path) => {
            let mut file = create_utf8_file(path).map_err(|source| CliError::CreatePlanOutput {
                path: path.clone(),
                source,
            })?;
            write_route(&mut file, &route, config.format)
        }
        None => write_route(stdout, &route, config.format),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_plan(
    config: &PlanConfig,
    builder: &dyn DirectionsProviderBuilder,
) -> Result<Route, CliError> {
    let request = load_plan_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let resolver = load_resolver(config)?;
    let provider = builder.build(config)?;
    let optimizer = RouteOptimizer::with_config(
        OptimizerConfig::default().with_exhaustive_limit(config.exhaustive_limit),
    );
    let planner = RoutePlanner::new(resolver, provider).with_optimizer(optimizer);
    Ok(planner.plan(&request))
}

fn load_resolver(config: &PlanConfig) -> Result<CoordinateResolver, CliError> {
    let primary = load_place_dataset(&config.places).map_err(|source| CliError::LoadPlaces {
        field: ARG_PLAN_PLACES,
        source,
    })?;
    debug!("loaded {} places from {}", primary.len(), config.places);
    let mut resolver = CoordinateResolver::new().with_dataset(primary);
    if let Some(path) = &config.supplementary_places {
        let supplementary = load_place_dataset(path).map_err(|source| CliError::LoadPlaces {
            field: ARG_PLAN_SUPPLEMENTARY_PLACES,
            source,
        })?;
        debug!("loaded {} supplementary places from {path}", supplementary.len());
        resolver = resolver.with_dataset(supplementary);
    }
    Ok(resolver)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_route(writer: &mut dyn Write, route: &Route, format: OutputFormat) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(route).map_err(CliError::SerialiseRoute)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_text(route),
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.flush().map_err(CliError::WritePlanOutput)
}

/// Render the stop order, each leg and the route summary.
pub(super) fn render_text(route: &Route) -> String {
    let mut text = String::new();
    if !route.order.is_empty() {
        text.push_str(&route.order.join(" -> "));
        text.push('\n');
    }
    let legs = route.order.windows(2).zip(&route.segments);
    for (index, (stops, segment)) in legs.enumerate() {
        let [from, to] = stops else { continue };
        let minutes = segment.duration.as_secs_f64() / 60.0;
        let km = segment.distance_metres / 1000.0;
        let marker = if segment.is_fallback() {
            " (straight line)"
        } else {
            ""
        };
        text.push_str(&format!(
            "  {}. {from} -> {to}: {minutes:.1} min, {km:.2} km{marker}\n",
            index + 1
        ));
    }
    text.push_str(&route.summary().to_string());
    text.push('\n');
    text
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
