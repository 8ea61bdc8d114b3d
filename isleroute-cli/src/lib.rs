//! Command-line interface for the isleroute tour planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request-path";
const ARG_PLAN_PLACES: &str = "places";
const ARG_PLAN_SUPPLEMENTARY_PLACES: &str = "supplementary-places";
const ARG_PLAN_DIRECTIONS_BASE_URL: &str = "directions-base-url";
const ARG_PLAN_ACCESS_TOKEN: &str = "access-token";
const ARG_PLAN_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_PLAN_EXHAUSTIVE_LIMIT: &str = "exhaustive-limit";
const ARG_PLAN_FORMAT: &str = "format";
const ARG_PLAN_OUTPUT: &str = "output";
const ENV_PLAN_REQUEST: &str = "ISLEROUTE_CMDS_PLAN_REQUEST_PATH";
const ENV_PLAN_PLACES: &str = "ISLEROUTE_CMDS_PLAN_PLACES";
const ENV_PLAN_ACCESS_TOKEN: &str = "ISLEROUTE_CMDS_PLAN_ACCESS_TOKEN";

/// Run the isleroute CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "isleroute",
    about = "Plan sightseeing routes between named places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the waypoints of a plan request and fetch directions for each leg.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
