//! Shared test harness modules for the isleroute CLI.

use super::*;

mod helpers;
