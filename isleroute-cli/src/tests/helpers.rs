//! Test helpers for writing plan requests and place files.

use camino::{Utf8Path, Utf8PathBuf};
use isleroute_core::test_support::StubDirectionsProvider;
use isleroute_core::{DirectionsError, DirectionsProvider};
use std::time::Duration;
use tempfile::TempDir;

use crate::CliError;
use crate::plan::{DirectionsProviderBuilder, PlanArgs, PlanConfig};

pub(super) const PLACES_JSON: &str = r#"[
    { "name": "harbour", "lon": 0.0, "lat": 0.0 },
    { "name": "beach", "lon": 1.0, "lat": 0.0 },
    { "name": "museum", "lon": 2.0, "lat": 0.0 },
    { "name": "closed gallery", "lon": null, "lat": null }
]"#;

pub(super) const SUPPLEMENTARY_JSON: &str = r#"[
    { "name": "lighthouse", "lon": 0.0, "lat": 3.0 }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary directory holding a request and both place files.
#[derive(Debug)]
pub(super) struct PlanFiles {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) request: Utf8PathBuf,
    pub(super) places: Utf8PathBuf,
    pub(super) supplementary: Utf8PathBuf,
}

impl PlanFiles {
    /// Create the directory with both place files but no request.
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let request = root.join("request.json");
        let places = root.join("places.json");
        let supplementary = root.join("extra-places.json");
        write_utf8(&places, PLACES_JSON.as_bytes());
        write_utf8(&supplementary, SUPPLEMENTARY_JSON.as_bytes());
        Self {
            _tmp: tmp,
            root,
            request,
            places,
            supplementary,
        }
    }

    pub(super) fn write_request(&self, json: &str) {
        write_utf8(&self.request, json.as_bytes());
    }

    /// Arguments naming every file in this directory.
    pub(super) fn args(&self) -> PlanArgs {
        PlanArgs {
            request_path: Some(self.request.clone()),
            places: Some(self.places.clone()),
            supplementary_places: Some(self.supplementary.clone()),
            access_token: Some("pk.test".to_owned()),
            ..PlanArgs::default()
        }
    }

    /// Resolved configuration naming every file in this directory.
    pub(super) fn config(&self) -> PlanConfig {
        PlanConfig::try_from(self.args()).expect("config should build")
    }
}

/// Builds stub providers in place of the HTTP client.
#[derive(Debug, Clone, Copy)]
pub(super) enum StubBuilder {
    /// Every leg takes a minute over a kilometre.
    Succeeding,
    /// Every leg fails.
    Failing,
}

impl DirectionsProviderBuilder for StubBuilder {
    fn build(&self, _config: &PlanConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        let provider = match self {
            Self::Succeeding => StubDirectionsProvider::fixed(Duration::from_secs(60), 1000.0),
            Self::Failing => StubDirectionsProvider::failing(DirectionsError::NoRoute),
        };
        Ok(Box::new(provider))
    }
}
