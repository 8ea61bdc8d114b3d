use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading a place file.
#[derive(Debug, Error)]
pub enum PlaceFileError {
    /// The file could not be opened or read.
    #[error("failed to read place file {path}")]
    Read {
        /// File path as given.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of place rows.
    #[error("failed to parse place file {path}")]
    Parse {
        /// File path as given.
        path: Utf8PathBuf,
        /// Decoder error with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The file is not a readable CSV place table.
    #[error("failed to parse place table {path}")]
    ParseTable {
        /// File path as given.
        path: Utf8PathBuf,
        /// Reader error with the offending record position.
        #[source]
        source: csv::Error,
    },
}
