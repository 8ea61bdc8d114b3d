//! Load place datasets from JSON files and CSV tables.
//!
//! A JSON place file is an array of rows:
//!
//! ```json
//! [
//!   { "name": "Seongsan Ilchulbong", "lon": 126.9425, "lat": 33.4581 },
//!   { "name": "Closed Museum", "lon": null, "lat": null }
//! ]
//! ```
//!
//! Missing `lon`/`lat` keys read as `null`. Files with a `.csv` extension are
//! read as headed tables instead (see [`parse_csv_place_records`]). Rows
//! without both coordinates are kept as [`PlaceRecord`]s but never reach a
//! [`PlaceDataset`].

use std::io::{BufReader, Read};

use camino::Utf8Path;
use isleroute_core::{PlaceDataset, PlaceRecord};
use log::{debug, warn};

mod error;
mod table;

pub use error::PlaceFileError;
pub use table::parse_csv_place_records;

/// Decode place rows from `reader`.
///
/// # Errors
///
/// Returns the decoder error when the input is not an array of rows.
pub fn parse_place_records<R: Read>(reader: R) -> Result<Vec<PlaceRecord>, serde_json::Error> {
    serde_json::from_reader(BufReader::new(reader))
}

/// Read every row of the place file at `path`.
///
/// Paths ending in `.csv` (any case) are read as CSV tables; everything else
/// is read as JSON.
///
/// # Errors
///
/// Returns [`PlaceFileError::Read`] when the file cannot be opened,
/// [`PlaceFileError::Parse`] when JSON contents are malformed and
/// [`PlaceFileError::ParseTable`] when a CSV table is malformed.
pub fn load_place_records(path: &Utf8Path) -> Result<Vec<PlaceRecord>, PlaceFileError> {
    let file = isleroute_fs::open_utf8_file(path).map_err(|source| PlaceFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if is_csv_table(path) {
        return parse_csv_place_records(file).map_err(|source| PlaceFileError::ParseTable {
            path: path.to_path_buf(),
            source,
        });
    }
    parse_place_records(file).map_err(|source| PlaceFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn is_csv_table(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Build a [`PlaceDataset`] from the place file at `path`.
///
/// # Errors
///
/// Propagates [`load_place_records`] failures.
pub fn load_place_dataset(path: &Utf8Path) -> Result<PlaceDataset, PlaceFileError> {
    let records = load_place_records(path)?;
    let rows = records.len();
    let dataset = PlaceDataset::from_records(records);
    if dataset.is_empty() && rows > 0 {
        warn!("place file {path} has {rows} rows but none with coordinates");
    }
    debug!("loaded {} places from {path}", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use geo::Coord;
    use isleroute_core::PlaceLookup;
    use rstest::{fixture, rstest};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_place_file(contents: &str) -> (NamedTempFile, Utf8PathBuf) {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write place file");
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf()).expect("utf-8 temp path");
        (file, path)
    }

    #[fixture]
    fn place_file() -> (NamedTempFile, Utf8PathBuf) {
        write_place_file(
            r#"[
                {"name": "harbour", "lon": 126.52, "lat": 33.52},
                {"name": "closed museum", "lon": null, "lat": null},
                {"name": "beach"}
            ]"#,
        )
    }

    #[rstest]
    fn parses_rows_with_missing_coordinates() {
        let records = parse_place_records(r#"[{"name": "beach"}]"#.as_bytes())
            .expect("rows should decode");
        assert_eq!(records, vec![PlaceRecord::new("beach", None, None)]);
    }

    #[rstest]
    fn loads_every_row(place_file: (NamedTempFile, Utf8PathBuf)) {
        let (_guard, path) = place_file;
        let records = load_place_records(&path).expect("file should load");
        assert_eq!(records.len(), 3);
    }

    #[rstest]
    fn dataset_keeps_only_located_rows(place_file: (NamedTempFile, Utf8PathBuf)) {
        let (_guard, path) = place_file;
        let dataset = load_place_dataset(&path).expect("file should load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.lookup("harbour"), Some(Coord { x: 126.52, y: 33.52 }));
        assert_eq!(dataset.lookup("beach"), None);
    }

    #[rstest]
    #[case::lower("places.csv")]
    #[case::upper("PLACES.CSV")]
    fn csv_extension_selects_table_reader(#[case] file_name: &str) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join(file_name)).expect("utf-8 temp path");
        std::fs::write(&path, "name,X,Y\nharbour,126.52,33.52\nbeach,,\n").expect("write table");

        let dataset = load_place_dataset(&path).expect("table should load");
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.lookup("harbour"), Some(Coord { x: 126.52, y: 33.52 }));
    }

    #[rstest]
    fn malformed_table_is_a_table_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("places.csv")).expect("utf-8 temp path");
        std::fs::write(&path, "name,lon,lat\nharbour,east,north\n").expect("write table");

        let err = load_place_dataset(&path).expect_err("non-numeric cells should fail");
        match err {
            PlaceFileError::ParseTable { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected table parse error, got {other:?}"),
        }
    }

    #[rstest]
    fn missing_file_is_a_read_error() {
        let err = load_place_dataset(Utf8Path::new("/nonexistent/places.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, PlaceFileError::Read { .. }));
    }

    #[rstest]
    fn malformed_file_is_a_parse_error() {
        let (_guard, path) = write_place_file(r#"{"name": "not an array"}"#);
        let err = load_place_dataset(&path).expect_err("object should be rejected");
        match err {
            PlaceFileError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
