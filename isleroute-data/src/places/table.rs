//! CSV place tables.
//!
//! Tables exported from spreadsheets name the coordinate columns `X` and `Y`;
//! both spellings are accepted alongside `lon` and `lat`. Unknown columns are
//! ignored and empty coordinate cells read as missing.

use std::io::Read;

use isleroute_core::PlaceRecord;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PlaceRow {
    #[serde(alias = "사업장명")]
    name: String,
    #[serde(default, alias = "X", alias = "x")]
    lon: Option<f64>,
    #[serde(default, alias = "Y", alias = "y")]
    lat: Option<f64>,
}

impl From<PlaceRow> for PlaceRecord {
    fn from(row: PlaceRow) -> Self {
        Self::new(row.name, row.lon, row.lat)
    }
}

/// Decode place rows from a headed CSV table.
///
/// # Errors
///
/// Returns the reader error for malformed rows, a missing name column or a
/// coordinate cell that is not a number.
pub fn parse_csv_place_records<R: Read>(reader: R) -> Result<Vec<PlaceRecord>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<PlaceRow>()
        .map(|row| row.map(PlaceRecord::from))
        .collect()
}
