//! Named places and the raw dataset rows they are built from.

use geo::Coord;

/// A named location that can appear in a route.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use isleroute_core::Place;
///
/// let place = Place::new("Seongsan Ilchulbong", Coord { x: 126.94, y: 33.46 });
///
/// assert_eq!(place.name, "Seongsan Ilchulbong");
/// assert_eq!(place.location.x, 126.94);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Identifier, unique within a dataset.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
}

impl Place {
    /// Construct a `Place` from a name and a coordinate.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// A raw place row as supplied by a dataset.
///
/// Either coordinate may be absent. Rows are only promoted to a [`Place`] when
/// both values are present and finite.
///
/// # Examples
/// ```
/// use isleroute_core::PlaceRecord;
///
/// let record = PlaceRecord::new("Hallasan", Some(126.53), None);
/// assert!(record.to_place().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceRecord {
    /// Place name as written in the dataset.
    pub name: String,
    /// Longitude in degrees, if recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Latitude in degrees, if recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
}

impl PlaceRecord {
    /// Construct a record from its raw fields.
    #[must_use]
    pub fn new(name: impl Into<String>, lon: Option<f64>, lat: Option<f64>) -> Self {
        Self {
            name: name.into(),
            lon,
            lat,
        }
    }

    /// Return the coordinate when both values are present and finite.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coord<f64>> {
        let x = self.lon.filter(|v| v.is_finite())?;
        let y = self.lat.filter(|v| v.is_finite())?;
        Some(Coord { x, y })
    }

    /// Promote the record to a [`Place`] when it carries a usable coordinate.
    #[must_use]
    pub fn to_place(&self) -> Option<Place> {
        self.coordinate()
            .map(|location| Place::new(self.name.clone(), location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn record_with_both_coordinates_becomes_place() {
        let record = PlaceRecord::new("Udo", Some(126.95), Some(33.5));
        assert_eq!(
            record.to_place(),
            Some(Place::new("Udo", Coord { x: 126.95, y: 33.5 }))
        );
    }

    #[rstest]
    #[case(None, Some(33.5))]
    #[case(Some(126.95), None)]
    #[case(None, None)]
    #[case(Some(f64::NAN), Some(33.5))]
    #[case(Some(126.95), Some(f64::INFINITY))]
    fn record_without_usable_coordinate_is_rejected(
        #[case] lon: Option<f64>,
        #[case] lat: Option<f64>,
    ) {
        let record = PlaceRecord::new("Udo", lon, lat);
        assert!(record.coordinate().is_none());
        assert!(record.to_place().is_none());
    }
}
