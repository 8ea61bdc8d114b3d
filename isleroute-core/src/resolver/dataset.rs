//! In-memory, name-indexed place dataset.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use geo::Coord;
use log::{debug, warn};

use super::PlaceLookup;
use crate::{Place, PlaceRecord};

/// A name-indexed collection of places held in memory.
///
/// Rows without a usable coordinate are dropped during construction. Exact
/// duplicates collapse into one entry; when a name repeats with a different
/// coordinate the first row wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDataset {
    places: HashMap<String, Coord<f64>>,
}

impl PlaceDataset {
    /// Build a dataset from raw rows.
    #[must_use]
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PlaceRecord>,
    {
        records
            .into_iter()
            .filter_map(|record| {
                let place = record.to_place();
                if place.is_none() {
                    debug!("dropping place {:?}: missing coordinates", record.name);
                }
                place
            })
            .collect()
    }

    /// Build a dataset from places that already carry coordinates.
    #[must_use]
    pub fn from_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        places.into_iter().collect()
    }

    /// Number of distinct place names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the dataset holds no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn insert(&mut self, place: Place) {
        match self.places.entry(place.name) {
            Entry::Vacant(slot) => {
                slot.insert(place.location);
            }
            Entry::Occupied(existing) if *existing.get() != place.location => {
                warn!(
                    "place {:?} listed again at {:?}; keeping {:?}",
                    existing.key(),
                    place.location,
                    existing.get()
                );
            }
            Entry::Occupied(_) => {}
        }
    }
}

impl FromIterator<Place> for PlaceDataset {
    fn from_iter<I: IntoIterator<Item = Place>>(iter: I) -> Self {
        let mut dataset = Self::default();
        for place in iter {
            dataset.insert(place);
        }
        dataset
    }
}

impl PlaceLookup for PlaceDataset {
    fn lookup(&self, name: &str) -> Option<Coord<f64>> {
        self.places.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn drops_rows_without_coordinates() {
        let dataset = PlaceDataset::from_records([
            PlaceRecord::new("Hyeopjae Beach", Some(126.24), Some(33.39)),
            PlaceRecord::new("Camellia Hill", None, None),
        ]);
        assert_eq!(dataset.len(), 1);
        assert!(dataset.lookup("Camellia Hill").is_none());
    }

    #[rstest]
    fn collapses_exact_duplicates() {
        let dataset = PlaceDataset::from_records([
            PlaceRecord::new("Hyeopjae Beach", Some(126.24), Some(33.39)),
            PlaceRecord::new("Hyeopjae Beach", Some(126.24), Some(33.39)),
        ]);
        assert_eq!(dataset.len(), 1);
    }

    #[rstest]
    fn first_row_wins_on_conflict() {
        let dataset = PlaceDataset::from_places([
            Place::new("Hyeopjae Beach", Coord { x: 126.24, y: 33.39 }),
            Place::new("Hyeopjae Beach", Coord { x: 0.0, y: 0.0 }),
        ]);
        assert_eq!(
            dataset.lookup("Hyeopjae Beach"),
            Some(Coord { x: 126.24, y: 33.39 })
        );
    }

    #[rstest]
    fn empty_dataset_reports_empty() {
        let dataset = PlaceDataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.lookup("anything").is_none());
    }
}
