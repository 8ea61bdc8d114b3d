//! Resolve place names to coordinates.
//!
//! The [`PlaceLookup`] trait abstracts a single name-indexed dataset. A
//! [`CoordinateResolver`] consults several datasets in precedence order and
//! returns the first match.

use geo::Coord;

mod dataset;

pub use dataset::PlaceDataset;

/// Read-only access to a name-indexed place dataset.
///
/// Coordinates use WGS84 with axis order (longitude, latitude) in degrees.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use isleroute_core::PlaceLookup;
///
/// struct Lighthouse;
///
/// impl PlaceLookup for Lighthouse {
///     fn lookup(&self, name: &str) -> Option<Coord<f64>> {
///         (name == "lighthouse").then_some(Coord { x: 126.5, y: 33.5 })
///     }
/// }
///
/// assert!(Lighthouse.lookup("lighthouse").is_some());
/// assert!(Lighthouse.lookup("harbour").is_none());
/// ```
pub trait PlaceLookup {
    /// Return the coordinate recorded for `name`, if any.
    fn lookup(&self, name: &str) -> Option<Coord<f64>>;
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for &T {
    fn lookup(&self, name: &str) -> Option<Coord<f64>> {
        (**self).lookup(name)
    }
}

impl<T: PlaceLookup + ?Sized> PlaceLookup for Box<T> {
    fn lookup(&self, name: &str) -> Option<Coord<f64>> {
        (**self).lookup(name)
    }
}

/// Map place names to coordinates across datasets in precedence order.
///
/// The dataset added first is the primary dataset; later datasets are only
/// consulted when every earlier one misses.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use isleroute_core::{CoordinateResolver, PlaceDataset, PlaceRecord};
///
/// let primary = PlaceDataset::from_records([
///     PlaceRecord::new("Jeongbang Falls", Some(126.57), Some(33.24)),
/// ]);
/// let supplementary = PlaceDataset::from_records([
///     PlaceRecord::new("Jeongbang Falls", Some(0.0), Some(0.0)),
///     PlaceRecord::new("Olle Market", Some(126.56), Some(33.25)),
/// ]);
/// let resolver = CoordinateResolver::new()
///     .with_dataset(primary)
///     .with_dataset(supplementary);
///
/// assert_eq!(
///     resolver.resolve("Jeongbang Falls"),
///     Some(Coord { x: 126.57, y: 33.24 })
/// );
/// assert!(resolver.resolve("Olle Market").is_some());
/// assert!(resolver.resolve("").is_none());
/// ```
#[derive(Default)]
pub struct CoordinateResolver {
    datasets: Vec<Box<dyn PlaceLookup + Send + Sync>>,
}

impl std::fmt::Debug for CoordinateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinateResolver")
            .field("datasets", &self.datasets.len())
            .finish()
    }
}

impl CoordinateResolver {
    /// Create a resolver with no datasets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dataset with lower precedence than those already added.
    #[must_use]
    pub fn with_dataset<D>(mut self, dataset: D) -> Self
    where
        D: PlaceLookup + Send + Sync + 'static,
    {
        self.datasets.push(Box::new(dataset));
        self
    }

    /// Number of datasets consulted by this resolver.
    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Resolve `name` to a coordinate.
    ///
    /// Returns `None` for an empty name or when no dataset knows the place.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Coord<f64>> {
        if name.trim().is_empty() {
            return None;
        }
        self.datasets.iter().find_map(|dataset| dataset.lookup(name))
    }
}

impl PlaceLookup for CoordinateResolver {
    fn lookup(&self, name: &str) -> Option<Coord<f64>> {
        self.resolve(name)
    }
}
