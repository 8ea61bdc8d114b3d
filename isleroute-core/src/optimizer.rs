//! Order waypoints to shorten the straight-line path from the start.
//!
//! Small waypoint sets are searched exhaustively. Larger sets fall back to a
//! nearest-neighbour construction, which bounds the work to `O(n²)` instead of
//! `O(n!)`. Costs are planar Euclidean distances on raw longitude/latitude
//! degrees; real travel costs come later from the directions provider.

use geo::Coord;
use log::debug;

use crate::Place;

/// Largest waypoint count searched exhaustively by default.
pub const DEFAULT_EXHAUSTIVE_LIMIT: usize = 5;

/// Configuration for [`RouteOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Waypoint sets up to this size are searched exhaustively.
    pub exhaustive_limit: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            exhaustive_limit: DEFAULT_EXHAUSTIVE_LIMIT,
        }
    }
}

impl OptimizerConfig {
    /// Set the exhaustive search limit.
    #[must_use]
    pub const fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }
}

/// Ordering algorithm chosen for a waypoint set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingStrategy {
    /// Every permutation is evaluated.
    Exhaustive,
    /// Greedy nearest-neighbour construction.
    NearestNeighbour,
}

/// Produce a visiting order for waypoints that starts at a fixed point.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use isleroute_core::{Place, RouteOptimizer};
///
/// let waypoints = vec![
///     Place::new("far", Coord { x: 2.0, y: 0.0 }),
///     Place::new("near", Coord { x: 1.0, y: 0.0 }),
/// ];
/// let order = RouteOptimizer::default().optimize(Coord { x: 0.0, y: 0.0 }, &waypoints);
/// let names: Vec<_> = order.iter().map(|place| place.name.as_str()).collect();
/// assert_eq!(names, ["near", "far"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Configuration in effect.
    #[must_use]
    pub const fn config(&self) -> OptimizerConfig {
        self.config
    }

    /// Strategy used for `count` waypoints.
    #[must_use]
    pub const fn strategy_for(&self, count: usize) -> OrderingStrategy {
        if count <= self.config.exhaustive_limit {
            OrderingStrategy::Exhaustive
        } else {
            OrderingStrategy::NearestNeighbour
        }
    }

    /// Order `waypoints` for a tour beginning at `start`.
    ///
    /// The start itself is not part of the result. Every waypoint appears
    /// exactly once.
    #[must_use]
    pub fn optimize(&self, start: Coord<f64>, waypoints: &[Place]) -> Vec<Place> {
        if waypoints.is_empty() {
            return Vec::new();
        }
        let strategy = self.strategy_for(waypoints.len());
        debug!("ordering {} waypoints using {strategy:?}", waypoints.len());
        let order = match strategy {
            OrderingStrategy::Exhaustive => exhaustive_order(start, waypoints),
            OrderingStrategy::NearestNeighbour => nearest_neighbour_order(start, waypoints),
        };
        order
            .into_iter()
            .filter_map(|index| waypoints.get(index).cloned())
            .collect()
    }
}

/// Straight-line length of the path `start → stops[0] → … → stops[n-1]`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use isleroute_core::path_cost;
///
/// let cost = path_cost(
///     Coord { x: 0.0, y: 0.0 },
///     [Coord { x: 3.0, y: 4.0 }, Coord { x: 3.0, y: 5.0 }],
/// );
/// assert_eq!(cost, 6.0);
/// ```
#[must_use]
pub fn path_cost<I>(start: Coord<f64>, stops: I) -> f64
where
    I: IntoIterator<Item = Coord<f64>>,
{
    stops
        .into_iter()
        .scan(start, |current, next| {
            let leg = euclidean(*current, next);
            *current = next;
            Some(leg)
        })
        .sum()
}

#[expect(
    clippy::float_arithmetic,
    reason = "planar distance on degree coordinates"
)]
fn euclidean(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

fn order_cost(start: Coord<f64>, waypoints: &[Place], order: &[usize]) -> f64 {
    path_cost(
        start,
        order
            .iter()
            .filter_map(|&index| waypoints.get(index))
            .map(|place| place.location),
    )
}

/// Evaluate permutations in lexicographic order, keeping the first minimum.
fn exhaustive_order(start: Coord<f64>, waypoints: &[Place]) -> Vec<usize> {
    let mut candidate: Vec<usize> = (0..waypoints.len()).collect();
    let mut best = candidate.clone();
    let mut best_cost = order_cost(start, waypoints, &candidate);
    while next_permutation(&mut candidate) {
        let cost = order_cost(start, waypoints, &candidate);
        if cost < best_cost {
            best_cost = cost;
            best.clone_from(&candidate);
        }
    }
    best
}

/// Advance `indices` to the next lexicographic permutation.
///
/// Returns `false` once the last permutation has been reached.
fn next_permutation(indices: &mut [usize]) -> bool {
    let Some(pivot) = indices
        .windows(2)
        .rposition(|pair| matches!(pair, [a, b] if a < b))
    else {
        return false;
    };
    let Some(&pivot_value) = indices.get(pivot) else {
        return false;
    };
    let Some(successor) = indices.iter().rposition(|&value| value > pivot_value) else {
        return false;
    };
    indices.swap(pivot, successor);
    if let Some(tail) = indices.get_mut(pivot + 1..) {
        tail.reverse();
    }
    true
}

/// Repeatedly visit the closest unvisited waypoint; ties go to the earliest.
fn nearest_neighbour_order(start: Coord<f64>, waypoints: &[Place]) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..waypoints.len()).collect();
    let mut order = Vec::with_capacity(waypoints.len());
    let mut current = start;
    while let Some((slot, index, location)) = remaining
        .iter()
        .enumerate()
        .filter_map(|(slot, &index)| {
            waypoints
                .get(index)
                .map(|place| (slot, index, place.location))
        })
        .min_by(|a, b| euclidean(current, a.2).total_cmp(&euclidean(current, b.2)))
    {
        remaining.remove(slot);
        order.push(index);
        current = location;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn place(name: &str, x: f64, y: f64) -> Place {
        Place::new(name, Coord { x, y })
    }

    fn names(order: &[Place]) -> Vec<&str> {
        order.iter().map(|p| p.name.as_str()).collect()
    }

    fn origin() -> Coord<f64> {
        Coord { x: 0.0, y: 0.0 }
    }

    #[rstest]
    fn empty_waypoints_produce_empty_order() {
        assert!(RouteOptimizer::default().optimize(origin(), &[]).is_empty());
    }

    #[rstest]
    fn exhaustive_search_finds_shortest_path() {
        let waypoints = vec![
            place("B", 1.0, 0.0),
            place("C", 2.0, 0.0),
            place("D", 0.0, 1.0),
        ];
        let order = RouteOptimizer::default().optimize(origin(), &waypoints);
        // D → B → C costs 1 + √2 + 1, beating B → C → D (1 + 1 + √5).
        assert_eq!(names(&order), ["D", "B", "C"]);
        let cost = path_cost(origin(), order.iter().map(|p| p.location));
        assert!((cost - (2.0 + 2.0_f64.sqrt())).abs() < 1e-9);
        let listed = path_cost(origin(), waypoints.iter().map(|p| p.location));
        assert!(cost < listed);
    }

    #[rstest]
    fn exhaustive_search_keeps_first_order_on_ties() {
        let waypoints = vec![place("east", 1.0, 0.0), place("west", -1.0, 0.0)];
        let order = RouteOptimizer::default().optimize(origin(), &waypoints);
        assert_eq!(names(&order), ["east", "west"]);
    }

    #[rstest]
    #[case(0, OrderingStrategy::Exhaustive)]
    #[case(5, OrderingStrategy::Exhaustive)]
    #[case(6, OrderingStrategy::NearestNeighbour)]
    fn default_limit_selects_strategy(#[case] count: usize, #[case] expected: OrderingStrategy) {
        assert_eq!(RouteOptimizer::default().strategy_for(count), expected);
    }

    #[rstest]
    fn exhaustive_limit_is_configurable() {
        let optimizer =
            RouteOptimizer::with_config(OptimizerConfig::default().with_exhaustive_limit(1));
        assert_eq!(optimizer.config().exhaustive_limit, 1);
        assert_eq!(optimizer.strategy_for(2), OrderingStrategy::NearestNeighbour);
    }

    #[rstest]
    fn nearest_neighbour_follows_closest_point() {
        // Greedy picks "a" first even though visiting "b" first is shorter.
        let waypoints = vec![
            place("b", -1.5, 0.0),
            place("a", 1.0, 0.0),
            place("c", 2.0, 0.0),
        ];
        let optimizer =
            RouteOptimizer::with_config(OptimizerConfig::default().with_exhaustive_limit(0));
        let order = optimizer.optimize(origin(), &waypoints);
        assert_eq!(names(&order), ["a", "c", "b"]);
    }

    #[rstest]
    fn nearest_neighbour_breaks_ties_by_input_order() {
        let waypoints = vec![place("north", 0.0, 1.0), place("south", 0.0, -1.0)];
        let optimizer =
            RouteOptimizer::with_config(OptimizerConfig::default().with_exhaustive_limit(0));
        let order = optimizer.optimize(origin(), &waypoints);
        assert_eq!(names(&order), ["north", "south"]);
    }

    #[rstest]
    fn large_sets_visit_every_waypoint_once() {
        let waypoints: Vec<Place> = (0..8)
            .map(|i| place(&format!("w{i}"), f64::from(i % 3), f64::from(i)))
            .collect();
        let order = RouteOptimizer::default().optimize(origin(), &waypoints);
        let mut visited = names(&order);
        visited.sort_unstable();
        let mut expected = names(&waypoints);
        expected.sort_unstable();
        assert_eq!(visited, expected);
    }

    #[rstest]
    fn next_permutation_enumerates_all_orders() {
        let mut indices = vec![0, 1, 2];
        let mut seen = vec![indices.clone()];
        while next_permutation(&mut indices) {
            seen.push(indices.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[rstest]
    fn path_cost_of_empty_path_is_zero() {
        assert_eq!(path_cost(origin(), std::iter::empty()), 0.0);
    }
}
