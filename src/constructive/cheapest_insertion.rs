//! Cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! The tour is grown as a sub-cycle over the prefix `0..subtour_len` of the
//! city array:
//!
//! 1. Seed with the globally closest pair, the lower original index first.
//! 2. Pick the outside city whose distance to the sub-cycle is smallest.
//! 3. Insert it into the cycle edge `(i, i+1)` that minimizes
//!
//! ```text
//! delta = d(i, c) + d(c, i+1) - d(i, i+1)
//! ```
//!
//! Repeat 2-3 until every city is in the sub-cycle. All scans run in
//! increasing position order and keep the first minimum found.
//!
//! # Complexity
//!
//! O(n³) time in total: O(n · subtour_len) selection per step, O(n²) seed.

use log::debug;

use crate::distance::Metric;
use crate::models::{City, Tour};

/// Reorders `tour` using cheapest insertion.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::Planar;
/// use u_tour::constructive::cheapest_insertion;
///
/// let mut tour = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(0.0, 3.0).unwrap(), 1),
///     City::new("C", Location::new(0.0, 1.0).unwrap(), 2),
///     City::new("D", Location::new(0.0, 2.0).unwrap(), 3),
/// ]);
/// cheapest_insertion(&mut tour, &Planar);
/// assert_eq!(tour.names(), vec!["A", "B", "D", "C"]);
/// ```
pub fn cheapest_insertion<M: Metric + ?Sized>(tour: &mut Tour, metric: &M) {
    CheapestInsertion::new(tour, metric).finish();
}

/// Step-by-step cheapest-insertion builder.
///
/// Construction seeds the sub-cycle; each [`step`](Self::step) inserts one
/// more city. Useful for inspecting intermediate sub-cycles.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::Planar;
/// use u_tour::constructive::CheapestInsertion;
///
/// let mut tour = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(5.0, 5.0).unwrap(), 1),
///     City::new("C", Location::new(0.0, 1.0).unwrap(), 2),
/// ]);
/// let mut builder = CheapestInsertion::new(&mut tour, &Planar);
/// assert_eq!(builder.subtour_len(), 2);
/// assert!(builder.step());
/// assert!(builder.is_complete());
/// assert!(!builder.step());
/// ```
pub struct CheapestInsertion<'t, 'm, M: ?Sized> {
    tour: &'t mut Tour,
    metric: &'m M,
    subtour_len: usize,
}

impl<'t, 'm, M: Metric + ?Sized> CheapestInsertion<'t, 'm, M> {
    /// Seeds the sub-cycle with the closest pair of cities.
    ///
    /// Tours with fewer than two cities are left as they are and count as
    /// complete.
    pub fn new(tour: &'t mut Tour, metric: &'m M) -> Self {
        let n = tour.len();
        if n < 2 {
            return Self {
                tour,
                metric,
                subtour_len: n,
            };
        }

        let (i, j) = closest_pair(tour.cities(), metric).unwrap_or((0, 1));
        let (lo, hi) = if tour[i].original_index() <= tour[j].original_index() {
            (i, j)
        } else {
            (j, i)
        };
        debug!(
            "insertion seed: {} - {}",
            tour[lo].name(),
            tour[hi].name()
        );

        tour.swap(0, lo);
        // The swap moved whatever sat at 0 to `lo`
        let hi = if hi == 0 { lo } else { hi };
        tour.swap(1, hi);

        Self {
            tour,
            metric,
            subtour_len: 2,
        }
    }

    /// Number of cities currently in the sub-cycle.
    pub fn subtour_len(&self) -> usize {
        self.subtour_len
    }

    /// Cities currently in the sub-cycle, in cycle order.
    pub fn subtour(&self) -> &[City] {
        &self.tour.cities()[..self.subtour_len]
    }

    /// Returns `true` once every city is in the sub-cycle.
    pub fn is_complete(&self) -> bool {
        self.subtour_len >= self.tour.len()
    }

    /// Inserts the next city. Returns `false` if the tour was already complete.
    pub fn step(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        let cities = self.tour.cities();
        let next = closest_to_subtour(cities, self.subtour_len, self.metric);
        let edge = insertion_edge(cities, self.subtour_len, next, self.metric);
        self.tour.shift_insert(next, edge + 1);
        self.subtour_len += 1;
        true
    }

    /// Runs the remaining steps.
    pub fn finish(mut self) {
        while self.step() {}
    }
}

/// Finds the closest pair `(i, j)`, `i < j`, scanning in lexicographic order.
///
/// Returns `None` when fewer than two cities are given or no pair has a
/// finite distance.
fn closest_pair<M: Metric + ?Sized>(cities: &[City], metric: &M) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut min_dist = f64::INFINITY;
    for (i, a) in cities.iter().enumerate() {
        for (j, b) in cities.iter().enumerate().skip(i + 1) {
            let d = metric.distance(a, b);
            if d < min_dist {
                min_dist = d;
                best = Some((i, j));
            }
        }
    }
    best
}

/// Position (at or after `subtour_len`) of the outside city nearest to the
/// sub-cycle.
fn closest_to_subtour<M: Metric + ?Sized>(cities: &[City], subtour_len: usize, metric: &M) -> usize {
    let (inside, outside) = cities.split_at(subtour_len);
    let mut best = subtour_len;
    let mut min_dist = f64::INFINITY;
    for (k, candidate) in outside.iter().enumerate() {
        let d = inside
            .iter()
            .map(|member| metric.distance(candidate, member))
            .fold(f64::INFINITY, |acc, d| if d < acc { d } else { acc });
        if d < min_dist {
            min_dist = d;
            best = subtour_len + k;
        }
    }
    best
}

/// Tail position `i` of the cycle edge `(i, i+1 mod subtour_len)` whose
/// replacement by `i → next → i+1` adds the least length.
fn insertion_edge<M: Metric + ?Sized>(
    cities: &[City],
    subtour_len: usize,
    next: usize,
    metric: &M,
) -> usize {
    let candidate = &cities[next];
    let mut best = 0;
    let mut min_increase = f64::INFINITY;
    for i in 0..subtour_len {
        let a = &cities[i];
        let b = &cities[(i + 1) % subtour_len];
        let increase =
            metric.distance(a, candidate) + metric.distance(candidate, b) - metric.distance(a, b);
        if increase < min_increase {
            min_increase = increase;
            best = i;
        }
    }
    best
}
