//! Nearest-neighbor constructive heuristic.
//!
//! Builds the tour greedily: starting from the first city of the input
//! order, always extend with the nearest city not yet placed.
//!
//! # Complexity
//!
//! O(n²) time, O(1) extra space (cities are swapped into place).

use crate::distance::Metric;
use crate::models::Tour;

/// Reorders `tour` using nearest-neighbor extension.
///
/// Position 0 is kept as given. For each position `i` from 1 onwards, the
/// unplaced city (positions `i..n`) nearest to the city at `i - 1` is
/// swapped into position `i`. Ties go to the lowest position.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::Planar;
/// use u_tour::constructive::nearest_neighbor;
///
/// let mut tour = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("C", Location::new(0.0, 3.0).unwrap(), 1),
///     City::new("B", Location::new(0.0, 1.0).unwrap(), 2),
/// ]);
/// nearest_neighbor(&mut tour, &Planar);
/// assert_eq!(tour.names(), vec!["A", "B", "C"]);
/// ```
pub fn nearest_neighbor<M: Metric + ?Sized>(tour: &mut Tour, metric: &M) {
    let n = tour.len();
    for i in 1..n {
        let prev = &tour[i - 1];
        let mut closest = i;
        let mut best = metric.distance(prev, &tour[i]);
        for j in (i + 1)..n {
            let d = metric.distance(prev, &tour[j]);
            if d < best {
                best = d;
                closest = j;
            }
        }
        tour.swap(i, closest);
    }
}
