//! Closed-cycle length.

use crate::distance::Metric;
use crate::models::Tour;

/// Total length of `tour` as a closed cycle.
///
/// Sums `d(k, k+1)` over consecutive positions plus the closing edge from the
/// last city back to the first. An empty tour has length 0.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::Planar;
/// use u_tour::evaluation::tour_length;
///
/// let tour = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(3.0, 4.0).unwrap(), 1),
/// ]);
/// // There and back
/// assert!((tour_length(&tour, &Planar) - 10.0).abs() < 1e-10);
/// ```
pub fn tour_length<M: Metric + ?Sized>(tour: &Tour, metric: &M) -> f64 {
    edge_lengths(tour, metric).sum()
}

/// Lengths of each cycle edge, starting with `(0, 1)` and ending with the
/// closing edge `(n-1, 0)`.
pub fn edge_lengths<'a, M: Metric + ?Sized + 'a>(
    tour: &'a Tour,
    metric: &'a M,
) -> impl Iterator<Item = f64> + 'a {
    let cities = tour.cities();
    let closing = match (cities.last(), cities.first()) {
        (Some(last), Some(first)) => Some(metric.distance(last, first)),
        _ => None,
    };
    cities
        .windows(2)
        .map(move |w| metric.distance(&w[0], &w[1]))
        .chain(closing)
}
