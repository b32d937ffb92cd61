//! Canonical form for tours.
//!
//! The same undirected cycle can come out of a heuristic starting at any
//! city and walked in either direction. Normalization fixes both, so equal
//! cycles always render identically. The edge set is never changed.

use crate::models::Tour;

/// Rotates `tour` so the city with original index 0 comes first.
///
/// Cyclic order is preserved. Does nothing if that city is already first or
/// is not in the tour.
pub fn rotate_to_anchor(tour: &mut Tour) {
    if let Some(start) = tour.position_of(0) {
        if start != 0 {
            tour.rotate_to(start);
        }
    }
}

/// Orients `tour` so the neighbor after position 0 has a lower original
/// index than the neighbor before it (position `n - 1`).
///
/// Reverses positions `1..n` when needed. Tours shorter than 3 have no
/// meaningful direction and are left alone.
pub fn fix_direction(tour: &mut Tour) {
    let n = tour.len();
    if n < 3 {
        return;
    }
    if tour[1].original_index() > tour[n - 1].original_index() {
        tour.reverse_tail();
    }
}

/// Applies [`rotate_to_anchor`] then [`fix_direction`].
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::normalize::normalize;
///
/// let loc = Location::new(0.0, 0.0).unwrap();
/// let mut tour: Tour = [(2, "C"), (3, "D"), (0, "A"), (1, "B")]
///     .iter()
///     .map(|&(i, name)| City::new(name, loc, i))
///     .collect();
/// normalize(&mut tour);
/// assert_eq!(tour.names(), vec!["A", "B", "C", "D"]);
///
/// // The same cycle walked backwards
/// let mut tour: Tour = [(1, "B"), (0, "A"), (3, "D"), (2, "C")]
///     .iter()
///     .map(|&(i, name)| City::new(name, loc, i))
///     .collect();
/// normalize(&mut tour);
/// assert_eq!(tour.names(), vec!["A", "B", "C", "D"]);
/// ```
pub fn normalize(tour: &mut Tour) {
    rotate_to_anchor(tour);
    fix_direction(tour);
}
