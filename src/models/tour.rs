//! Tour container.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::City;

/// An ordered sequence of cities interpreted as a closed cycle.
///
/// The last city implicitly connects back to the first. Heuristics only ever
/// permute a tour in place, so its length is fixed once it is built.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
///
/// let loc = Location::new(0.0, 0.0).unwrap();
/// let mut tour = Tour::new(vec![
///     City::new("A", loc, 0),
///     City::new("B", loc, 1),
///     City::new("C", loc, 2),
/// ]);
/// tour.swap(0, 2);
/// assert_eq!(tour.names(), vec!["C", "B", "A"]);
/// assert_eq!(tour.original_indices(), vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    /// Creates a tour visiting `cities` in the given order.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Number of cities in this tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if this tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the cities in visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Returns the city at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&City> {
        self.cities.get(position)
    }

    /// Consumes the tour, returning the cities in visiting order.
    pub fn into_cities(self) -> Vec<City> {
        self.cities
    }

    /// City names in visiting order.
    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(City::name).collect()
    }

    /// Original indices in visiting order.
    pub fn original_indices(&self) -> Vec<usize> {
        self.cities.iter().map(City::original_index).collect()
    }

    /// Position of the city whose original index is `original_index`.
    pub fn position_of(&self, original_index: usize) -> Option<usize> {
        self.cities
            .iter()
            .position(|c| c.original_index() == original_index)
    }

    /// Swaps the cities at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cities.swap(i, j);
    }

    /// Moves the city at position `from` back to position `to`, shifting
    /// the cities in `to..from` one position later.
    ///
    /// Does nothing unless `to <= from < len`.
    pub fn shift_insert(&mut self, from: usize, to: usize) {
        if to > from || from >= self.cities.len() {
            return;
        }
        self.cities[to..=from].rotate_right(1);
    }

    /// Rotates the tour so that position `start` becomes position 0.
    ///
    /// Cyclic order is preserved. Does nothing if `start` is out of bounds.
    pub fn rotate_to(&mut self, start: usize) {
        if start < self.cities.len() {
            self.cities.rotate_left(start);
        }
    }

    /// Reverses the cities at positions `1..len`, keeping position 0 fixed.
    pub fn reverse_tail(&mut self) {
        if self.cities.len() > 2 {
            self.cities[1..].reverse();
        }
    }
}

impl Index<usize> for Tour {
    type Output = City;

    fn index(&self, position: usize) -> &City {
        &self.cities[position]
    }
}

impl FromIterator<City> for Tour {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
