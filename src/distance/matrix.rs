//! Dense distance matrix.

use crate::models::{City, Tour};

use super::Metric;

/// A dense n×n distance matrix stored in row-major order, keyed by
/// [`City::original_index`].
///
/// Built once per run from the working set, so each pairwise distance is
/// computed a single time no matter how many heuristics read it.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::{DistanceMatrix, Metric, Planar};
///
/// let tour = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(3.0, 4.0).unwrap(), 1),
///     City::new("C", Location::new(6.0, 8.0).unwrap(), 2),
/// ]);
/// let dm = DistanceMatrix::from_tour(&tour, &Planar);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.distance(&tour[0], &tour[2]) - 10.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix for every ordered pair of cities in `tour` with
    /// `metric`. The diagonal stays zero.
    ///
    /// The matrix is sized to cover the largest original index present.
    pub fn from_tour<M: Metric + ?Sized>(tour: &Tour, metric: &M) -> Self {
        let size = tour
            .cities()
            .iter()
            .map(|c| c.original_index() + 1)
            .max()
            .unwrap_or(0);
        let mut dm = Self::new(size);
        for a in tour.cities() {
            for b in tour.cities() {
                if a.original_index() != b.original_index() {
                    dm.set(a.original_index(), b.original_index(), metric.distance(a, b));
                }
            }
        }
        dm
    }

    /// Returns the distance between original indices `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns the distance between `from` and `to`, or `None` if either
    /// index is out of bounds.
    pub fn try_get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.get(from, to))
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of indices covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `d(i, j)` and `d(j, i)` agree within `tol` for every pair.
    ///
    /// Both built-in metrics are symmetric; a grid edited with [`set`](Self::set)
    /// need not be.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }
}

impl Metric for DistanceMatrix {
    /// Cities outside the matrix are infinitely far apart.
    fn distance(&self, a: &City, b: &City) -> f64 {
        self.try_get(a.original_index(), b.original_index())
            .unwrap_or(f64::INFINITY)
    }
}
