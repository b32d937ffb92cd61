//! Heuristic runs: build, normalize, measure.

use log::debug;

use crate::constructive::{build_tour, Heuristic};
use crate::distance::{DistanceMatrix, Metric};
use crate::error::{TourError, TourResult};
use crate::evaluation::tour_length;
use crate::models::Tour;
use crate::normalize::normalize;
use crate::report::TourReport;

/// Runs the heuristic called `name` on a private copy of `cities`.
///
/// The resulting tour is normalized before its length is measured. `name`
/// may carry the leading `-` used on the command line; it is kept as the
/// report label.
///
/// # Errors
///
/// [`TourError::UnknownHeuristic`] for an unrecognized name and
/// [`TourError::TooFewCities`] when `cities` has fewer than two entries.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::Planar;
/// use u_tour::runner::run_heuristic;
///
/// let cities = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(3.0, 4.0).unwrap(), 1),
/// ]);
/// let report = run_heuristic("-given", &cities, &Planar).unwrap();
/// assert!((report.total_length() - 10.0).abs() < 1e-10);
/// assert_eq!(report.closed_order(), vec!["A", "B", "A"]);
/// ```
pub fn run_heuristic<M: Metric + ?Sized>(
    name: &str,
    cities: &Tour,
    metric: &M,
) -> TourResult<TourReport> {
    let heuristic: Heuristic = name.parse()?;
    if cities.len() < 2 {
        return Err(TourError::TooFewCities {
            count: cities.len(),
        });
    }

    let mut tour = cities.clone();
    build_tour(heuristic, &mut tour, metric);
    normalize(&mut tour);
    let total = tour_length(&tour, metric);
    debug!("{heuristic}: {total:.2} over {} cities", tour.len());

    Ok(TourReport::new(name, heuristic, total, &tour))
}

/// A resolved working set with its distances precomputed.
///
/// Every run starts from the same read-only city order, so heuristics never
/// see each other's changes.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location, Tour};
/// use u_tour::distance::MetricKind;
/// use u_tour::runner::TourRunner;
///
/// let cities = Tour::new(vec![
///     City::new("A", Location::new(0.0, 0.0).unwrap(), 0),
///     City::new("B", Location::new(0.0, 1.0).unwrap(), 1),
///     City::new("C", Location::new(1.0, 1.0).unwrap(), 2),
/// ]);
/// let runner = TourRunner::new(cities, &MetricKind::Planar);
/// let reports: Vec<_> = runner.run_all(&["-given", "-bogus", "-insert"]).collect();
/// assert!(reports[0].is_ok());
/// assert!(reports[1].is_err());
/// assert!(reports[2].is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TourRunner {
    cities: Tour,
    distances: DistanceMatrix,
}

impl TourRunner {
    /// Precomputes all pairwise distances of `cities` under `metric`.
    pub fn new<M: Metric + ?Sized>(cities: Tour, metric: &M) -> Self {
        let distances = DistanceMatrix::from_tour(&cities, metric);
        debug_assert!(distances.is_symmetric(1e-9), "metric is not symmetric");
        Self { cities, distances }
    }

    /// The working set, in its original order.
    pub fn cities(&self) -> &Tour {
        &self.cities
    }

    /// Precomputed distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Runs one heuristic. See [`run_heuristic`].
    pub fn run(&self, name: &str) -> TourResult<TourReport> {
        run_heuristic(name, &self.cities, &self.distances)
    }

    /// Runs each named heuristic in order, lazily.
    pub fn run_all<'a, S: AsRef<str> + 'a>(
        &'a self,
        names: &'a [S],
    ) -> impl Iterator<Item = TourResult<TourReport>> + 'a {
        names.iter().map(move |name| self.run(name.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Planar;
    use crate::models::{City, Location};

    fn square() -> Tour {
        [("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 1.0, 1.0), ("D", 1.0, 0.0)]
            .iter()
            .enumerate()
            .map(|(i, &(name, lat, lon))| City::new(name, Location::new(lat, lon).expect("valid"), i))
            .collect()
    }

    #[test]
    fn test_square_all_heuristics_agree() {
        let cities = square();
        for name in ["-given", "-nearest", "-insert"] {
            let report = run_heuristic(name, &cities, &Planar).expect("run");
            assert_eq!(report.closed_order(), vec!["A", "B", "C", "D", "A"], "{name}");
            assert!((report.total_length() - 4.0).abs() < 1e-10, "{name}");
            assert_eq!(report.label(), name);
        }
    }

    #[test]
    fn test_unknown_heuristic() {
        let err = run_heuristic("-fastest", &square(), &Planar).expect_err("unknown");
        assert!(matches!(err, TourError::UnknownHeuristic(_)));
    }

    #[test]
    fn test_too_few_cities() {
        let one = Tour::new(vec![City::new("A", Location::new(0.0, 0.0).expect("valid"), 0)]);
        let err = run_heuristic("given", &one, &Planar).expect_err("too few");
        assert!(matches!(err, TourError::TooFewCities { count: 1 }));
    }

    #[test]
    fn test_input_untouched() {
        let cities = square();
        let reversed: Tour = cities.cities().iter().rev().cloned().collect();
        let _ = run_heuristic("-nearest", &reversed, &Planar).expect("run");
        assert_eq!(reversed.names(), vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn test_runner_matches_direct_metric() {
        let cities = square();
        let runner = TourRunner::new(cities.clone(), &Planar);
        for name in ["given", "nearest", "insert"] {
            let via_matrix = runner.run(name).expect("run");
            let direct = run_heuristic(name, &cities, &Planar).expect("run");
            assert_eq!(via_matrix.order(), direct.order());
            assert!((via_matrix.total_length() - direct.total_length()).abs() < 1e-10);
        }
        assert_eq!(runner.cities(), &cities);
        assert_eq!(runner.distances().size(), 4);
    }

    #[test]
    fn test_runner_distances_symmetric() {
        let runner = TourRunner::new(square(), &crate::distance::GreatCircle);
        assert!(runner.distances().is_symmetric(1e-9));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "metric is not symmetric")]
    fn test_runner_rejects_one_way_metric() {
        let one_way = |a: &City, b: &City| {
            if a.original_index() < b.original_index() { 1.0 } else { 3.0 }
        };
        let _ = TourRunner::new(square(), &one_way);
    }

    #[test]
    fn test_runner_keeps_requested_order() {
        let runner = TourRunner::new(square(), &Planar);
        let labels: Vec<String> = runner
            .run_all(&["-insert", "-given"])
            .map(|r| r.expect("run").label().to_string())
            .collect();
        assert_eq!(labels, vec!["-insert", "-given"]);
    }
}
