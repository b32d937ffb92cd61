//! Constructive heuristics for building closed tours.
//!
//! - `given` — keep the input order, O(n)
//! - [`nearest_neighbor`] — greedy nearest-neighbor extension, O(n²)
//! - [`cheapest_insertion`] — closest-city cheapest insertion, O(n³)

mod cheapest_insertion;
mod nearest_neighbor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::Metric;
use crate::error::TourError;
use crate::models::Tour;

pub use cheapest_insertion::{cheapest_insertion, CheapestInsertion};
pub use nearest_neighbor::nearest_neighbor;

/// A tour-construction strategy.
///
/// Parses from its name with or without the leading `-` used on the
/// command line.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::Heuristic;
///
/// assert_eq!("-nearest".parse::<Heuristic>().unwrap(), Heuristic::Nearest);
/// assert_eq!("insert".parse::<Heuristic>().unwrap(), Heuristic::Insert);
/// assert!("-greedy".parse::<Heuristic>().is_err());
/// assert_eq!(Heuristic::Given.to_string(), "given");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Visit cities in the order given.
    Given,
    /// Nearest-neighbor extension from the first city.
    Nearest,
    /// Cheapest insertion seeded with the closest pair.
    Insert,
}

impl Heuristic {
    /// All heuristics, in documentation order.
    pub const ALL: [Heuristic; 3] = [Heuristic::Given, Heuristic::Nearest, Heuristic::Insert];

    /// Name of this heuristic, without a leading dash.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Given => "given",
            Heuristic::Nearest => "nearest",
            Heuristic::Insert => "insert",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-').unwrap_or(s) {
            "given" => Ok(Heuristic::Given),
            "nearest" => Ok(Heuristic::Nearest),
            "insert" => Ok(Heuristic::Insert),
            _ => Err(TourError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Reorders `tour` in place with the given heuristic.
///
/// The result is always a permutation of the input cities.
pub fn build_tour<M: Metric + ?Sized>(heuristic: Heuristic, tour: &mut Tour, metric: &M) {
    match heuristic {
        Heuristic::Given => {}
        Heuristic::Nearest => nearest_neighbor(tour, metric),
        Heuristic::Insert => cheapest_insertion(tour, metric),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Planar;
    use crate::models::{City, Location};

    fn scattered() -> Tour {
        [
            ("A", 3.0, 1.0),
            ("B", 0.0, 7.0),
            ("C", 2.0, 2.0),
            ("D", 9.0, 4.0),
            ("E", 5.0, 5.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, &(name, lat, lon))| City::new(name, Location::new(lat, lon).expect("valid"), i))
        .collect()
    }

    #[test]
    fn test_parse_names() {
        for h in Heuristic::ALL {
            assert_eq!(h.name().parse::<Heuristic>().expect("known"), h);
            assert_eq!(format!("-{h}").parse::<Heuristic>().expect("known"), h);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "-bogus".parse::<Heuristic>().expect_err("unknown");
        assert!(matches!(err, TourError::UnknownHeuristic(ref s) if s == "-bogus"));
        assert!("".parse::<Heuristic>().is_err());
        assert!("--given".parse::<Heuristic>().is_err());
        assert!("Given".parse::<Heuristic>().is_err());
    }

    #[test]
    fn test_given_is_identity() {
        let mut tour = scattered();
        build_tour(Heuristic::Given, &mut tour, &Planar);
        assert_eq!(tour, scattered());
    }

    #[test]
    fn test_build_tour_dispatch() {
        let mut a = scattered();
        let mut b = scattered();
        build_tour(Heuristic::Nearest, &mut a, &Planar);
        nearest_neighbor(&mut b, &Planar);
        assert_eq!(a, b);

        let mut a = scattered();
        let mut b = scattered();
        build_tour(Heuristic::Insert, &mut a, &Planar);
        cheapest_insertion(&mut b, &Planar);
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_name() {
        let json = serde_json::to_string(&Heuristic::Nearest).expect("serialize");
        assert_eq!(json, "\"nearest\"");
    }
}
