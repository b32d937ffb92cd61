//! Metrics between cities.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{City, Location};

/// Mean Earth radius used by [`GreatCircle`], in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A symmetric, non-negative distance between two cities.
///
/// Implemented for the built-in metrics, for [`DistanceMatrix`](super::DistanceMatrix),
/// and for any closure `Fn(&City, &City) -> f64`.
pub trait Metric {
    /// Distance from `a` to `b`.
    fn distance(&self, a: &City, b: &City) -> f64;
}

impl<F> Metric for F
where
    F: Fn(&City, &City) -> f64,
{
    fn distance(&self, a: &City, b: &City) -> f64 {
        self(a, b)
    }
}

/// Great-circle distance in miles (haversine formula).
///
/// # Examples
///
/// ```
/// use u_tour::distance::{GreatCircle, Metric};
/// use u_tour::models::{City, Location};
///
/// let a = City::new("A", Location::new(0.0, 0.0).unwrap(), 0);
/// let b = City::new("B", Location::new(0.0, 1.0).unwrap(), 1);
/// let d = GreatCircle.distance(&a, &b);
/// assert!((d - 69.09).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreatCircle;

impl GreatCircle {
    /// Distance in miles between two locations.
    pub fn between(a: &Location, b: &Location) -> f64 {
        let lat1 = a.latitude().to_radians();
        let lat2 = b.latitude().to_radians();
        let dlat = (b.latitude() - a.latitude()).to_radians();
        let dlon = (b.longitude() - a.longitude()).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_MILES * h.clamp(0.0, 1.0).sqrt().asin()
    }
}

impl Metric for GreatCircle {
    fn distance(&self, a: &City, b: &City) -> f64 {
        Self::between(a.location(), b.location())
    }
}

/// Euclidean distance treating `(latitude, longitude)` as plane coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Planar;

impl Planar {
    /// Euclidean distance between two locations.
    pub fn between(a: &Location, b: &Location) -> f64 {
        let dx = a.latitude() - b.latitude();
        let dy = a.longitude() - b.longitude();
        (dx * dx + dy * dy).sqrt()
    }
}

impl Metric for Planar {
    fn distance(&self, a: &City, b: &City) -> f64 {
        Self::between(a.location(), b.location())
    }
}

/// Selectable metric, as chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    /// Haversine distance in miles.
    #[default]
    GreatCircle,
    /// Euclidean distance over raw coordinates.
    Planar,
}

impl Metric for MetricKind {
    fn distance(&self, a: &City, b: &City) -> f64 {
        match self {
            MetricKind::GreatCircle => GreatCircle.distance(a, b),
            MetricKind::Planar => Planar.distance(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str, lat: f64, lon: f64, idx: usize) -> City {
        City::new(name, Location::new(lat, lon).expect("valid"), idx)
    }

    #[test]
    fn test_great_circle_zero() {
        let a = city("A", 41.3, -72.9, 0);
        assert_eq!(GreatCircle.distance(&a, &a), 0.0);
    }

    #[test]
    fn test_great_circle_symmetric() {
        let a = city("HVN", 41.26, -72.89, 0);
        let b = city("ALB", 42.75, -73.80, 1);
        let ab = GreatCircle.distance(&a, &b);
        let ba = GreatCircle.distance(&b, &a);
        assert!(ab > 0.0);
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn test_great_circle_one_degree() {
        // One degree of arc along a meridian = R * pi / 180
        let a = city("A", 0.0, 0.0, 0);
        let b = city("B", 1.0, 0.0, 1);
        let expected = EARTH_RADIUS_MILES * std::f64::consts::PI / 180.0;
        assert!((GreatCircle.distance(&a, &b) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_great_circle_antipodal() {
        let a = city("A", 0.0, 0.0, 0);
        let b = city("B", 0.0, 180.0, 1);
        let expected = EARTH_RADIUS_MILES * std::f64::consts::PI;
        assert!((GreatCircle.distance(&a, &b) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_planar() {
        let a = city("A", 0.0, 0.0, 0);
        let b = city("B", 3.0, 4.0, 1);
        assert!((Planar.distance(&a, &b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_metric_kind_dispatch() {
        let a = city("A", 0.0, 0.0, 0);
        let b = city("B", 3.0, 4.0, 1);
        assert!((MetricKind::Planar.distance(&a, &b) - 5.0).abs() < 1e-10);
        assert!(
            (MetricKind::GreatCircle.distance(&a, &b) - GreatCircle.distance(&a, &b)).abs() < 1e-10
        );
        assert_eq!(MetricKind::default(), MetricKind::GreatCircle);
    }

    #[test]
    fn test_closure_metric() {
        let a = city("A", 0.0, 0.0, 0);
        let b = city("B", 0.0, 0.0, 3);
        let by_index = |x: &City, y: &City| x.original_index().abs_diff(y.original_index()) as f64;
        assert_eq!(by_index.distance(&a, &b), 3.0);
    }
}
