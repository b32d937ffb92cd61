//! Geographic location type.

use serde::{Deserialize, Serialize};

/// A point on the globe, in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// let loc = Location::new(41.31, -72.92).unwrap();
/// assert_eq!(loc.latitude(), 41.31);
/// assert_eq!(loc.longitude(), -72.92);
/// assert!(Location::new(f64::NAN, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    ///
    /// Returns `None` if either coordinate is non-finite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
