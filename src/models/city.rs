//! City type.

use serde::{Deserialize, Serialize};

use super::Location;

/// A named city in a working tour.
///
/// `original_index` is the 0-based position the city was given in when the
/// working set was built. It is never recomputed, so it survives every swap,
/// shift, and rotation a heuristic applies.
///
/// # Examples
///
/// ```
/// use u_tour::models::{City, Location};
///
/// let c = City::new("HVN", Location::new(41.26, -72.89).unwrap(), 3);
/// assert_eq!(c.name(), "HVN");
/// assert_eq!(c.original_index(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    location: Location,
    original_index: usize,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, location: Location, original_index: usize) -> Self {
        Self {
            name: name.into(),
            location,
            original_index,
        }
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of this city.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Position this city held in the working set.
    pub fn original_index(&self) -> usize {
        self.original_index
    }
}
