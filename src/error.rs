//! Error types for tour construction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for u-tour operations.
pub type TourResult<T> = Result<T, TourError>;

/// Errors raised while loading locations, resolving cities, or running a
/// heuristic.
#[derive(Debug, Error)]
pub enum TourError {
    /// The location file could not be opened or read.
    #[error("cannot read location file '{}'", .path.display())]
    InputFileUnreadable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A requested city name does not appear in the location file.
    #[error("city '{0}' not found in location file")]
    UnresolvedCityName(String),

    /// A heuristic name other than `given`, `nearest`, or `insert`.
    #[error("invalid heuristic '{0}'")]
    UnknownHeuristic(String),

    /// Tours need at least two cities.
    #[error("at least two city names must be provided (got {count})")]
    TooFewCities {
        /// Number of cities supplied.
        count: usize,
    },
}
