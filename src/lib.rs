//! # u-tour
//!
//! Closed-tour construction over small sets of named geographic points,
//! with canonical output so equal cycles always print the same way.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, City, Tour)
//! - [`distance`] — Metrics and the precomputed distance matrix
//! - [`constructive`] — Tour heuristics (given, nearest neighbor, cheapest insertion)
//! - [`normalize`] — Rotation and direction canonicalization
//! - [`evaluation`] — Closed-cycle length
//! - [`io`] — Location file parsing and city-name resolution
//! - [`runner`] — Build, normalize, and measure one heuristic run
//! - [`report`] — Text and JSON report lines
//! - [`config`] — Run settings
//! - [`error`] — Error type

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod normalize;
pub mod report;
pub mod runner;

pub use error::{TourError, TourResult};
