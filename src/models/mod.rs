//! Domain model types for tour construction.
//!
//! Provides the core abstractions: geographic locations, named cities that
//! remember the position they were given in, and tours as ordered cycles
//! over a fixed set of cities.

mod city;
mod location;
mod tour;

pub use city::City;
pub use location::Location;
pub use tour::Tour;
