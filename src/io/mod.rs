//! Location file input and city-name resolution.
//!
//! - [`LocationTable`] — parsed `name,latitude,longitude` records
//! - [`resolve_cities`] — builds the working tour from requested names

mod locations;
mod resolve;

pub use locations::{LocationTable, Place, SkippedRecord};
pub use resolve::resolve_cities;
