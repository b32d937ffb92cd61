//! Distance functions and precomputed distance matrices.
//!
//! Every heuristic reads distances only through the [`Metric`] trait; none of
//! them look at coordinates directly.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{GreatCircle, Metric, MetricKind, Planar, EARTH_RADIUS_MILES};
