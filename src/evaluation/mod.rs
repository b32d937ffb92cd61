//! Tour length evaluation.

mod length;

pub use length::{edge_lengths, tour_length};
