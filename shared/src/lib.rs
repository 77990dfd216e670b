pub mod marker;
pub mod stats;

pub use marker::*;
pub use stats::MarkerStats;
