use serde::{Deserialize, Serialize};

use crate::marker::Marker;

/// Aggregate counts over a marker snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStats {
    pub total_markers: usize,
    pub total_images: usize,
}

impl MarkerStats {
    /// Order-independent: only lengths are summed.
    pub fn from_markers(markers: &[Marker]) -> Self {
        Self {
            total_markers: markers.len(),
            total_images: markers.iter().map(Marker::image_count).sum(),
        }
    }
}
