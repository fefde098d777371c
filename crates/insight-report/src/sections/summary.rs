//! Executive summary section data.

use insight_common::view::{self, Tile};
use insight_common::DatasetSummary;
use serde::Serialize;

/// Executive summary tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySection {
    pub tiles: Vec<Tile>,
}

impl SummarySection {
    pub fn from_summary(summary: &DatasetSummary) -> Self {
        Self {
            tiles: view::executive_tiles(summary),
        }
    }
}
