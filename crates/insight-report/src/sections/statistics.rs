//! Statistical summary section data.

use insight_common::view::StatisticsTable;
use insight_common::{AnalysisResult, ChartSpec};
use serde::Serialize;

/// Metrics-by-column table plus the column means chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSection {
    pub table: StatisticsTable,
    /// Present when chart images are enabled and there is a numeric column.
    pub means_chart: Option<ChartSpec>,
}

impl StatisticsSection {
    pub fn from_result(result: &AnalysisResult, charts: bool) -> Self {
        let means_chart = Some(ChartSpec::column_means(&result.statistics))
            .filter(|spec| charts && !spec.is_empty());
        Self {
            table: StatisticsTable::derive(&result.statistics),
            means_chart,
        }
    }
}
