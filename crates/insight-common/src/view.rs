//! View derivations.
//!
//! Turn an [`AnalysisResult`] into display-ready view models. Every string
//! in here is already formatted; the markup layer only arranges them.

use crate::format;
use crate::schema::{AnalysisResult, DatasetSummary, Predictions, StatRecord, CORE_METRICS};
use indexmap::IndexMap;
use serde::Serialize;

/// A value/label tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub value: String,
    pub label: String,
}

impl Tile {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Headline shown above the dashboard tiles.
pub fn quality_headline(summary: &DatasetSummary) -> String {
    format!(
        "Data Quality Score: {}",
        format::percent(summary.data_quality_score)
    )
}

/// Tiles for the live dashboard summary.
pub fn dashboard_tiles(summary: &DatasetSummary) -> Vec<Tile> {
    vec![
        Tile::new(format::thousands(summary.total_records), "Total Records"),
        Tile::new(format::thousands(summary.total_columns), "Columns"),
        Tile::new(format::thousands(summary.numeric_columns), "Numeric Columns"),
        Tile::new(format::thousands(summary.categorical_columns), "Categorical"),
        Tile::new(format::thousands(summary.missing_values), "Missing Values"),
    ]
}

/// Tiles for the exported report's executive summary.
pub fn executive_tiles(summary: &DatasetSummary) -> Vec<Tile> {
    vec![
        Tile::new(format::thousands(summary.total_records), "Total Records"),
        Tile::new(format::thousands(summary.total_columns), "Total Columns"),
        Tile::new(format::thousands(summary.numeric_columns), "Numeric Columns"),
        Tile::new(
            format::percent(summary.data_quality_score),
            "Data Quality Score",
        ),
    ]
}

/// One metric row of the statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsRow {
    /// Metric key (`mean`, `std`, ...).
    pub metric: &'static str,
    /// Row label (`MEAN`, `STD`, ...).
    pub label: String,
    /// One formatted cell per column, in column order.
    pub cells: Vec<String>,
}

/// Metrics by columns, metrics as rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsTable {
    pub columns: Vec<String>,
    pub rows: Vec<StatisticsRow>,
}

impl StatisticsTable {
    /// Derive the table. Always has one row per core metric, even with no
    /// columns; missing metrics become the non-numeric marker.
    pub fn derive(statistics: &IndexMap<String, StatRecord>) -> Self {
        let columns: Vec<String> = statistics.keys().cloned().collect();
        let rows = CORE_METRICS
            .iter()
            .map(|&metric| StatisticsRow {
                metric,
                label: format::metric_label(metric),
                cells: statistics
                    .values()
                    .map(|record| format::metric_or_marker(record.get(metric)))
                    .collect(),
            })
            .collect();
        Self { columns, rows }
    }

    /// Look up a cell by metric key and column name.
    pub fn cell(&self, metric: &str, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|r| r.metric == metric)
            .and_then(|r| r.cells.get(idx))
            .map(String::as_str)
    }
}

/// Tiles for one column's detail view, one per metric on the record.
pub fn column_detail(record: &StatRecord) -> Vec<Tile> {
    record
        .iter()
        .map(|(metric, value)| Tile::new(format::metric(value), metric))
        .collect()
}

/// One forecast line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionItem {
    /// 1-based forecast step.
    pub step: usize,
    pub label: String,
    pub value: String,
}

/// Model metadata and formatted forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionView {
    pub target_column: String,
    pub model_used: String,
    pub model_score: String,
    pub mse: String,
    pub items: Vec<PredictionItem>,
    pub message: Option<String>,
}

impl PredictionView {
    pub fn derive(predictions: &Predictions) -> Self {
        Self {
            target_column: or_marker(&predictions.target_column),
            model_used: or_marker(&predictions.model_used),
            model_score: format::model_stat(predictions.model_score),
            mse: format::model_stat(predictions.mse),
            items: predictions
                .future_predictions
                .iter()
                .enumerate()
                .map(|(i, &value)| PredictionItem {
                    step: i + 1,
                    label: format!("Prediction {}", i + 1),
                    value: format::prediction(value),
                })
                .collect(),
            message: predictions.message.clone(),
        }
    }
}

fn or_marker(s: &str) -> String {
    if s.is_empty() {
        format::NON_NUMERIC_MARKER.to_string()
    } else {
        s.to_string()
    }
}

/// Options for the column selector: `(value, label)`, placeholder first.
pub fn column_options(result: &AnalysisResult) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select a Column to Analyze".to_string()))
        .chain(
            result
                .column_names()
                .map(|name| (name.to_string(), name.to_string())),
        )
        .collect()
}
