//! Analysis result model.
//!
//! Mirrors the JSON document returned by the analysis service. A result is
//! an atomic snapshot: it is never patched in place, a new run replaces it
//! wholesale in the [`ResultsStore`](crate::store::ResultsStore).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The four metrics every statistics view shows, in display order.
pub const CORE_METRICS: [&str; 4] = ["mean", "std", "min", "max"];

/// Complete output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dataset-level counts and quality score.
    pub summary: DatasetSummary,
    /// Per-column statistics, in column order.
    #[serde(default)]
    pub statistics: IndexMap<String, StatRecord>,
    /// Detected patterns, in service order.
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    /// Model metadata and forecast.
    pub predictions: Predictions,
}

/// Dataset summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_records: u64,
    pub total_columns: u64,
    pub numeric_columns: u64,
    pub categorical_columns: u64,
    pub missing_values: u64,
    /// Quality score in [0, 100].
    pub data_quality_score: f64,
}

/// A single statistic value.
///
/// Numeric columns carry numbers; categorical columns carry counts and
/// free text (`top`). Anything the service could not compute is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Null,
}

impl MetricValue {
    /// Numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Number(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

/// Statistics for one column: metric name to value, in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatRecord {
    metrics: IndexMap<String, MetricValue>,
}

impl StatRecord {
    /// Build a numeric record from the four core metrics.
    pub fn numeric(mean: f64, std: f64, min: f64, max: f64) -> Self {
        Self::from_pairs([
            ("mean", MetricValue::Number(mean)),
            ("std", MetricValue::Number(std)),
            ("min", MetricValue::Number(min)),
            ("max", MetricValue::Number(max)),
        ])
    }

    /// Build a record from `(metric, value)` pairs, keeping their order.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, MetricValue)>,
    {
        Self {
            metrics: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Value of a metric, if present.
    pub fn get(&self, metric: &str) -> Option<&MetricValue> {
        self.metrics.get(metric)
    }

    /// Numeric value of a metric, if present and numeric.
    pub fn number(&self, metric: &str) -> Option<f64> {
        self.get(metric).and_then(MetricValue::as_f64)
    }

    /// Mean, when the column is numeric.
    pub fn mean(&self) -> Option<f64> {
        self.number("mean")
    }

    /// Whether this record describes a numeric column.
    pub fn is_numeric(&self) -> bool {
        self.mean().is_some()
    }

    /// Iterate metrics in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// A detected pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Pattern type (Correlation, Trend, Outliers, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable description.
    pub description: String,
    /// Optional headline value.
    #[serde(default)]
    pub value: Option<String>,
}

impl Pattern {
    /// Headline value, when present and non-empty.
    pub fn display_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// Model metadata and forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    #[serde(default)]
    pub target_column: String,
    #[serde(default)]
    pub model_used: String,
    /// R² score on the held-out split.
    #[serde(default)]
    pub model_score: f64,
    /// Mean squared error on the held-out split.
    #[serde(default)]
    pub mse: f64,
    /// Forecast for steps 1..N. Order is the forecast horizon.
    #[serde(default)]
    pub future_predictions: Vec<f64>,
    /// Set by the service when no forecast could be produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// Parse a result from the service's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up one column's statistics.
    pub fn column(&self, name: &str) -> Option<&StatRecord> {
        self.statistics.get(name)
    }

    /// Column names in display order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.statistics.keys().map(String::as_str)
    }

    /// Violations of the documented summary invariants.
    ///
    /// Used for diagnostics only; a result is never rejected for these.
    pub fn schema_violations(&self) -> Vec<String> {
        let s = &self.summary;
        let mut violations = Vec::new();
        if s.numeric_columns > s.total_columns {
            violations.push(format!(
                "numeric_columns {} exceeds total_columns {}",
                s.numeric_columns, s.total_columns
            ));
        }
        if s.categorical_columns > s.total_columns {
            violations.push(format!(
                "categorical_columns {} exceeds total_columns {}",
                s.categorical_columns, s.total_columns
            ));
        }
        if !(0.0..=100.0).contains(&s.data_quality_score) {
            violations.push(format!(
                "data_quality_score {} outside [0, 100]",
                s.data_quality_score
            ));
        }
        if self.predictions.mse < 0.0 {
            violations.push(format!("mse {} is negative", self.predictions.mse));
        }
        violations
    }
}
