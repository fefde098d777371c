//! Canned demo result.
//!
//! Fed through exactly the same store and presenter path as a real service
//! response, so the dashboard can be exercised without a backend.

use crate::schema::{AnalysisResult, DatasetSummary, Pattern, Predictions, StatRecord};
use indexmap::IndexMap;

/// The sample enterprise dataset result.
pub fn sample_result() -> AnalysisResult {
    let mut statistics = IndexMap::new();
    statistics.insert(
        "Sales".to_string(),
        StatRecord::numeric(12500.50, 3200.00, 5000.0, 25000.0),
    );
    statistics.insert(
        "Customers".to_string(),
        StatRecord::numeric(450.20, 80.00, 100.0, 900.0),
    );
    statistics.insert(
        "Growth".to_string(),
        StatRecord::numeric(12.5, 2.1, 5.0, 20.0),
    );
    statistics.insert(
        "Satisfaction".to_string(),
        StatRecord::numeric(4.8, 0.3, 3.5, 5.0),
    );

    AnalysisResult {
        summary: DatasetSummary {
            total_records: 5000,
            total_columns: 8,
            numeric_columns: 5,
            categorical_columns: 3,
            missing_values: 0,
            data_quality_score: 98.5,
        },
        statistics,
        patterns: vec![
            pattern(
                "Correlation",
                "Strong positive correlation between Sales and Customers",
                "0.89",
            ),
            pattern("Trend", "Growth shows a steady increasing trend", "+1.2%"),
            pattern("Seasonality", "Peak activity detected in Q4", "High"),
        ],
        predictions: Predictions {
            target_column: "Sales".to_string(),
            model_used: "Random Forest (Enterprise)".to_string(),
            model_score: 0.965,
            mse: 850.25,
            future_predictions: vec![
                12800.0, 13100.0, 13500.0, 13200.0, 14000.0, 14500.0, 14200.0, 15000.0, 15500.0,
                16000.0,
            ],
            message: None,
        },
    }
}

fn pattern(kind: &str, description: &str, value: &str) -> Pattern {
    Pattern {
        kind: kind.to_string(),
        description: description.to_string(),
        value: Some(value.to_string()),
    }
}
