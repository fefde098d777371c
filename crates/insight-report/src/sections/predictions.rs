//! Model performance and forecast section data.

use insight_common::view::PredictionView;
use insight_common::{ChartSpec, Predictions};
use serde::Serialize;

/// Model metadata, formatted forecast and trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionsSection {
    pub view: PredictionView,
    /// Present when chart images are enabled and the forecast is non-empty.
    pub trend_chart: Option<ChartSpec>,
}

impl PredictionsSection {
    pub fn from_predictions(predictions: &Predictions, charts: bool) -> Self {
        let trend_chart =
            Some(ChartSpec::forecast(predictions)).filter(|spec| charts && !spec.is_empty());
        Self {
            view: PredictionView::derive(predictions),
            trend_chart,
        }
    }
}
