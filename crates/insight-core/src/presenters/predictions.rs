//! Predictions region.

use super::render_chart;
use crate::charts::{ChartBackend, ChartManager};
use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::view::PredictionView;
use insight_common::{ChartSlot, ChartSpec, ResultsStore};

/// Renders model metadata and the forecast list, and drives the line chart.
pub struct PredictionPresenter {
    model: Box<dyn RenderTarget>,
    forecast: Box<dyn RenderTarget>,
}

impl PredictionPresenter {
    pub fn new(model: impl RenderTarget + 'static, forecast: impl RenderTarget + 'static) -> Self {
        Self {
            model: Box::new(model),
            forecast: Box::new(forecast),
        }
    }

    pub fn render<B: ChartBackend>(
        &self,
        store: &ResultsStore,
        charts: &mut ChartManager<B>,
    ) -> bool {
        let Some(result) = store.get() else {
            return false;
        };
        let view = PredictionView::derive(&result.predictions);
        self.model.replace(markup::model_performance(&view));
        self.forecast.replace(markup::prediction_list(&view));
        render_chart(
            charts,
            ChartSlot::Line,
            ChartSpec::forecast(&result.predictions),
        );
        true
    }
}
