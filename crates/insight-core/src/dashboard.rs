//! Dashboard composition.
//!
//! Wires the presenters to their regions and owns the chart manager. The
//! store is passed in on every call; the dashboard keeps no result state.

use crate::charts::{ChartBackend, ChartManager, SvgChartBackend};
use crate::presenters::*;
use crate::target::{Region, RenderTarget};
use insight_common::{ChartSlot, ResultsStore};
use std::rc::Rc;
use tracing::debug;

/// The render targets of every dashboard region.
pub struct DashboardTargets {
    pub summary: Box<dyn RenderTarget>,
    pub statistics: Box<dyn RenderTarget>,
    pub patterns: Box<dyn RenderTarget>,
    pub column_selector: Box<dyn RenderTarget>,
    pub column_detail: Box<dyn RenderTarget>,
    pub model: Box<dyn RenderTarget>,
    pub forecast: Box<dyn RenderTarget>,
}

/// In-memory regions for every dashboard target, chart surfaces included.
#[derive(Debug, Clone)]
pub struct DashboardRegions {
    pub summary: Region,
    pub statistics: Region,
    pub patterns: Region,
    pub column_selector: Region,
    pub column_detail: Region,
    pub model: Region,
    pub forecast: Region,
    pub bar_chart: Region,
    pub line_chart: Region,
}

impl DashboardRegions {
    pub fn new() -> Self {
        Self {
            summary: Region::new("summary"),
            statistics: Region::new("statistics"),
            patterns: Region::new("patterns"),
            column_selector: Region::new("column-selector"),
            column_detail: Region::new("column-detail"),
            model: Region::new("model-performance"),
            forecast: Region::new("forecast"),
            bar_chart: Region::new("bar-chart"),
            line_chart: Region::new("line-chart"),
        }
    }

    /// Targets sharing these regions.
    pub fn targets(&self) -> DashboardTargets {
        DashboardTargets {
            summary: Box::new(self.summary.clone()),
            statistics: Box::new(self.statistics.clone()),
            patterns: Box::new(self.patterns.clone()),
            column_selector: Box::new(self.column_selector.clone()),
            column_detail: Box::new(self.column_detail.clone()),
            model: Box::new(self.model.clone()),
            forecast: Box::new(self.forecast.clone()),
        }
    }

    /// An SVG backend drawing into the two chart regions.
    pub fn svg_backend(&self) -> SvgChartBackend {
        SvgChartBackend::new()
            .with_surface(ChartSlot::Bar, Rc::new(self.bar_chart.clone()))
            .with_surface(ChartSlot::Line, Rc::new(self.line_chart.clone()))
    }
}

impl Default for DashboardRegions {
    fn default() -> Self {
        Self::new()
    }
}

/// All live views of one session.
pub struct Dashboard<B: ChartBackend> {
    summary: SummaryPresenter,
    statistics: StatisticsTablePresenter,
    patterns: PatternPresenter,
    column_selector: ColumnSelectorPresenter,
    column_detail: ColumnDetailPresenter,
    predictions: PredictionPresenter,
    charts: ChartManager<B>,
}

impl<B: ChartBackend> Dashboard<B> {
    pub fn new(targets: DashboardTargets, backend: B) -> Self {
        Self {
            summary: SummaryPresenter::new(targets.summary),
            statistics: StatisticsTablePresenter::new(targets.statistics),
            patterns: PatternPresenter::new(targets.patterns),
            column_selector: ColumnSelectorPresenter::new(targets.column_selector),
            column_detail: ColumnDetailPresenter::new(targets.column_detail),
            predictions: PredictionPresenter::new(targets.model, targets.forecast),
            charts: ChartManager::new(backend),
        }
    }

    /// Render every region from the current result.
    ///
    /// The column selection resets with a new result, so the detail region
    /// is cleared rather than re-rendered. No-op on an empty store.
    pub fn render_all(&mut self, store: &ResultsStore) -> bool {
        if store.is_empty() {
            return false;
        }
        self.summary.render(store);
        self.statistics.render(store, &mut self.charts);
        self.patterns.render(store);
        self.column_selector.render(store);
        self.column_detail.clear();
        self.predictions.render(store, &mut self.charts);
        debug!(
            generation = store.generation(),
            live_charts = self.charts.live_count(),
            "Dashboard rendered"
        );
        true
    }

    /// Re-render only the column detail region.
    pub fn select_column(&self, store: &ResultsStore, column: &str) -> bool {
        self.column_detail.render(store, column)
    }

    pub fn charts(&self) -> &ChartManager<B> {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartWidget;
    use insight_common::demo::sample_result;

    fn dashboard() -> (DashboardRegions, Dashboard<SvgChartBackend>) {
        let regions = DashboardRegions::new();
        let dashboard = Dashboard::new(regions.targets(), regions.svg_backend());
        (regions, dashboard)
    }

    #[test]
    fn test_render_all_fills_every_region() {
        let (regions, mut dashboard) = dashboard();
        let mut store = ResultsStore::new();
        store.set(sample_result());

        assert!(dashboard.render_all(&store));
        for region in [
            &regions.summary,
            &regions.statistics,
            &regions.patterns,
            &regions.column_selector,
            &regions.model,
            &regions.forecast,
            &regions.bar_chart,
            &regions.line_chart,
        ] {
            assert!(region.markup().is_some(), "{} is empty", region.name());
        }
        assert!(regions.column_detail.is_empty());
        assert_eq!(dashboard.charts().live_count(), 2);
    }

    #[test]
    fn test_render_all_on_empty_store() {
        let (regions, mut dashboard) = dashboard();
        assert!(!dashboard.render_all(&ResultsStore::new()));
        assert_eq!(regions.summary.mutations(), 0);
        assert_eq!(regions.column_detail.mutations(), 0);
    }

    #[test]
    fn test_new_result_resets_column_detail() {
        let (regions, mut dashboard) = dashboard();
        let mut store = ResultsStore::new();
        store.set(sample_result());
        dashboard.render_all(&store);
        assert!(dashboard.select_column(&store, "Growth"));
        assert!(regions.column_detail.markup().is_some());

        store.set(sample_result());
        dashboard.render_all(&store);
        assert!(regions.column_detail.is_empty());
    }

    #[test]
    fn test_rerender_keeps_one_widget_per_slot() {
        let (_regions, mut dashboard) = dashboard();
        let mut store = ResultsStore::new();
        store.set(sample_result());
        dashboard.render_all(&store);

        let mut second = sample_result();
        second.predictions.future_predictions = vec![1.0, 2.0];
        store.set(second);
        dashboard.render_all(&store);

        assert_eq!(dashboard.charts().live_count(), 2);
        let line = dashboard.charts().live(ChartSlot::Line).unwrap();
        assert_eq!(line.spec().values, vec![1.0, 2.0]);
        assert!(!line.is_released());
    }
}
