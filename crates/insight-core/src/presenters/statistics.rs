//! Statistics table region.

use super::render_chart;
use crate::charts::{ChartBackend, ChartManager};
use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::view::StatisticsTable;
use insight_common::{ChartSlot, ChartSpec, ResultsStore};
use tracing::debug;

/// Renders the metrics-by-columns table and drives the bar chart.
pub struct StatisticsTablePresenter {
    target: Box<dyn RenderTarget>,
}

impl StatisticsTablePresenter {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
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
        let table = StatisticsTable::derive(&result.statistics);
        debug!(columns = table.columns.len(), "Rendering statistics table");
        self.target.replace(markup::statistics_table(&table));
        render_chart(
            charts,
            ChartSlot::Bar,
            ChartSpec::column_means(&result.statistics),
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartWidget, SvgChartBackend};
    use crate::target::Region;
    use indexmap::IndexMap;
    use insight_common::demo::sample_result;
    use insight_common::StatRecord;
    use std::rc::Rc;

    fn manager(bar: &Region) -> ChartManager<SvgChartBackend> {
        ChartManager::new(SvgChartBackend::new().with_surface(ChartSlot::Bar, Rc::new(bar.clone())))
    }

    #[test]
    fn test_sales_mean_cell() {
        let mut statistics = IndexMap::new();
        statistics.insert(
            "Sales".to_string(),
            StatRecord::numeric(12500.5, 3200.0, 5000.0, 25000.0),
        );
        let mut result = sample_result();
        result.statistics = statistics;
        let mut store = ResultsStore::new();
        store.set(result);

        let region = Region::new("statistics");
        let bar = Region::new("bar-chart");
        let mut charts = manager(&bar);
        assert!(StatisticsTablePresenter::new(region.clone()).render(&store, &mut charts));

        let html = region.markup().unwrap();
        assert!(html.contains("<th>Sales</th>"));
        assert!(html.contains("<tr><td>MEAN</td><td>12500.50</td></tr>"));
        assert!(html.contains("<tr><td>MAX</td><td>25000.00</td></tr>"));
    }

    #[test]
    fn test_drives_bar_chart() {
        let mut store = ResultsStore::new();
        store.set(sample_result());
        let bar = Region::new("bar-chart");
        let mut charts = manager(&bar);
        StatisticsTablePresenter::new(Region::new("statistics")).render(&store, &mut charts);

        let live = charts.live(ChartSlot::Bar).unwrap();
        assert_eq!(live.spec().labels.len(), 4);
        assert!(bar.markup().unwrap().contains("Column Means Comparison"));
    }

    #[test]
    fn test_chart_failure_does_not_block_table() {
        let mut store = ResultsStore::new();
        store.set(sample_result());
        let region = Region::new("statistics");
        // No surface bound for the bar slot
        let mut charts = ChartManager::new(SvgChartBackend::new());
        assert!(StatisticsTablePresenter::new(region.clone()).render(&store, &mut charts));
        assert!(region.markup().is_some());
        assert_eq!(charts.live_count(), 0);
    }

    #[test]
    fn test_empty_store_is_noop() {
        let region = Region::new("statistics");
        let mut charts = manager(&Region::new("bar-chart"));
        assert!(!StatisticsTablePresenter::new(region.clone()).render(&ResultsStore::new(), &mut charts));
        assert_eq!(region.mutations(), 0);
        assert_eq!(charts.live_count(), 0);
    }
}
