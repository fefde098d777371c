//! Per-column detail region.

use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::view;
use insight_common::ResultsStore;
use tracing::debug;

/// Renders one tile per metric of the selected column.
///
/// Invoked once per selection without re-running the rest of the pipeline.
pub struct ColumnDetailPresenter {
    target: Box<dyn RenderTarget>,
}

impl ColumnDetailPresenter {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    /// No-op for an empty selection, an empty store, or a column the
    /// current result does not have (stale selection).
    pub fn render(&self, store: &ResultsStore, column: &str) -> bool {
        if column.is_empty() {
            return false;
        }
        let Some(result) = store.get() else {
            return false;
        };
        let Some(record) = result.column(column) else {
            debug!(column, "Ignoring selection of unknown column");
            return false;
        };
        self.target
            .replace(markup::tiles(&view::column_detail(record)));
        true
    }

    /// Empty the region, e.g. after a new result resets the selection.
    pub fn clear(&self) {
        self.target.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Region;
    use insight_common::demo::sample_result;
    use insight_common::{MetricValue, StatRecord};

    fn store() -> ResultsStore {
        let mut store = ResultsStore::new();
        store.set(sample_result());
        store
    }

    #[test]
    fn test_one_tile_per_metric() {
        let region = Region::new("detail");
        assert!(ColumnDetailPresenter::new(region.clone()).render(&store(), "Sales"));
        let html = region.markup().unwrap();
        assert_eq!(html.matches("stat-box").count(), 4);
        assert!(html.contains(r#"<span class="stat-value">12500.50</span><span class="stat-label">mean</span>"#));
    }

    #[test]
    fn test_empty_selection_is_noop() {
        let region = Region::new("detail");
        assert!(!ColumnDetailPresenter::new(region.clone()).render(&store(), ""));
        assert_eq!(region.mutations(), 0);
    }

    #[test]
    fn test_empty_store_is_noop() {
        let region = Region::new("detail");
        assert!(!ColumnDetailPresenter::new(region.clone()).render(&ResultsStore::new(), "Sales"));
        assert_eq!(region.mutations(), 0);
    }

    #[test]
    fn test_stale_selection_is_noop() {
        let region = Region::new("detail");
        assert!(!ColumnDetailPresenter::new(region.clone()).render(&store(), "Revenue"));
        assert_eq!(region.mutations(), 0);
    }

    #[test]
    fn test_only_present_metrics() {
        let mut result = sample_result();
        result.statistics.insert(
            "Region".to_string(),
            StatRecord::from_pairs([
                ("count", MetricValue::Number(5000.0)),
                ("top", MetricValue::Text("North".into())),
            ]),
        );
        let mut store = ResultsStore::new();
        store.set(result);
        let region = Region::new("detail");
        ColumnDetailPresenter::new(region.clone()).render(&store, "Region");
        let html = region.markup().unwrap();
        assert_eq!(html.matches("stat-box").count(), 2);
        assert!(html.contains("5000.00"));
        assert!(html.contains("North"));
    }
}
