//! Column selector options.

use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::view;
use insight_common::ResultsStore;

/// Renders the selectable column list, placeholder first.
pub struct ColumnSelectorPresenter {
    target: Box<dyn RenderTarget>,
}

impl ColumnSelectorPresenter {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    pub fn render(&self, store: &ResultsStore) -> bool {
        let Some(result) = store.get() else {
            return false;
        };
        self.target
            .replace(markup::select_options(&view::column_options(&result)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Region;
    use insight_common::demo::sample_result;

    #[test]
    fn test_placeholder_then_columns() {
        let region = Region::new("selector");
        let mut store = ResultsStore::new();
        store.set(sample_result());
        ColumnSelectorPresenter::new(region.clone()).render(&store);
        let html = region.markup().unwrap();
        assert!(html.starts_with(r#"<option value="">Select a Column to Analyze</option>"#));
        assert_eq!(html.matches("<option").count(), 5);
    }
}
