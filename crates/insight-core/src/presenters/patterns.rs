//! Detected patterns region.

use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::ResultsStore;

pub struct PatternPresenter {
    target: Box<dyn RenderTarget>,
}

impl PatternPresenter {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    /// One card per pattern, in result order.
    pub fn render(&self, store: &ResultsStore) -> bool {
        let Some(result) = store.get() else {
            return false;
        };
        self.target.replace(markup::pattern_cards(&result.patterns));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Region;
    use insight_common::demo::sample_result;
    use insight_common::Pattern;

    #[test]
    fn test_one_card_per_pattern() {
        let region = Region::new("patterns");
        let mut store = ResultsStore::new();
        store.set(sample_result());
        PatternPresenter::new(region.clone()).render(&store);
        let html = region.markup().unwrap();
        assert_eq!(html.matches(r#"<div class="insight-card">"#).count(), 3);
    }

    #[test]
    fn test_value_line_only_when_present() {
        let region = Region::new("patterns");
        let mut result = sample_result();
        result.patterns = vec![
            Pattern {
                kind: "Trend".into(),
                description: "Upward".into(),
                value: Some(String::new()),
            },
            Pattern {
                kind: "Outliers".into(),
                description: "Few".into(),
                value: Some("3".into()),
            },
        ];
        let mut store = ResultsStore::new();
        store.set(result);
        PatternPresenter::new(region.clone()).render(&store);
        let html = region.markup().unwrap();
        assert_eq!(html.matches("Value:").count(), 1);
        assert!(html.contains("Value: 3"));
    }
}
