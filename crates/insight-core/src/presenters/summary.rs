//! Dataset summary region.

use crate::target::RenderTarget;
use insight_common::markup;
use insight_common::view;
use insight_common::ResultsStore;
use tracing::trace;

/// Renders the quality banner and the summary tiles.
pub struct SummaryPresenter {
    target: Box<dyn RenderTarget>,
}

impl SummaryPresenter {
    pub fn new(target: impl RenderTarget + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    pub fn render(&self, store: &ResultsStore) -> bool {
        let Some(result) = store.get() else {
            return false;
        };
        let summary = &result.summary;
        let html = format!(
            "{}\n{}",
            markup::quality_banner(&view::quality_headline(summary)),
            markup::tiles(&view::dashboard_tiles(summary))
        );
        self.target.replace(html);
        trace!(target_region = self.target.name(), "Rendered summary");
        true
    }
}
