//! View-region presenters.
//!
//! Each presenter owns one injected [`RenderTarget`](crate::target::RenderTarget)
//! and renders it from the store's current result. Presenters are
//! independent of each other. With an empty store `render` is a no-op and
//! returns `false`.

pub mod column_detail;
pub mod column_selector;
pub mod patterns;
pub mod predictions;
pub mod statistics;
pub mod summary;

pub use column_detail::ColumnDetailPresenter;
pub use column_selector::ColumnSelectorPresenter;
pub use patterns::PatternPresenter;
pub use predictions::PredictionPresenter;
pub use statistics::StatisticsTablePresenter;
pub use summary::SummaryPresenter;

use crate::charts::{ChartBackend, ChartManager};
use insight_common::{ChartSlot, ChartSpec};
use tracing::warn;

/// Render a chart, logging instead of failing the region.
fn render_chart<B: ChartBackend>(charts: &mut ChartManager<B>, slot: ChartSlot, spec: ChartSpec) {
    if let Err(e) = charts.render(slot, spec) {
        warn!(slot = %slot, error = %e, "Chart render failed");
    }
}
