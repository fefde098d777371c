//! Insight common types, store, formatting and view derivations.
//!
//! This crate provides the pieces shared by the live dashboard and the
//! exported report:
//! - The analysis-result model received from the analysis service
//! - The single-slot results store
//! - Display formatting (fixed precision, separators, markers)
//! - View derivations (summary tiles, statistics table, predictions, charts)
//! - HTML fragments built from those derivations
//! - Static SVG chart rendering
//! - Common error types
//!
//! Both the dashboard presenters and the report generator render through
//! [`view`] and [`markup`], so the two outputs cannot drift apart.

pub mod chart;
pub mod demo;
pub mod error;
pub mod format;
pub mod markup;
pub mod schema;
pub mod store;
pub mod view;

pub use chart::{ChartKind, ChartSlot, ChartSpec, ChartStyle};
pub use error::{Error, ErrorCategory, Result};
pub use schema::{AnalysisResult, DatasetSummary, MetricValue, Pattern, Predictions, StatRecord};
pub use store::ResultsStore;
