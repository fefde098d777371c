//! Printable HTML report generator for Insight analysis results.
//!
//! Freezes the active analysis result into one self-contained HTML
//! document that can be opened on its own and printed.
//!
//! # Features
//!
//! - **Single-file output**: all styling is embedded, nothing is fetched
//! - **No script**: markup, styles and literal derived values only
//! - **Static charts**: optional SVG chart images embedded as `data:` URIs
//! - **Deterministic**: the same result and configuration give the same bytes
//! - **Shared derivations**: tables and lists come from the same view layer
//!   as the live dashboard
//!
//! # Sections
//!
//! - Executive summary: record/column counts and data quality score
//! - Statistical summary: metrics by column table, column means chart
//! - Insights: detected patterns
//! - Model performance: target, model, R² score, mean squared error
//! - Forecast: numbered future predictions and trend chart
//!
//! # Example
//!
//! ```no_run
//! use insight_common::{demo::sample_result, ResultsStore};
//! use insight_report::{ReportConfig, ReportGenerator};
//!
//! let mut store = ResultsStore::new();
//! store.set(sample_result());
//! let generator = ReportGenerator::new(ReportConfig::default());
//! let html = generator.generate(&store).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod sections;

pub use config::{ChartImageConfig, ReportConfig, ReportSections, ReportTheme};
pub use error::{ReportError, Result};
pub use generator::{ReportData, ReportGenerator};
