//! Insight live dashboard.
//!
//! Takes one immutable analysis result and keeps every dependent view in
//! step with it:
//! - [`presenters`]: one presenter per view region, each reading the store
//! - [`charts`]: chart widget lifecycle, at most one live widget per slot
//! - [`dashboard`]: composition of the presenters and the chart manager
//! - [`session`]: request/demo/export flows with the busy guard and notices
//! - [`client`]: the remote analysis service and the canned demo service
//! - [`intake`]: upload acceptance and CSV header discovery
//! - [`logging`]: structured logging setup
//!
//! Execution is single-threaded and cooperative; shared view state lives
//! in `Rc`/`RefCell` handles owned by one component each.

pub mod charts;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod intake;
pub mod logging;
pub mod notice;
pub mod presenters;
pub mod session;
pub mod target;

pub use charts::{ChartBackend, ChartError, ChartManager, ChartWidget, SvgChartBackend};
pub use client::{AnalysisRequest, AnalysisService, DemoService, HttpAnalysisClient};
pub use config::ClientConfig;
pub use dashboard::{Dashboard, DashboardRegions, DashboardTargets};
pub use intake::UploadedFile;
pub use notice::{Notice, NoticeLevel, NoticeLog, NoticeSink};
pub use session::{AnalysisSession, Trigger};
pub use target::{Region, RenderTarget};
