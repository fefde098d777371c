//! Session control: the flows a user triggers.
//!
//! The session owns the store, the dashboard and the trigger. A result is
//! installed only after the service call completes, and only then are the
//! presenters run, so no view ever sees a partial result.

use crate::charts::{ChartBackend, SvgChartBackend};
use crate::client::{AnalysisRequest, AnalysisService, DemoService, HttpAnalysisClient};
use crate::config::ClientConfig;
use crate::dashboard::{Dashboard, DashboardRegions};
use crate::intake::UploadedFile;
use crate::logging::generate_run_id;
use crate::notice::{Notice, NoticeSink};
use insight_common::{AnalysisResult, Error, Result, ResultsStore};
use insight_report::{ReportConfig, ReportError, ReportGenerator};
use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, error, info, info_span, warn, Instrument};

pub const MSG_FILE_READY: &str = "File ready for analysis!";
pub const MSG_ANALYSIS_DONE: &str = "Analysis completed successfully!";
pub const MSG_DEMO_LOADED: &str = "Sample enterprise data loaded successfully!";

/// The analyze control. Disabled while a request is outstanding.
#[derive(Debug, Clone, Default)]
pub struct Trigger {
    busy: Rc<Cell<bool>>,
}

impl Trigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy.get()
    }

    /// Disable the trigger until the guard is dropped. `None` if it is
    /// already disabled.
    pub fn engage(&self) -> Option<TriggerGuard> {
        if self.busy.replace(true) {
            return None;
        }
        Some(TriggerGuard {
            busy: self.busy.clone(),
        })
    }
}

/// Re-enables the trigger on drop, whatever the outcome of the request.
#[derive(Debug)]
pub struct TriggerGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for TriggerGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

/// One page session.
pub struct AnalysisSession<B: ChartBackend> {
    store: RefCell<ResultsStore>,
    dashboard: RefCell<Dashboard<B>>,
    service: Box<dyn AnalysisService>,
    demo: DemoService,
    report: ReportGenerator,
    notices: Box<dyn NoticeSink>,
    trigger: Trigger,
    selected: RefCell<Option<UploadedFile>>,
}

impl AnalysisSession<SvgChartBackend> {
    /// A session over in-memory regions talking to the HTTP service.
    pub fn connect(
        regions: &DashboardRegions,
        config: &ClientConfig,
        notices: impl NoticeSink + 'static,
    ) -> Result<Self> {
        let dashboard = Dashboard::new(regions.targets(), regions.svg_backend());
        let client = HttpAnalysisClient::new(config.clone())?;
        Ok(Self::new(dashboard, Box::new(client), notices)
            .with_demo(DemoService::new(config.demo_latency())))
    }
}

impl<B: ChartBackend> AnalysisSession<B> {
    pub fn new(
        dashboard: Dashboard<B>,
        service: Box<dyn AnalysisService>,
        notices: impl NoticeSink + 'static,
    ) -> Self {
        Self {
            store: RefCell::new(ResultsStore::new()),
            dashboard: RefCell::new(dashboard),
            service,
            demo: DemoService::new(ClientConfig::default().demo_latency()),
            report: ReportGenerator::default_config(),
            notices: Box::new(notices),
            trigger: Trigger::new(),
            selected: RefCell::new(None),
        }
    }

    pub fn with_demo(mut self, demo: DemoService) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_report_config(mut self, config: ReportConfig) -> Self {
        self.report = ReportGenerator::new(config);
        self
    }

    pub fn store(&self) -> Ref<'_, ResultsStore> {
        self.store.borrow()
    }

    pub fn dashboard(&self) -> Ref<'_, Dashboard<B>> {
        self.dashboard.borrow()
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn selected_file(&self) -> Option<UploadedFile> {
        self.selected.borrow().clone()
    }

    /// Pick the file to analyze. Returns the target-column options.
    ///
    /// A rejected file clears any previous selection.
    pub fn select_file(
        &self,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<Vec<(String, String)>> {
        let file = match UploadedFile::accept(name, bytes) {
            Ok(file) => file,
            Err(e) => {
                self.selected.replace(None);
                debug!(error = %e, "Upload rejected");
                self.notices.post(Notice::error(e.user_message()));
                return Err(e);
            }
        };
        let options = file.target_column_options().unwrap_or_else(|e| {
            warn!(file = file.name(), error = %e, "Could not read CSV headers");
            vec![(String::new(), "Auto-detect Target".to_string())]
        });
        self.selected.replace(Some(file));
        self.notices.post(Notice::success(MSG_FILE_READY));
        Ok(options)
    }

    /// Analyze the selected file.
    ///
    /// Rejected with [`Error::AnalysisInFlight`] while another request is
    /// outstanding. On service failure the current result stays in place.
    pub async fn analyze(&self, target_column: &str, model_type: &str) -> Result<()> {
        let Some(file) = self.selected_file() else {
            let e = Error::NoFileSelected;
            self.notices.post(Notice::error(e.user_message()));
            return Err(e);
        };
        let request = AnalysisRequest::new(file)
            .with_target_column(target_column)
            .with_model_type(model_type);

        let Some(_guard) = self.trigger.engage() else {
            debug!("Analysis already in flight; ignoring trigger");
            return Err(Error::AnalysisInFlight);
        };

        let run_id = generate_run_id();
        let span = info_span!("analysis", run_id = %run_id, file = request.file.name());
        let outcome = self
            .service
            .analyze(&request)
            .instrument(span.clone())
            .await;

        let _entered = span.enter();
        match outcome {
            Ok(result) => {
                self.install(result);
                self.notices.post(Notice::success(MSG_ANALYSIS_DONE));
                Ok(())
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "Analysis failed");
                self.notices.post(Notice::error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Load the canned demo result through the same path as a real run.
    pub async fn load_demo(&self) -> Result<()> {
        let Some(_guard) = self.trigger.engage() else {
            return Err(Error::AnalysisInFlight);
        };
        let run_id = generate_run_id();
        let span = info_span!("demo", run_id = %run_id);
        let result = self.demo.load().instrument(span.clone()).await;
        let _entered = span.enter();
        self.install(result);
        self.notices.post(Notice::success(MSG_DEMO_LOADED));
        Ok(())
    }

    /// Show the detail tiles for one column. No-op for an empty selection,
    /// an empty store or an unknown column.
    pub fn select_column(&self, column: &str) -> bool {
        let store = self.store.borrow();
        self.dashboard.borrow().select_column(&store, column)
    }

    /// Produce the printable report from the current result.
    ///
    /// With no result, posts one blocking notice and produces nothing.
    pub fn export_report(&self) -> std::result::Result<String, ReportError> {
        let store = self.store.borrow();
        match self.report.generate(&store) {
            Ok(html) => {
                info!(bytes = html.len(), generation = store.generation(), "Report exported");
                Ok(html)
            }
            Err(e) => {
                warn!(error = %e, "Report export failed");
                self.notices.post(Notice::error(e.user_message()).blocking());
                Err(e)
            }
        }
    }

    fn install(&self, result: AnalysisResult) {
        self.store.borrow_mut().set(result);
        let store = self.store.borrow();
        self.dashboard.borrow_mut().render_all(&store);
        info!(generation = store.generation(), "Result installed");
    }
}
