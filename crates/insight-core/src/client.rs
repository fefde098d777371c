//! Analysis service clients.
//!
//! The remote service computes the [`AnalysisResult`]; this side only sends
//! the file and the two plain-string parameters, then awaits the response.
//! [`DemoService`] stands in for the service with a canned payload.

use crate::config::ClientConfig;
use crate::intake::UploadedFile;
use crate::logging::truncate_for_log;
use async_trait::async_trait;
use insight_common::demo::sample_result;
use insight_common::{AnalysisResult, Error, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const MODEL_LINEAR: &str = "linear";
pub const MODEL_FOREST: &str = "forest";

/// One analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub file: UploadedFile,
    /// Empty means the service picks the target.
    pub target_column: String,
    pub model_type: String,
}

impl AnalysisRequest {
    pub fn new(file: UploadedFile) -> Self {
        Self {
            file,
            target_column: String::new(),
            model_type: MODEL_LINEAR.to_string(),
        }
    }

    pub fn with_target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = column.into();
        self
    }

    /// Set the model selector. An empty value keeps the default.
    pub fn with_model_type(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.is_empty() {
            self.model_type = model;
        }
        self
    }
}

/// Something that turns an upload into an [`AnalysisResult`].
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;
}

/// Service liveness as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy") || self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the analysis service.
pub struct HttpAnalysisClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpAnalysisClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::ServiceUnavailable {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe the service.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint("health");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| unavailable(&url, e))?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let url = self.config.endpoint("analyze");
        let file = reqwest::multipart::Part::bytes(request.file.bytes().to_vec())
            .file_name(request.file.name().to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("target_column", request.target_column.clone())
            .text("model_type", request.model_type.clone());

        debug!(
            url = %url,
            file = request.file.name(),
            size = request.file.size(),
            model_type = %request.model_type,
            "Sending analysis request"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| unavailable(&url, e))?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }

        let result =
            AnalysisResult::from_json(&body).map_err(|e| Error::InvalidResponse(e.to_string()))?;
        for violation in result.schema_violations() {
            warn!(violation = %violation, "Analysis result violates schema invariant");
        }
        info!(
            columns = result.statistics.len(),
            patterns = result.patterns.len(),
            horizon = result.predictions.future_predictions.len(),
            "Analysis response received"
        );
        Ok(result)
    }
}

fn unavailable(url: &str, e: reqwest::Error) -> Error {
    Error::ServiceUnavailable {
        url: url.to_string(),
        reason: e.to_string(),
    }
}

fn status_error(status: u16, body: &str) -> Error {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| truncate_for_log(body.trim(), 200));
    Error::ServiceStatus { status, detail }
}

/// Canned service delivering a fixed result after a simulated latency.
#[derive(Debug, Clone)]
pub struct DemoService {
    latency: Duration,
    result: AnalysisResult,
}

impl DemoService {
    /// The sample enterprise dataset.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            result: sample_result(),
        }
    }

    pub fn with_result(mut self, result: AnalysisResult) -> Self {
        self.result = result;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Wait out the latency, then hand over the payload.
    pub async fn load(&self) -> AnalysisResult {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.result.clone()
    }
}

#[async_trait]
impl AnalysisService for DemoService {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult> {
        Ok(self.load().await)
    }
}
