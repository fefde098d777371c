//! Error types for report generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur during report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Rendering produced unusable output.
    #[error("render error: {0}")]
    RenderError(String),

    /// Missing required data.
    #[error("missing required data: {0}")]
    MissingData(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReportError {
    /// Message shown to the user when an export fails.
    pub fn user_message(&self) -> String {
        match self {
            ReportError::MissingData(_) => insight_common::Error::NoResult.user_message(),
            other => format!("Report could not be generated: {}", other),
        }
    }
}
