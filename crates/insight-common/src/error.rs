//! Error types for Insight.
//!
//! Every failure in the pipeline is terminal at the presentation boundary:
//! it becomes exactly one user-visible notice and the dashboard stays on its
//! previous, valid state. Errors therefore carry:
//! - Stable error codes for machine parsing
//! - A category used to decide how the failure is surfaced
//! - A single human-facing message ([`Error::user_message`])

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Insight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Input rejected before any network call.
    Input,
    /// The remote analysis service failed or answered badly.
    Service,
    /// An operation needed a result but none is installed.
    State,
    /// I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Service => write!(f, "service"),
            ErrorCategory::State => write!(f, "state"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for Insight.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (10-19)
    #[error("no file selected")]
    NoFileSelected,

    #[error("unsupported file type: {name}")]
    UnsupportedFileType { name: String },

    #[error("invalid CSV input: {0}")]
    InvalidCsv(String),

    // Service errors (20-29)
    #[error("analysis service unavailable at {url}: {reason}")]
    ServiceUnavailable { url: String, reason: String },

    #[error("analysis service returned status {status}: {detail}")]
    ServiceStatus { status: u16, detail: String },

    #[error("invalid analysis response: {0}")]
    InvalidResponse(String),

    // State errors (30-39)
    #[error("no analysis result available")]
    NoResult,

    #[error("an analysis request is already in flight")]
    AnalysisInFlight,

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Input errors
    /// - 20-29: Service errors
    /// - 30-39: State errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::NoFileSelected => 10,
            Error::UnsupportedFileType { .. } => 11,
            Error::InvalidCsv(_) => 12,
            Error::ServiceUnavailable { .. } => 20,
            Error::ServiceStatus { .. } => 21,
            Error::InvalidResponse(_) => 22,
            Error::NoResult => 30,
            Error::AnalysisInFlight => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            10..=19 => ErrorCategory::Input,
            20..=29 => ErrorCategory::Service,
            30..=39 => ErrorCategory::State,
            _ => ErrorCategory::Io,
        }
    }

    /// The single message shown to the user for this failure.
    ///
    /// Service failures collapse into one generic message; the detail goes
    /// to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            Error::NoFileSelected => "Please select a file first".to_string(),
            Error::UnsupportedFileType { .. } => "Please upload a CSV file".to_string(),
            Error::InvalidCsv(_) => "The selected file could not be read as CSV".to_string(),
            Error::ServiceUnavailable { .. }
            | Error::ServiceStatus { .. }
            | Error::InvalidResponse(_) => {
                "Error analyzing data. Make sure the analysis service is running.".to_string()
            }
            Error::NoResult => "No data available. Please analyze data first.".to_string(),
            Error::AnalysisInFlight => "An analysis is already running".to_string(),
            Error::Io(_) | Error::Json(_) => "An internal error occurred".to_string(),
        }
    }
}
