//! Upload intake.
//!
//! Files are checked before any network call. Only CSV files are accepted;
//! the header row feeds the target-column selector.

use insight_common::{Error, Result};
use tracing::debug;

/// A file the user picked for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Accept a file by name and content. Rejects anything not ending in
    /// `.csv` (case-insensitive).
    pub fn accept(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::NoFileSelected);
        }
        if !name.to_ascii_lowercase().ends_with(".csv") {
            return Err(Error::UnsupportedFileType { name });
        }
        let bytes = bytes.into();
        debug!(file = %name, size = bytes.len(), "Accepted upload");
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Trimmed header names of the CSV. Empty file gives no headers.
    pub fn headers(&self) -> Result<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(self.bytes.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| Error::InvalidCsv(e.to_string()))?;
        Ok(headers
            .iter()
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Options for the target-column selector: `(value, label)`, with the
    /// auto-detect choice (empty value) first.
    pub fn target_column_options(&self) -> Result<Vec<(String, String)>> {
        let headers = self.headers()?;
        Ok(
            std::iter::once((String::new(), "Auto-detect Target".to_string()))
                .chain(headers.into_iter().map(|h| (h.clone(), h)))
                .collect(),
        )
    }
}
