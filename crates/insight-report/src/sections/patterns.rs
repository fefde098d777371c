//! Insights section data.

use insight_common::Pattern;
use serde::Serialize;

/// Detected patterns, in service order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternsSection {
    pub patterns: Vec<Pattern>,
}

impl PatternsSection {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
