//! Single-slot store for the active analysis result.

use crate::schema::AnalysisResult;
use std::rc::Rc;
use tracing::debug;

/// Holds the currently active [`AnalysisResult`], if any.
///
/// `set` is the only write path and has no side effects: callers trigger
/// the presenters themselves afterwards. Readers get a shared snapshot, so
/// a replaced result is dropped once the last reader lets go of it.
#[derive(Debug, Default)]
pub struct ResultsStore {
    current: Option<Rc<AnalysisResult>>,
    generation: u64,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current result unconditionally.
    pub fn set(&mut self, result: AnalysisResult) {
        self.generation += 1;
        debug!(
            generation = self.generation,
            columns = result.statistics.len(),
            "Installed analysis result"
        );
        self.current = Some(Rc::new(result));
    }

    /// The current result, or `None` before the first analysis completes.
    pub fn get(&self) -> Option<Rc<AnalysisResult>> {
        self.current.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Number of results installed so far; identifies the current snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
