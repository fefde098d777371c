//! Report section data structures.

pub mod patterns;
pub mod predictions;
pub mod statistics;
pub mod summary;

pub use patterns::PatternsSection;
pub use predictions::PredictionsSection;
pub use statistics::StatisticsSection;
pub use summary::SummarySection;
