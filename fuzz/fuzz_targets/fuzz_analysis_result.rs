//! Fuzz target for analysis service responses.
//!
//! Any body that parses as a result must render into a report without
//! panicking, and the report must stay free of script.

#![no_main]

use insight_common::AnalysisResult;
use insight_report::ReportGenerator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(result) = serde_json::from_slice::<AnalysisResult>(data) else {
        return;
    };
    let _ = result.schema_violations();
    if let Ok(html) = ReportGenerator::default_config().generate_from_result(&result) {
        assert!(!html.contains("<script"));
    }
});
