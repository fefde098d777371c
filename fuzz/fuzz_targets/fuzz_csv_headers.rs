//! Fuzz target for CSV header discovery on uploads.

#![no_main]

use insight_core::UploadedFile;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(file) = UploadedFile::accept("upload.csv", data) else {
        return;
    };
    if let Ok(options) = file.target_column_options() {
        assert!(options[0].0.is_empty());
    }
});
