//! Fuzz target for number formatting.
//!
//! Finite values always render with the fixed number of decimals.

#![no_main]

use arbitrary::Arbitrary;
use insight_common::format;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Values {
    metric: f64,
    score: f64,
    count: u64,
    quality: f64,
}

fn decimals(s: &str) -> Option<usize> {
    s.split_once('.').map(|(_, frac)| frac.len())
}

fuzz_target!(|v: Values| {
    if v.metric.is_finite() {
        assert_eq!(decimals(&format::prediction(v.metric)), Some(2));
    }
    if v.score.is_finite() {
        assert_eq!(decimals(&format::model_stat(v.score)), Some(4));
    }
    let grouped = format::thousands(v.count);
    assert_eq!(grouped.replace(',', ""), v.count.to_string());
    let _ = format::percent(v.quality);
});
