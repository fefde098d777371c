//! Display formatting shared by the dashboard and the exported report.

use crate::schema::MetricValue;

/// Shown wherever a metric is absent or not a number.
pub const NON_NUMERIC_MARKER: &str = "N/A";

/// Digits used for per-column metrics and forecast values.
pub const METRIC_DIGITS: usize = 2;

/// Digits used for model score and error.
pub const MODEL_DIGITS: usize = 4;

/// Fixed-precision rendering. Values that round to zero never carry a sign.
pub fn fixed(value: f64, digits: usize) -> String {
    let out = format!("{:.*}", digits, value);
    match out.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => out,
    }
}

/// A statistic cell: numbers to two decimals, text verbatim, null as marker.
pub fn metric(value: &MetricValue) -> String {
    match value {
        MetricValue::Number(v) => fixed(*v, METRIC_DIGITS),
        MetricValue::Text(s) => s.clone(),
        MetricValue::Null => NON_NUMERIC_MARKER.to_string(),
    }
}

/// Like [`metric`], rendering a missing metric as the marker.
pub fn metric_or_marker(value: Option<&MetricValue>) -> String {
    value
        .map(metric)
        .unwrap_or_else(|| NON_NUMERIC_MARKER.to_string())
}

/// Model score or mean squared error.
pub fn model_stat(value: f64) -> String {
    fixed(value, MODEL_DIGITS)
}

/// One forecast value.
pub fn prediction(value: f64) -> String {
    fixed(value, METRIC_DIGITS)
}

/// Integer with comma thousands separators.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage rounded to one decimal, trailing `.0` dropped.
pub fn percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}%", rounded)
}

/// Upper-case row label for a metric name.
pub fn metric_label(metric: &str) -> String {
    metric.to_uppercase()
}
