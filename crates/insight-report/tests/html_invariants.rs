//! HTML report invariant tests.
//!
//! These tests validate the generated HTML structure without requiring a browser:
//! - Required sections present and in order
//! - Document is self-contained: no script, no external URLs
//! - Statistics table shape matches the result
//! - Output is reproducible
//! - Untrusted strings from the result are escaped

use indexmap::IndexMap;
use insight_common::demo::sample_result;
use insight_common::{AnalysisResult, MetricValue, Pattern, ResultsStore, StatRecord};
use insight_report::{ReportConfig, ReportGenerator, ReportTheme};
use regex::Regex;

fn generate(result: AnalysisResult, config: ReportConfig) -> String {
    let mut store = ResultsStore::new();
    store.set(result);
    ReportGenerator::new(config)
        .generate(&store)
        .expect("report generates")
}

fn sample_html() -> String {
    generate(sample_result(), ReportConfig::default())
}

// ============================================================================
// HTML Structure Tests
// ============================================================================

mod structure {
    use super::*;

    #[test]
    fn test_html_doctype_present() {
        assert!(
            sample_html().starts_with("<!DOCTYPE html>"),
            "HTML must start with DOCTYPE declaration"
        );
    }

    #[test]
    fn test_html_has_required_meta_tags() {
        let html = sample_html();
        assert!(html.contains(r#"charset="UTF-8""#));
        assert!(html.contains(r#"name="viewport""#));
        assert!(html.contains(r#"name="generator""#));
        assert!(html.contains(r#"name="robots" content="noindex, nofollow""#));
    }

    #[test]
    fn test_sections_in_order() {
        let html = sample_html();
        let headings = Regex::new(r"<h2>([^<]+)</h2>").expect("valid regex");
        let found: Vec<_> = headings
            .captures_iter(&html)
            .map(|c| c[1].to_string())
            .collect();
        assert_eq!(
            found,
            vec![
                "Executive Summary",
                "Statistical Summary",
                "AI-Generated Insights",
                "Prediction Model Performance",
                "Future Trend Forecast",
            ]
        );
    }

    #[test]
    fn test_theme_class_applied() {
        let html = generate(
            sample_result(),
            ReportConfig::default().with_theme(ReportTheme::Dark),
        );
        assert!(html.contains(r#"<html lang="en" class="dark">"#));
    }

    #[test]
    fn test_auto_theme_omits_class_attribute() {
        let html = sample_html();
        assert!(html.contains("<html lang=\"en\">\n<head>"));
        assert!(!html.contains(r#"class="""#));
    }
}

// ============================================================================
// Self-containment
// ============================================================================

mod self_contained {
    use super::*;

    #[test]
    fn test_no_script_elements() {
        let html = sample_html();
        assert!(!html.to_lowercase().contains("<script"));
        let handlers = Regex::new(r#"\son[a-z]+="#).expect("valid regex");
        assert!(!handlers.is_match(&html), "no inline event handlers");
    }

    #[test]
    fn test_no_external_urls() {
        let html = sample_html();
        let url = Regex::new(r#"(?i)(src|href)="(https?:)?//"#).expect("valid regex");
        assert!(!url.is_match(&html), "no external resources");
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
    }

    #[test]
    fn test_styles_embedded() {
        let html = sample_html();
        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn test_print_styles_optional() {
        let mut config = ReportConfig::default();
        config.print_styles = false;
        let html = generate(sample_result(), config);
        assert!(!html.contains("@media print"));
    }

    #[test]
    fn test_chart_images_are_data_uris() {
        let html = sample_html();
        let img = Regex::new(r#"<img [^>]*src="([^"]+)""#).expect("valid regex");
        let sources: Vec<_> = img.captures_iter(&html).map(|c| c[1].to_string()).collect();
        assert_eq!(sources.len(), 2);
        assert!(sources
            .iter()
            .all(|s| s.starts_with("data:image/svg+xml;base64,")));
    }
}

// ============================================================================
// Derived content
// ============================================================================

mod content {
    use super::*;

    #[test]
    fn test_statistics_table_shape() {
        let html = sample_html();
        let header = Regex::new(r"<thead><tr>(.*?)</tr></thead>").expect("valid regex");
        let header_cells = header.captures(&html).expect("table header")[1]
            .matches("<th>")
            .count();
        // Metric column + one per statistics key
        assert_eq!(header_cells, 1 + 4);

        let body = Regex::new(r"<tbody>(.*?)</tbody>").expect("valid regex");
        let rows = body.captures(&html).expect("table body")[1]
            .matches("<tr>")
            .count();
        assert_eq!(rows, 4);
    }

    #[test]
    fn test_empty_statistics_renders_header_only() {
        let mut result = sample_result();
        result.statistics = IndexMap::new();
        let html = generate(result, ReportConfig::default());
        assert!(html.contains("<thead><tr><th>Metric</th></tr></thead>"));
        assert!(html.contains("<tr><td>MEAN</td></tr>"));
        // No numeric column, so no means chart
        assert_eq!(html.matches("data:image/svg+xml").count(), 1);
    }

    #[test]
    fn test_metric_gaps_render_marker() {
        let mut result = sample_result();
        result.statistics.insert(
            "Region".to_string(),
            StatRecord::from_pairs([
                ("count", MetricValue::Number(5000.0)),
                ("top", MetricValue::Text("North".into())),
            ]),
        );
        let html = generate(result, ReportConfig::default());
        assert!(html.contains("<th>Region</th>"));
        assert!(html.contains("<td>4.80</td><td>N/A</td></tr>"));
    }

    #[test]
    fn test_forecast_formatting() {
        let html = sample_html();
        let items = Regex::new(r"<span>Prediction (\d+)</span><strong>([^<]+)</strong>")
            .expect("valid regex");
        let found: Vec<(usize, String)> = items
            .captures_iter(&html)
            .map(|c| (c[1].parse().unwrap(), c[2].to_string()))
            .collect();
        assert_eq!(found.len(), 10);
        assert_eq!(found[0], (1, "12800.00".to_string()));
        assert_eq!(found[9], (10, "16000.00".to_string()));
        let two_decimals = Regex::new(r"^-?\d+\.\d{2}$").expect("valid regex");
        assert!(found.iter().all(|(_, v)| two_decimals.is_match(v)));
    }

    #[test]
    fn test_model_stats_have_four_decimals() {
        let html = sample_html();
        assert!(html.contains("<strong>R² Score:</strong> 0.9650"));
        assert!(html.contains("<strong>Mean Squared Error:</strong> 850.2500"));
    }

    #[test]
    fn test_untrusted_strings_escaped() {
        let mut result = sample_result();
        result.patterns.push(Pattern {
            kind: "<script>alert(1)</script>".into(),
            description: "a < b && c > d".into(),
            value: None,
        });
        result.predictions.model_used = "\"quoted\" model".into();
        let html = generate(result, ReportConfig::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&quot;quoted&quot; model"));
    }
}

// ============================================================================
// Determinism
// ============================================================================

mod determinism {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_byte_identical_without_timestamp() {
        assert_eq!(sample_html(), sample_html());
        assert!(!sample_html().contains("Generated:"));
    }

    #[test]
    fn test_caller_supplied_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 14, 30, 0).unwrap();
        let config = ReportConfig::default().with_generated_at(at);
        let a = generate(sample_result(), config.clone());
        let b = generate(sample_result(), config);
        assert_eq!(a, b);
        assert!(a.contains("Generated: 2026-01-15 14:30 UTC"));
    }

    #[test]
    fn test_minified_output_keeps_content() {
        let html = generate(sample_result(), ReportConfig::default().with_minify(true));
        assert!(html.len() < sample_html().len());
        assert!(html.contains("12500.50"));
        assert!(html.contains("Future Trend Forecast"));
    }
}
