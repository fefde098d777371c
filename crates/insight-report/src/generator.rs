//! Report generator implementation.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::sections::*;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use insight_common::chart::render_svg;
use insight_common::markup::{self, html_escape};
use insight_common::{AnalysisResult, ChartSpec, ResultsStore};
use serde::Serialize;
use tracing::{debug, info};

const DEFAULT_TITLE: &str = "Data Analysis Report";

/// Complete report data structure.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Report configuration.
    pub config: ReportConfig,
    /// Generator version.
    pub generator_version: String,
    /// Executive summary section.
    pub summary: Option<SummarySection>,
    /// Statistical summary section.
    pub statistics: Option<StatisticsSection>,
    /// Insights section.
    pub patterns: Option<PatternsSection>,
    /// Model performance and forecast section.
    pub predictions: Option<PredictionsSection>,
}

impl ReportData {
    /// Derive every enabled section from a result.
    pub fn from_result(result: &AnalysisResult, config: &ReportConfig) -> Self {
        let sections = &config.sections;
        Self {
            config: config.clone(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: sections
                .summary
                .then(|| SummarySection::from_summary(&result.summary)),
            statistics: sections
                .statistics
                .then(|| StatisticsSection::from_result(result, sections.charts)),
            patterns: sections
                .patterns
                .then(|| PatternsSection::new(result.patterns.clone())),
            predictions: (sections.predictions || sections.forecast).then(|| {
                PredictionsSection::from_predictions(&result.predictions, sections.charts)
            }),
        }
    }

    /// Get the report title.
    pub fn title(&self) -> String {
        self.config
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }
}

/// Report generator.
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    /// Create a new report generator with configuration.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate the report for the store's current result.
    ///
    /// Reads the store once. Fails without producing a document when no
    /// result is installed.
    pub fn generate(&self, store: &ResultsStore) -> Result<String> {
        let result = store.get().ok_or_else(|| {
            ReportError::MissingData("no analysis result to export".to_string())
        })?;
        debug!(generation = store.generation(), "Generating report from store");
        self.generate_from_result(&result)
    }

    /// Generate the report for a specific result.
    pub fn generate_from_result(&self, result: &AnalysisResult) -> Result<String> {
        self.config.validate().map_err(ReportError::InvalidConfig)?;
        let data = ReportData::from_result(result, &self.config);
        self.render_html(&data)
    }

    /// Generate the report from the service's JSON payload.
    pub fn generate_from_json(&self, json: &str) -> Result<String> {
        let result: AnalysisResult = serde_json::from_str(json)?;
        self.generate_from_result(&result)
    }

    fn render_html(&self, data: &ReportData) -> Result<String> {
        let html = self.generate_html(data);

        let output = if self.config.minify {
            let cfg = minify_html::Cfg {
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg))
                .map_err(|e| ReportError::RenderError(e.to_string()))?
        } else {
            html
        };

        info!(
            bytes = output.len(),
            title = %data.title(),
            "Report generated"
        );

        Ok(output)
    }

    fn generate_html(&self, data: &ReportData) -> String {
        let title = data.title();
        let generated = self
            .config
            .generated_at
            .map(|at| {
                format!(
                    r#"<p class="meta">Generated: {}</p>"#,
                    at.format("%Y-%m-%d %H:%M UTC")
                )
            })
            .unwrap_or_default();

        format!(
            r##"<!DOCTYPE html>
<html lang="en"{theme_attr}>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="insight-report {version}">
    <meta name="robots" content="noindex, nofollow">
    <style>
{styles}
    </style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        {generated}
    </header>
    <main>
{sections}
    </main>
    <footer>Insight Report v{version} | schema {schema}</footer>
</body>
</html>"##,
            theme_attr = theme_attribute(self.config.theme.css_class()),
            title = html_escape(&title),
            version = env!("CARGO_PKG_VERSION"),
            styles = self.styles(),
            generated = generated,
            sections = self.generate_sections(data),
            schema = html_escape(&self.config.schema_version),
        )
    }

    fn styles(&self) -> String {
        let mut css = String::from(BASE_STYLES);
        if self.config.print_styles {
            css.push_str(PRINT_STYLES);
        }
        css
    }

    fn generate_sections(&self, data: &ReportData) -> String {
        let mut contents = Vec::new();
        let sections = &self.config.sections;

        if let Some(ref summary) = data.summary {
            contents.push(section("Executive Summary", &markup::tiles(&summary.tiles)));
        }
        if let Some(ref statistics) = data.statistics {
            let mut body = markup::statistics_table(&statistics.table);
            if let Some(ref spec) = statistics.means_chart {
                body.push_str(&self.chart_image(spec));
            }
            contents.push(section("Statistical Summary", &body));
        }
        if let Some(ref patterns) = data.patterns {
            contents.push(section(
                "AI-Generated Insights",
                &markup::pattern_cards(&patterns.patterns),
            ));
        }
        if let Some(ref predictions) = data.predictions {
            if sections.predictions {
                contents.push(section(
                    "Prediction Model Performance",
                    &markup::model_performance(&predictions.view),
                ));
            }
            if sections.forecast {
                let mut body = markup::prediction_list(&predictions.view);
                if let Some(ref spec) = predictions.trend_chart {
                    body.push_str(&self.chart_image(spec));
                }
                contents.push(section("Future Trend Forecast", &body));
            }
        }

        contents.join("\n")
    }

    /// Static chart image as an embedded SVG `data:` URI.
    fn chart_image(&self, spec: &ChartSpec) -> String {
        let svg = render_svg(spec, self.config.charts.width, self.config.charts.height);
        format!(
            r#"
<figure class="chart"><img alt="{alt}" width="{w}" height="{h}" src="data:image/svg+xml;base64,{data}"></figure>"#,
            alt = html_escape(&spec.title),
            w = self.config.charts.width,
            h = self.config.charts.height,
            data = STANDARD.encode(svg.as_bytes()),
        )
    }
}

fn section(heading: &str, body: &str) -> String {
    format!(
        r#"<section class="section">
    <h2>{}</h2>
{}
</section>"#,
        html_escape(heading),
        body
    )
}

const BASE_STYLES: &str = r#"        :root {
            --bg-page: #f7fafc;
            --bg-card: #ffffff;
            --text-primary: #2d3748;
            --text-secondary: #718096;
            --border-color: #e2e8f0;
            --accent-color: #4c51bf;
        }
        .dark {
            --bg-page: #111827;
            --bg-card: #1f2937;
            --text-primary: #f9fafb;
            --text-secondary: #9ca3af;
            --border-color: #374151;
            --accent-color: #a5b4fc;
        }
        @media (prefers-color-scheme: dark) {
            :root:not(.light) {
                --bg-page: #111827;
                --bg-card: #1f2937;
                --text-primary: #f9fafb;
                --text-secondary: #9ca3af;
                --border-color: #374151;
                --accent-color: #a5b4fc;
            }
        }
        body {
            font-family: Arial, sans-serif;
            line-height: 1.8;
            color: var(--text-primary);
            background: var(--bg-page);
            margin: 0;
            padding: 30px;
        }
        header h1 { margin: 0 0 4px 0; }
        .meta, footer { color: var(--text-secondary); font-size: 12px; }
        footer { margin-top: 24px; text-align: center; }
        .section {
            margin-bottom: 40px;
            page-break-inside: avoid;
            background: var(--bg-card);
            padding: 25px;
            border-radius: 12px;
            border: 1px solid var(--border-color);
        }
        .section h2 {
            color: var(--accent-color);
            border-bottom: 3px solid #9f7aea;
            padding-bottom: 12px;
            font-size: 22px;
            text-transform: uppercase;
            letter-spacing: 1px;
        }
        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
        }
        .stat-box {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 20px;
            border-radius: 10px;
            text-align: center;
        }
        .stat-value { display: block; font-size: 28px; font-weight: bold; }
        .stat-label { font-size: 12px; text-transform: uppercase; letter-spacing: 1px; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; font-size: 14px; }
        th, td { border: 1px solid var(--border-color); padding: 12px 15px; text-align: left; }
        th { background: #4c51bf; color: white; text-transform: uppercase; font-size: 13px; }
        tr:nth-child(even) { background: rgba(0, 0, 0, 0.03); }
        .insight-card {
            background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%);
            color: white;
            padding: 18px;
            border-radius: 10px;
            margin: 12px 0;
        }
        .insight-card h4 { margin: 0 0 10px 0; font-size: 16px; }
        .insight-card p { margin: 5px 0; font-size: 14px; }
        .insight-card strong, .model-performance strong { color: #ffd93d; }
        .model-performance {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 20px;
            border-radius: 10px;
        }
        .prediction-item {
            display: flex;
            justify-content: space-between;
            padding: 15px;
            background: linear-gradient(135deg, #a8edea 0%, #fed6e3 100%);
            color: #2d3748;
            margin: 8px 0;
            border-radius: 8px;
        }
        .prediction-item strong { color: #e53e3e; font-size: 18px; }
        .chart { margin: 20px 0 0 0; text-align: center; }
        .chart img { max-width: 100%; height: auto; }
"#;

const PRINT_STYLES: &str = r#"        @media print {
            body { margin: 0; padding: 20px; background: white !important; }
            .section { box-shadow: none !important; border: 1px solid #ccc !important; margin-bottom: 30px; }
            .stat-box, .insight-card, .prediction-item, .model-performance { border: 1px solid #999 !important; }
        }
"#;

/// `class` attribute for the root element; omitted when there is no class.
fn theme_attribute(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, class)
    }
}
