//! Report configuration types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTheme {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
    /// Auto-detect from system preference.
    #[default]
    Auto,
}

impl ReportTheme {
    /// Get the CSS class for this theme.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReportTheme::Light => "light",
            ReportTheme::Dark => "dark",
            ReportTheme::Auto => "",
        }
    }
}

/// Report section visibility configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSections {
    /// Executive summary tiles.
    #[serde(default = "default_true")]
    pub summary: bool,
    /// Statistics table.
    #[serde(default = "default_true")]
    pub statistics: bool,
    /// Detected patterns.
    #[serde(default = "default_true")]
    pub patterns: bool,
    /// Model performance block.
    #[serde(default = "default_true")]
    pub predictions: bool,
    /// Future predictions list.
    #[serde(default = "default_true")]
    pub forecast: bool,
    /// Static chart images.
    #[serde(default = "default_true")]
    pub charts: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            summary: true,
            statistics: true,
            patterns: true,
            predictions: true,
            forecast: true,
            charts: true,
        }
    }
}

/// Size of the embedded chart images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartImageConfig {
    #[serde(default = "default_chart_width")]
    pub width: u32,
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

fn default_chart_width() -> u32 {
    720
}

fn default_chart_height() -> u32 {
    320
}

impl Default for ChartImageConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

/// Complete report configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Custom report title.
    pub title: Option<String>,
    /// Color theme.
    #[serde(default)]
    pub theme: ReportTheme,
    /// Section visibility.
    #[serde(default)]
    pub sections: ReportSections,
    /// Chart image size.
    #[serde(default)]
    pub charts: ChartImageConfig,
    /// Include the print stylesheet.
    #[serde(default = "default_true")]
    pub print_styles: bool,
    /// Timestamp printed in the header. Left unset, the document carries no
    /// time and is fully reproducible.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    /// Minify the output HTML.
    #[serde(default)]
    pub minify: bool,
}

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: None,
            theme: ReportTheme::default(),
            sections: ReportSections::default(),
            charts: ChartImageConfig::default(),
            print_styles: true,
            generated_at: None,
            minify: false,
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: ReportTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable the static chart images.
    pub fn with_charts(mut self, enabled: bool) -> Self {
        self.sections.charts = enabled;
        self
    }

    /// Stamp the document with a generation time.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Enable output minification.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), String> {
        let ChartImageConfig { width, height } = self.charts;
        if self.sections.charts && (width < 120 || height < 80) {
            return Err(format!(
                "chart images must be at least 120x80, got {}x{}",
                width, height
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.schema_version, "1.0.0");
        assert_eq!(config.theme, ReportTheme::Auto);
        assert!(config.sections.statistics);
        assert!(config.sections.charts);
        assert!(config.generated_at.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let config = ReportConfig::new()
            .with_title("Quarterly Sales")
            .with_theme(ReportTheme::Dark)
            .with_charts(false)
            .with_generated_at(at);

        assert_eq!(config.title, Some("Quarterly Sales".to_string()));
        assert_eq!(config.theme, ReportTheme::Dark);
        assert!(!config.sections.charts);
        assert_eq!(config.generated_at, Some(at));
    }

    #[test]
    fn test_validate_rejects_tiny_charts() {
        let mut config = ReportConfig::default();
        config.charts.width = 10;
        assert!(config.validate().is_err());
        config.sections.charts = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ReportConfig::from_json(r#"{"title": "T", "sections": {"charts": false}}"#)
            .unwrap();
        assert_eq!(config.title.as_deref(), Some("T"));
        assert!(!config.sections.charts);
        assert!(config.sections.summary);
        assert!(config.print_styles);
        assert_eq!(config.charts.width, 720);
    }

    #[test]
    fn test_config_serialization() {
        let config = ReportConfig::default().with_title("Round trip");
        let json = config.to_json().unwrap();
        let parsed = ReportConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
