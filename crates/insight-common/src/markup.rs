//! HTML fragments rendered from the view derivations.
//!
//! Used verbatim by the dashboard regions and by the exported report.
//! All text coming from a result is escaped here.

use crate::schema::Pattern;
use crate::view::{PredictionView, StatisticsTable, Tile};

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// A grid of value/label tiles.
pub fn tiles(tiles: &[Tile]) -> String {
    let boxes: Vec<String> = tiles
        .iter()
        .map(|t| {
            format!(
                r#"<div class="stat-box"><span class="stat-value">{}</span><span class="stat-label">{}</span></div>"#,
                html_escape(&t.value),
                html_escape(&t.label)
            )
        })
        .collect();
    format!(
        r#"<div class="stats-grid">{}</div>"#,
        boxes.join("\n    ")
    )
}

/// Quality headline card.
pub fn quality_banner(headline: &str) -> String {
    format!(
        r#"<div class="insight-card quality-banner"><h3>{}</h3><p>Based on missing values, duplicates, and consistency.</p></div>"#,
        html_escape(headline)
    )
}

/// Statistics table: header row of columns, one row per metric.
pub fn statistics_table(table: &StatisticsTable) -> String {
    let mut html = String::from(r#"<table class="stats-table"><thead><tr><th>Metric</th>"#);
    for column in &table.columns {
        html.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str(&format!("<tr><td>{}</td>", html_escape(&row.label)));
        for cell in &row.cells {
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// One card per pattern; the value line only when there is a value.
pub fn pattern_cards(patterns: &[Pattern]) -> String {
    patterns
        .iter()
        .map(|p| {
            let value = p
                .display_value()
                .map(|v| format!("<p><strong>Value: {}</strong></p>", html_escape(v)))
                .unwrap_or_default();
            format!(
                r#"<div class="insight-card"><h4>{}</h4><p>{}</p>{}</div>"#,
                html_escape(&p.kind),
                html_escape(&p.description),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Model metadata block.
pub fn model_performance(view: &PredictionView) -> String {
    let message = view
        .message
        .as_deref()
        .map(|m| format!(r#"<p class="model-message">{}</p>"#, html_escape(m)))
        .unwrap_or_default();
    format!(
        r#"<div class="model-performance">
    <p><strong>Target Column:</strong> {target}</p>
    <p><strong>Model Used:</strong> {model}</p>
    <p><strong>R² Score:</strong> {score}</p>
    <p><strong>Mean Squared Error:</strong> {mse}</p>{message}
</div>"#,
        target = html_escape(&view.target_column),
        model = html_escape(&view.model_used),
        score = view.model_score,
        mse = view.mse,
        message = message,
    )
}

/// Numbered forecast list.
pub fn prediction_list(view: &PredictionView) -> String {
    view.items
        .iter()
        .map(|item| {
            format!(
                r#"<div class="prediction-item"><span>{}</span><strong>{}</strong></div>"#,
                html_escape(&item.label),
                html_escape(&item.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<option>` elements for a select control.
pub fn select_options(options: &[(String, String)]) -> String {
    options
        .iter()
        .map(|(value, label)| {
            format!(
                r#"<option value="{}">{}</option>"#,
                html_escape(value),
                html_escape(label)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}
