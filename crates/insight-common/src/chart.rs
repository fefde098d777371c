//! Chart specifications and static SVG rendering.
//!
//! A [`ChartSpec`] is what a chart widget is built from: kind, labels,
//! values and display options. The live dashboard hands specs to its chart
//! backend; the exported report renders the same specs to static SVG.

use crate::format;
use crate::markup::html_escape;
use crate::schema::{Predictions, StatRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Named chart location. Each slot holds at most one live widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    /// Column means comparison.
    Bar,
    /// Forecast trend.
    Line,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 2] = [ChartSlot::Bar, ChartSlot::Line];

    pub fn name(&self) -> &'static str {
        match self {
            ChartSlot::Bar => "bar",
            ChartSlot::Line => "line",
        }
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Line / bar border color.
    pub stroke: String,
    /// Bar or area fill color.
    pub fill: String,
    /// Fill the area under a line.
    pub area: bool,
    /// Curve tension for lines; 0 draws straight segments.
    pub tension: f64,
    /// Start the value axis at zero.
    pub begin_at_zero: bool,
    pub show_legend: bool,
}

/// Everything needed to build one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Dataset label.
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: ChartStyle,
}

impl ChartSpec {
    /// Means of every numeric column, in column order.
    pub fn column_means(statistics: &IndexMap<String, StatRecord>) -> Self {
        let (labels, values) = statistics
            .iter()
            .filter_map(|(name, record)| record.mean().map(|mean| (name.clone(), mean)))
            .unzip();
        Self {
            kind: ChartKind::Bar,
            title: "Column Means Comparison".to_string(),
            series_label: "Average Value".to_string(),
            labels,
            values,
            style: ChartStyle {
                stroke: "#818cf8".to_string(),
                fill: "rgba(129, 140, 248, 0.6)".to_string(),
                area: false,
                tension: 0.0,
                begin_at_zero: true,
                show_legend: false,
            },
        }
    }

    /// Forecast trend: `Step 1..N` against the predictions, unreordered.
    pub fn forecast(predictions: &Predictions) -> Self {
        let values = predictions.future_predictions.clone();
        let labels = (1..=values.len()).map(|i| format!("Step {}", i)).collect();
        Self {
            kind: ChartKind::Line,
            title: "Future Trend Forecast".to_string(),
            series_label: "Predicted Trend".to_string(),
            labels,
            values,
            style: ChartStyle {
                stroke: "#c084fc".to_string(),
                fill: "rgba(192, 132, 252, 0.2)".to_string(),
                area: true,
                tension: 0.4,
                begin_at_zero: false,
                show_legend: true,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 44.0;
const Y_TICKS: usize = 5;

/// Render a spec to a standalone SVG document.
///
/// Output depends only on the spec and size. An empty spec still renders
/// the frame with a "No data" notice.
pub fn render_svg(spec: &ChartSpec, width: u32, height: u32) -> String {
    let (w, h) = (width as f64, height as f64);
    let plot_w = (w - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_h = (h - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let bottom = MARGIN_TOP + plot_h;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{title}">"#,
        w = width,
        h = height,
        title = html_escape(&spec.title),
    );
    let _ = writeln!(
        svg,
        r##"  <rect x="0" y="0" width="{}" height="{}" fill="#ffffff"/>"##,
        width, height
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{:.1}" y="24" text-anchor="middle" font-family="sans-serif" font-size="15" font-weight="bold" fill="#2d3748">{}</text>"##,
        w / 2.0,
        html_escape(&spec.title)
    );
    if spec.style.show_legend {
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="38" text-anchor="end" font-family="sans-serif" font-size="11" fill="{}">{}</text>"##,
            w - MARGIN_RIGHT,
            html_escape(&spec.style.stroke),
            html_escape(&spec.series_label)
        );
    }
    // Axes
    let _ = writeln!(
        svg,
        r##"  <line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}" stroke="#cbd5e0"/>"##,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = bottom
    );
    let _ = writeln!(
        svg,
        r##"  <line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="#cbd5e0"/>"##,
        l = MARGIN_LEFT,
        r = MARGIN_LEFT + plot_w,
        b = bottom
    );

    if spec.values.is_empty() {
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="13" fill="#a0aec0">No data</text>"##,
            MARGIN_LEFT + plot_w / 2.0,
            MARGIN_TOP + plot_h / 2.0
        );
        svg.push_str("</svg>");
        return svg;
    }

    let (lo, hi) = value_range(&spec.values, spec.style.begin_at_zero);
    let y_of = |v: f64| bottom - (v - lo) / (hi - lo) * plot_h;

    for i in 0..=Y_TICKS {
        let v = lo + (hi - lo) * i as f64 / Y_TICKS as f64;
        let y = y_of(v);
        let _ = writeln!(
            svg,
            r##"  <line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#edf2f7"/>"##,
            MARGIN_LEFT,
            MARGIN_LEFT + plot_w,
            y = y
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="end" font-family="sans-serif" font-size="10" fill="#718096">{}</text>"##,
            MARGIN_LEFT - 6.0,
            y + 3.0,
            tick_label(v)
        );
    }

    let band = plot_w / spec.values.len() as f64;
    for (i, label) in spec.labels.iter().enumerate() {
        let _ = writeln!(
            svg,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-family="sans-serif" font-size="10" fill="#4a5568">{}</text>"##,
            MARGIN_LEFT + band * (i as f64 + 0.5),
            bottom + 16.0,
            html_escape(label)
        );
    }

    match spec.kind {
        ChartKind::Bar => {
            let bar_w = band * 0.6;
            let zero_y = y_of(0.0_f64.clamp(lo, hi));
            for (i, &v) in spec.values.iter().enumerate() {
                let x = MARGIN_LEFT + band * i as f64 + (band - bar_w) / 2.0;
                let y = y_of(v);
                let _ = writeln!(
                    svg,
                    r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="1"/>"#,
                    x,
                    y.min(zero_y),
                    bar_w,
                    (zero_y - y).abs(),
                    html_escape(&spec.style.fill),
                    html_escape(&spec.style.stroke)
                );
            }
        }
        ChartKind::Line => {
            let points: Vec<(f64, f64)> = spec
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| (MARGIN_LEFT + band * (i as f64 + 0.5), y_of(v)))
                .collect();
            let path = line_path(&points, spec.style.tension);
            if spec.style.area {
                let first = points[0];
                let last = points[points.len() - 1];
                let _ = writeln!(
                    svg,
                    r#"  <path d="{} L{:.1},{:.1} L{:.1},{:.1} Z" fill="{}" stroke="none"/>"#,
                    path,
                    last.0,
                    bottom,
                    first.0,
                    bottom,
                    html_escape(&spec.style.fill)
                );
            }
            let _ = writeln!(
                svg,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                path,
                html_escape(&spec.style.stroke)
            );
            for (x, y) in &points {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
                    x,
                    y,
                    html_escape(&spec.style.stroke)
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn value_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if begin_at_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    (lo, hi)
}

fn tick_label(v: f64) -> String {
    if v.abs() >= 100.0 {
        format::fixed(v, 0)
    } else {
        format::fixed(v, 2)
    }
}

/// Straight or cubic-smoothed path through the points.
fn line_path(points: &[(f64, f64)], tension: f64) -> String {
    let mut d = format!("M{:.1},{:.1}", points[0].0, points[0].1);
    if tension <= 0.0 {
        for (x, y) in &points[1..] {
            let _ = write!(d, " L{:.1},{:.1}", x, y);
        }
        return d;
    }
    let n = points.len();
    for i in 0..n.saturating_sub(1) {
        let prev = points[i.saturating_sub(1)];
        let cur = points[i];
        let next = points[i + 1];
        let after = points[(i + 2).min(n - 1)];
        let c1 = (
            cur.0 + (next.0 - prev.0) * tension / 4.0,
            cur.1 + (next.1 - prev.1) * tension / 4.0,
        );
        let c2 = (
            next.0 - (after.0 - cur.0) * tension / 4.0,
            next.1 - (after.1 - cur.1) * tension / 4.0,
        );
        let _ = write!(
            d,
            " C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
            c1.0, c1.1, c2.0, c2.1, next.0, next.1
        );
    }
    d
}
