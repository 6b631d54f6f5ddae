//! Bar-chart layout engine.
//!
//! Pure math mirrored by the embedded JS runtime: linear widths relative to
//! the maximum value, a small visibility floor for positive values, and a
//! defined fallback when no positive maximum exists. [`ChartState`] models
//! the per-container render-once guarantee so the runtime's idempotence
//! rules can be unit-tested without a DOM.

use crate::model::ChartRow;

/// Smallest fill width (in percent) granted to a bar whose value is
/// positive, so tiny values stay visible. Never applied to values <= 0 and
/// never reorders bars.
pub const MIN_VISIBLE_PERCENT: f64 = 1.5;

/// Geometry of one rendered bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub label: String,
    pub value: f64,
    /// Final fill width in percent, floor applied.
    pub width_percent: f64,
    /// Locale-grouped display value (e.g. `1,234.56`).
    pub display_value: String,
}

impl BarLayout {
    /// Tooltip text: "label — formatted value".
    pub fn tooltip(&self) -> String {
        format!("{} \u{2014} {}", self.label, self.display_value)
    }
}

/// Geometry of a whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// `max(0, max(values))`; a value <= 0 here means every width is 0.
    pub max_value: f64,
    pub bars: Vec<BarLayout>,
}

/// Compute the layout for a list of parsed rows.
///
/// Width formula: `value / max_value * 100` when `max_value > 0`, else 0.
/// Positive values are raised to at least [`MIN_VISIBLE_PERCENT`]; values
/// <= 0 always get width 0. A non-positive maximum is not an error: labels
/// and display values are still produced, with every width at 0.
pub fn layout(rows: &[ChartRow]) -> ChartLayout {
    let max_value = rows.iter().map(|r| r.value).fold(0.0_f64, f64::max);

    let bars = rows
        .iter()
        .map(|row| {
            let width = if max_value > 0.0 && row.value > 0.0 {
                (row.value / max_value * 100.0).max(MIN_VISIBLE_PERCENT)
            } else {
                0.0
            };
            BarLayout {
                label: row.label.clone(),
                value: row.value,
                width_percent: width,
                display_value: format_grouped(row.value),
            }
        })
        .collect();

    ChartLayout { max_value, bars }
}

/// Format a value with thousands separators, keeping any fractional part
/// (`1234.56` -> `"1,234.56"`, `-5000` -> `"-5,000"`).
pub fn format_grouped(value: f64) -> String {
    let text = value.to_string();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Render-once wrapper for a chart container.
///
/// The first [`render`](Self::render) returns the layout and marks the state
/// rendered; later calls return `None`. This mirrors the `dataset.rendered`
/// marker used by the embedded runtime.
#[derive(Debug, Clone)]
pub struct ChartState {
    rows: Vec<ChartRow>,
    rendered: bool,
}

impl ChartState {
    pub fn new(rows: Vec<ChartRow>) -> Self {
        Self {
            rows,
            rendered: false,
        }
    }

    /// Compute the layout, once. A second call is a no-op returning `None`.
    pub fn render(&mut self) -> Option<ChartLayout> {
        if self.rendered {
            return None;
        }
        let layout = layout(&self.rows);
        self.rendered = true;
        Some(layout)
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}
