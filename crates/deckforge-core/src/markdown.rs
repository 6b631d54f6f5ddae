//! Slide markdown compilation: headings, bullet lines, and extraction of the
//! `bar`-tagged fenced block that carries chart rows.
//!
//! Chart row parsing is deliberately forgiving: a line that cannot be parsed
//! is dropped with a diagnostic and never aborts the deck.

use tracing::warn;

use crate::model::ChartRow;

/// Structured view of one slide's markdown body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideMarkdown {
    /// Text of the first `#` heading, if any.
    pub title: Option<String>,
    /// Bullet lines (`- ` or `* `), in order, marker stripped.
    pub bullets: Vec<String>,
    /// Raw body of the first ```` ```bar ```` fenced region, if any.
    pub chart_block: Option<String>,
}

/// Compile a slide's markdown body into its structured parts.
///
/// Only the first heading and the first `bar` fence are significant; lines
/// inside the fence are never treated as bullets.
pub fn compile_slide(body: &str) -> SlideMarkdown {
    let mut slide = SlideMarkdown::default();
    let mut in_fence = false;
    // Only a `bar` fence is collected, but every fence body is skipped.
    let mut capturing = false;
    let mut fence_lines: Vec<&str> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();

        if in_fence {
            if trimmed.starts_with("```") {
                if capturing && slide.chart_block.is_none() {
                    slide.chart_block = Some(fence_lines.join("\n"));
                }
                in_fence = false;
                capturing = false;
                fence_lines.clear();
            } else if capturing {
                fence_lines.push(trimmed);
            }
            continue;
        }

        if let Some(info) = trimmed.strip_prefix("```") {
            in_fence = true;
            capturing = info.trim().eq_ignore_ascii_case("bar");
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            if slide.title.is_none() {
                slide.title = Some(rest.trim_start_matches('#').trim().to_string());
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            slide.bullets.push(rest.trim().to_string());
        }
    }

    // Unterminated fence: treat the collected lines as the block anyway.
    if in_fence && capturing && slide.chart_block.is_none() && !fence_lines.is_empty() {
        slide.chart_block = Some(fence_lines.join("\n"));
    }

    slide
}

/// Parse the body of a `bar` fence into chart rows.
///
/// Each non-empty line is split on the *first* colon: the left side is the
/// label, the right side the raw value. Thousands-separator commas are
/// stripped before the numeric parse. When the direct parse fails and the
/// raw value still contains a colon, the text after its *last* colon is
/// tried once more, so `"A: B: 5"` yields label `"A"` and value `5`. Lines
/// that still fail are dropped with a warning. Row order is preserved.
pub fn parse_chart_rows(block: &str) -> Vec<ChartRow> {
    let mut rows = Vec::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(colon) = line.find(':') else {
            warn!(line, "dropping chart row without a colon");
            continue;
        };
        let label = line[..colon].trim();
        let raw_value = line[colon + 1..].trim();
        match parse_value(raw_value) {
            Some(value) => rows.push(ChartRow::new(label, value)),
            None => warn!(line, "dropping chart row with unparseable value"),
        }
    }

    rows
}

/// Parse a raw value substring as a signed decimal, commas stripped.
fn parse_value(raw: &str) -> Option<f64> {
    if let Some(v) = parse_numeric(raw) {
        return Some(v);
    }
    // The value side may itself contain colons ("B: 5"); retry once with
    // the tail after the last colon.
    let tail = &raw[raw.rfind(':')? + 1..];
    parse_numeric(tail)
}

fn parse_numeric(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
