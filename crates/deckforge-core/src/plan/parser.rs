//! Planner output validation.
//!
//! Whatever the collaborator returned, the consuming stage enforces the
//! chart eligibility invariant here: mismatched or short statistic arrays
//! disable the chart (recovered locally, not fatal), and a "Bar Chart"
//! title without eligible statistics is dropped. Malformed JSON, a missing
//! style, or an empty title list after repair are fatal.

use thiserror::Error;
use tracing::warn;

use crate::model::{DeckPlan, MIN_CHART_PAIRS};
use crate::wire::strip_code_fence;

use super::wire::DeckPlanWire;

/// Fatal planner shape violations. Statistic problems are *not* listed
/// here: they are repaired by disabling the chart.
#[derive(Debug, Error)]
pub enum PlanShapeError {
    #[error("plan JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("plan is missing a non-empty style")]
    MissingStyle,

    #[error("plan contains no usable slide titles")]
    NoSlides,
}

/// Parse and validate raw planner output into a [`DeckPlan`].
///
/// Tolerates a Markdown code fence around the JSON. On success the plan
/// satisfies every invariant documented on [`DeckPlan`].
pub fn parse_deck_plan(raw: &str) -> Result<DeckPlan, PlanShapeError> {
    let wire: DeckPlanWire = serde_json::from_str(strip_code_fence(raw))?;

    let style = wire.style.trim().to_string();
    if style.is_empty() {
        return Err(PlanShapeError::MissingStyle);
    }

    let (stat_categories, stat_values) = repair_stats(wire.stats_categories, wire.stats_numbers);
    let eligible = stat_categories.len() >= MIN_CHART_PAIRS;

    let mut slide_titles = Vec::with_capacity(wire.slides.len());
    let mut chart_title = None;
    for title in wire.slides {
        if !references_bar_chart(&title) {
            slide_titles.push(title);
        } else if eligible && chart_title.is_none() {
            // Reserved for the synthesized chart slide, which is appended
            // after the text slides rather than kept in place.
            chart_title = Some(title);
        } else {
            warn!(%title, "dropping bar-chart slide title without eligible statistics");
        }
    }

    if slide_titles.is_empty() {
        return Err(PlanShapeError::NoSlides);
    }

    Ok(DeckPlan {
        style,
        slide_titles,
        stat_categories,
        stat_values,
        chart_title,
    })
}

/// Apply the chart eligibility rules, clearing the arrays when they cannot
/// back a chart.
fn repair_stats(categories: Vec<String>, values: Vec<f64>) -> (Vec<String>, Vec<f64>) {
    if categories.len() != values.len() {
        warn!(
            categories = categories.len(),
            values = values.len(),
            "statistic arrays are mismatched; disabling the chart"
        );
        return (Vec::new(), Vec::new());
    }
    if !categories.is_empty() && categories.len() < MIN_CHART_PAIRS {
        warn!(
            pairs = categories.len(),
            "fewer than {MIN_CHART_PAIRS} statistic pairs; disabling the chart"
        );
        return (Vec::new(), Vec::new());
    }
    (categories, values)
}

/// Whether a slide title references a bar chart.
fn references_bar_chart(title: &str) -> bool {
    title.to_lowercase().contains("bar chart")
}
