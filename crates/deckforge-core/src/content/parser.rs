//! Content-stage validation and chart-slide synthesis.
//!
//! The writer is only trusted for bullet prose. The chart slide is never
//! taken from the writer: when the plan's statistics are eligible, the
//! compiler appends exactly one chart slide built from the index-aligned
//! zip of the plan's categories and values, so the rendered rows always
//! match the plan in original order.

use thiserror::Error;
use tracing::warn;

use crate::markdown;
use crate::model::{ChartRow, DeckPlan, SlideContent, SlideContentSet};
use crate::wire::strip_code_fence;

use super::wire::SlideContentSetWire;

/// Expected bullet count per text slide. Deviations other than zero are
/// tolerated with a warning.
pub const BULLETS_PER_SLIDE: usize = 5;

/// Default title for a chart slide the plan did not name.
const DEFAULT_CHART_TITLE: &str = "Key Figures";

/// Fatal content shape violations; the deck cannot be safely compiled.
#[derive(Debug, Error)]
pub enum ContentShapeError {
    #[error("content JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("writer returned {found} slide bodies for {expected} planned titles")]
    SlideCountMismatch { expected: usize, found: usize },

    #[error("slide {title:?} has no bullet lines")]
    EmptySlide { title: String },

    #[error("slide {title:?} unexpectedly carries a bar-chart block")]
    UnexpectedChart { title: String },
}

/// Parse and validate raw writer output against the plan it was written
/// for, appending the chart slide when the plan's statistics are eligible.
pub fn parse_content_set(
    plan: &DeckPlan,
    raw: &str,
) -> Result<SlideContentSet, ContentShapeError> {
    let wire: SlideContentSetWire = serde_json::from_str(strip_code_fence(raw))?;

    if !wire.style.is_empty() && wire.style != plan.style {
        warn!(
            wire_style = %wire.style,
            plan_style = %plan.style,
            "writer echoed a different style; keeping the plan's"
        );
    }

    if wire.all_slides_content.len() != plan.slide_titles.len() {
        return Err(ContentShapeError::SlideCountMismatch {
            expected: plan.slide_titles.len(),
            found: wire.all_slides_content.len(),
        });
    }

    let mut slides = Vec::with_capacity(plan.slide_titles.len() + 1);
    for (title, body) in plan.slide_titles.iter().zip(&wire.all_slides_content) {
        slides.push(text_slide(title, body)?);
    }

    if plan.chart_eligible() {
        slides.push(chart_slide(plan, &slides));
    }

    Ok(SlideContentSet {
        style: plan.style.clone(),
        slides,
    })
}

/// Compile markdown bodies directly into a content set, without a plan.
///
/// This is the offline path (`deckforge compile`): titles come from the
/// bodies' headings, and a body carrying a `bar` fence becomes the chart
/// slide. A chart body whose fence parses to zero rows is removed from the
/// deck with a warning, and only the first chart body survives; later ones
/// are dropped with a warning.
pub fn compile_bodies(
    style: &str,
    bodies: &[String],
) -> Result<SlideContentSet, ContentShapeError> {
    let mut slides = Vec::with_capacity(bodies.len());

    for (i, body) in bodies.iter().enumerate() {
        let md = markdown::compile_slide(body);
        let title = md.title.unwrap_or_else(|| format!("Slide {}", i + 1));

        match md.chart_block {
            Some(block) => {
                let rows = markdown::parse_chart_rows(&block);
                if rows.is_empty() {
                    warn!(%title, "removing chart slide with no parseable rows");
                } else if slides.iter().any(SlideContent::is_chart) {
                    // A deck carries at most one chart slide.
                    warn!(%title, "dropping additional chart slide");
                } else {
                    slides.push(SlideContent::Chart { title, rows });
                }
            }
            None => {
                if md.bullets.is_empty() {
                    return Err(ContentShapeError::EmptySlide { title });
                }
                slides.push(SlideContent::Bulleted {
                    title,
                    bullets: md.bullets,
                });
            }
        }
    }

    // Keep the chart slide last, preserving the order of everything else.
    slides.sort_by_key(SlideContent::is_chart);

    Ok(SlideContentSet {
        style: style.to_string(),
        slides,
    })
}

/// Compile one writer body into a text slide, enforcing the shape rules.
fn text_slide(title: &str, body: &str) -> Result<SlideContent, ContentShapeError> {
    let md = markdown::compile_slide(body);

    if md.chart_block.is_some() {
        return Err(ContentShapeError::UnexpectedChart {
            title: title.to_string(),
        });
    }
    if md.bullets.is_empty() {
        return Err(ContentShapeError::EmptySlide {
            title: title.to_string(),
        });
    }
    if md.bullets.len() != BULLETS_PER_SLIDE {
        warn!(
            %title,
            bullets = md.bullets.len(),
            "slide does not carry exactly {BULLETS_PER_SLIDE} bullets"
        );
    }
    if let Some(heading) = &md.title {
        if heading != title {
            warn!(%title, %heading, "writer changed the slide heading; keeping the planned title");
        }
    }

    Ok(SlideContent::Bulleted {
        title: title.to_string(),
        bullets: md.bullets,
    })
}

/// Build the chart slide from the plan's statistics.
///
/// The rows are the index-aligned zip of categories and values; the title
/// is the plan's reserved chart title or a default, deduplicated against
/// the titles already in the deck.
fn chart_slide(plan: &DeckPlan, existing: &[SlideContent]) -> SlideContent {
    let rows: Vec<ChartRow> = plan
        .stat_categories
        .iter()
        .zip(&plan.stat_values)
        .map(|(label, value)| ChartRow::new(label.clone(), *value))
        .collect();

    let mut title = plan
        .chart_title
        .clone()
        .unwrap_or_else(|| DEFAULT_CHART_TITLE.to_string());
    if existing.iter().any(|s| s.title() == title) {
        title.push_str(" (Chart)");
    }

    SlideContent::Chart { title, rows }
}
