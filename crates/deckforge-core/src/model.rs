//! Core data model shared by the pipeline stages.
//!
//! Each type corresponds to the output of one stage: the planner produces a
//! [`DeckPlan`], the content stage a [`SlideContentSet`], and the renderer a
//! [`DeckDocument`]. All types are plain owned data; a pipeline run owns its
//! instances outright.

use serde::{Deserialize, Serialize};

/// Minimum number of statistic pairs required before a chart slide may be
/// synthesized.
pub const MIN_CHART_PAIRS: usize = 3;

/// Validated output of the planning stage.
///
/// Produced by [`crate::plan::parse_deck_plan`], which repairs or rejects
/// whatever the upstream collaborator returned. After validation the
/// following holds: `stat_categories.len() == stat_values.len()`, the arrays
/// are empty unless the chart is eligible, `chart_title` is `Some` only when
/// the chart is eligible, and no entry of `slide_titles` references a bar
/// chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckPlan {
    /// Opaque theme key (e.g. "vintage", "business").
    pub style: String,
    /// Ordered titles for the text slides, one per slide. Never empty.
    pub slide_titles: Vec<String>,
    /// Bar-chart labels, index-aligned with `stat_values`.
    pub stat_categories: Vec<String>,
    /// Bar-chart values, index-aligned with `stat_categories`.
    pub stat_values: Vec<f64>,
    /// Title reserved for the chart slide, present only when eligible.
    pub chart_title: Option<String>,
}

impl DeckPlan {
    /// A chart slide is eligible iff the statistic arrays are index-aligned
    /// and carry at least [`MIN_CHART_PAIRS`] pairs.
    pub fn chart_eligible(&self) -> bool {
        self.stat_categories.len() == self.stat_values.len()
            && self.stat_categories.len() >= MIN_CHART_PAIRS
    }
}

/// One labeled value of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Text before the first colon of the source line, trimmed.
    pub label: String,
    /// Parsed signed decimal value.
    pub value: f64,
}

impl ChartRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Content of a single slide. Bulleted and chart slides are mutually
/// exclusive by construction; a chart slide never carries bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlideContent {
    /// A normal text slide: title plus bullet lines (five expected).
    Bulleted { title: String, bullets: Vec<String> },
    /// The bar-chart slide: title plus labeled rows, always last in a deck.
    Chart { title: String, rows: Vec<ChartRow> },
}

impl SlideContent {
    pub fn title(&self) -> &str {
        match self {
            Self::Bulleted { title, .. } | Self::Chart { title, .. } => title,
        }
    }

    pub fn is_chart(&self) -> bool {
        matches!(self, Self::Chart { .. })
    }
}

/// Validated output of the content stage: one slide per planned title plus
/// at most one trailing chart slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideContentSet {
    /// Theme key copied unchanged from the plan.
    pub style: String,
    /// Ordered slides; the chart slide, when present, is last.
    pub slides: Vec<SlideContent>,
}

impl SlideContentSet {
    pub fn has_chart(&self) -> bool {
        self.slides.iter().any(SlideContent::is_chart)
    }

    pub fn chart_count(&self) -> usize {
        self.slides.iter().filter(|s| s.is_chart()).count()
    }
}

/// The compiled deck: one self-contained HTML document.
///
/// Immutable once compiled; the only mutable state (`currentIndex`, the
/// per-chart `rendered` flag) lives inside the embedded runtime and resets
/// on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckDocument {
    /// Complete HTML document, all styles and scripts inline.
    pub html: String,
    /// Number of slides present in the document.
    pub slide_count: usize,
    /// Whether the document contains a bar-chart slide.
    pub has_chart: bool,
}
