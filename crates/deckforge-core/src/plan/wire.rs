//! Stage-1 JSON wire format.
//!
//! Field names (including the hyphenated statistic keys) are part of the
//! collaborator contract and must not change.

use serde::{Deserialize, Serialize};

/// Raw planner output, before validation and repair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckPlanWire {
    /// One-word visual theme (treated as an opaque key downstream).
    #[serde(default)]
    pub style: String,
    /// Proposed slide titles, in order.
    #[serde(default)]
    pub slides: Vec<String>,
    /// Bar-chart labels; empty when the request carried no statistics.
    #[serde(default, rename = "stats-categories")]
    pub stats_categories: Vec<String>,
    /// Bar-chart values, index-aligned with `stats-categories`.
    #[serde(default, rename = "stats-numbers")]
    pub stats_numbers: Vec<f64>,
}
