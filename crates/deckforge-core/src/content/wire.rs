//! Stage-2 JSON wire format: one markdown body per planned slide.

use serde::{Deserialize, Serialize};

/// Raw writer output, before validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideContentSetWire {
    /// Theme echo; informational only (the plan's style is authoritative).
    #[serde(default)]
    pub style: String,
    /// One markdown body per planned title, in plan order.
    #[serde(default)]
    pub all_slides_content: Vec<String>,
}
