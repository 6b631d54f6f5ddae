//! Deterministic style-token to palette mapping.
//!
//! The plan's `style` is free text, so the mapping matches on keywords and
//! always falls back to a default palette. Every palette pairs its text and
//! background colors for high contrast, and its bar track and fill are
//! visually distinct.

/// Colors and bullet marker for one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Palette name, emitted as a `data-theme` attribute for inspection.
    pub name: &'static str,
    /// Page background behind the slide.
    pub background: &'static str,
    /// Slide surface color.
    pub surface: &'static str,
    /// Slide border color.
    pub border: &'static str,
    /// Body text on the surface.
    pub text: &'static str,
    /// Headings and bar fill.
    pub accent: &'static str,
    /// Neutral bar track behind the fill.
    pub track: &'static str,
    /// Value text drawn on the bar fill.
    pub value_text: &'static str,
    /// Emoji inserted literally at the start of each bullet line.
    pub marker: &'static str,
}

const BUSINESS: Theme = Theme {
    name: "business",
    background: "#eef1f5",
    surface: "#ffffff",
    border: "#c6d0dd",
    text: "#1f2a38",
    accent: "#1d4e89",
    track: "#dde4ec",
    value_text: "#ffffff",
    marker: "\u{1f3af}", // 🎯
};

const VINTAGE: Theme = Theme {
    name: "vintage",
    background: "#f4f0e6",
    surface: "#fff8f0",
    border: "#d4bfa3",
    text: "#222222",
    accent: "#6b4c3b",
    track: "#dddddd",
    value_text: "#fff8f0",
    marker: "\u{26a1}", // ⚡
};

const FANTASY: Theme = Theme {
    name: "fantasy",
    background: "#1d1430",
    surface: "#2b1f47",
    border: "#54408c",
    text: "#efe7ff",
    accent: "#b48cff",
    track: "#3a2d5e",
    value_text: "#1d1430",
    marker: "\u{2694}", // ⚔
};

const ACTION: Theme = Theme {
    name: "action",
    background: "#1a1a1a",
    surface: "#262626",
    border: "#5c2b2b",
    text: "#f5f0ec",
    accent: "#e0522d",
    track: "#3c3c3c",
    value_text: "#1a1a1a",
    marker: "\u{1f525}", // 🔥
};

const MODERN: Theme = Theme {
    name: "modern",
    background: "#10151d",
    surface: "#1a2230",
    border: "#2c3a50",
    text: "#e8edf4",
    accent: "#3fa7d6",
    track: "#2a3547",
    value_text: "#10151d",
    marker: "\u{1f539}", // 🔹
};

const CREATIVE: Theme = Theme {
    name: "creative",
    background: "#fdf6f0",
    surface: "#ffffff",
    border: "#f0c9a8",
    text: "#33261f",
    accent: "#d95d39",
    track: "#f3e3d3",
    value_text: "#ffffff",
    marker: "\u{1f3a8}", // 🎨
};

/// Fallback for unrecognized style tokens.
const DEFAULT: Theme = Theme {
    name: "default",
    background: "#f2f2f2",
    surface: "#ffffff",
    border: "#cccccc",
    text: "#222222",
    accent: "#30567d",
    track: "#e4e4e4",
    value_text: "#ffffff",
    marker: "\u{2726}", // ✦
};

impl Theme {
    /// Map a free-text style token to a palette. Matching is by keyword,
    /// case-insensitive; anything unrecognized gets [`DEFAULT`].
    pub fn for_style(style: &str) -> Theme {
        let s = style.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| s.contains(w));

        if has(&["business", "professional", "corporate", "formal"]) {
            BUSINESS
        } else if has(&["vintage", "retro", "classic"]) {
            VINTAGE
        } else if has(&["fantasy", "epic", "mythic"]) {
            FANTASY
        } else if has(&["action", "intense", "bold", "fire"]) {
            ACTION
        } else if has(&["modern", "tech", "minimal", "sleek"]) {
            MODERN
        } else if has(&["creative", "playful", "artistic", "fun"]) {
            CREATIVE
        } else {
            DEFAULT
        }
    }
}
