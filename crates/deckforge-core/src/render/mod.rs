//! Deck compiler and navigation shell.
//!
//! Assembles a [`crate::model::SlideContentSet`] into one self-contained
//! HTML document: every slide present, exactly one active, clamped
//! prev/next navigation, a style-derived palette, and an embedded runtime
//! that lazily renders the bar chart by its stable `.bar-chart` class.

pub mod html;
pub mod nav;
pub mod runtime;
pub mod theme;

pub use html::{DocumentShapeError, compile_deck, validate_document};
pub use nav::NavState;
pub use theme::Theme;
