//! deckforge core: a three-stage pipeline that turns a free-form request
//! into a navigable, self-contained HTML slide deck.
//!
//! # Architecture
//!
//! ```text
//! request text
//!     |
//!     v
//! plan stage     -- Generator::generate(Stage::Plan)  -> DeckPlan (JSON)
//!     |                shape-validated + repaired by `plan`
//!     v
//! write stage    -- Generator::generate(Stage::Write) -> SlideContentSet
//!     |                shape-validated by `content` (markdown bodies)
//!     v
//! render stage   -- native compiler (`render`)        -> DeckDocument
//!                      validated by `render::validate_document`
//! ```
//!
//! Stages run strictly sequentially; stage N+1 never starts before stage N's
//! output has passed shape validation. Independent pipeline runs share no
//! mutable state.

pub mod chart;
pub mod content;
pub mod generator;
pub mod markdown;
pub mod model;
pub mod pipeline;
pub mod plan;
pub mod render;
pub mod wire;
