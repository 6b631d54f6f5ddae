//! Planning stage: prompt construction, wire format, and shape validation
//! with local repair.

pub mod parser;
pub mod prompt;
pub mod wire;

pub use parser::{PlanShapeError, parse_deck_plan};
pub use prompt::build_planner_prompt;
pub use wire::DeckPlanWire;
