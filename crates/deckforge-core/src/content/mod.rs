//! Content stage: writer prompt, stage-2 wire format, and compilation of
//! markdown slide bodies into a validated [`crate::model::SlideContentSet`].

pub mod parser;
pub mod prompt;
pub mod wire;

pub use parser::{ContentShapeError, compile_bodies, parse_content_set};
pub use prompt::build_writer_prompt;
pub use wire::SlideContentSetWire;
