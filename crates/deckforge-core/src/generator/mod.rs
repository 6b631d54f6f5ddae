//! Text-generator collaborator interface.
//!
//! The pipeline never speaks to a language model directly: it hands a
//! role-specific prompt to a [`Generator`] and shape-validates whatever
//! comes back. [`SubprocessGenerator`] adapts any external CLI generator.

pub mod subprocess;
pub mod trait_def;

pub use subprocess::SubprocessGenerator;
pub use trait_def::{Generator, Stage};
