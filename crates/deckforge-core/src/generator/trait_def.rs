//! The `Generator` trait -- the adapter interface for external text
//! generators.
//!
//! The trait is intentionally object-safe so the pipeline can hold an
//! `Arc<dyn Generator>` and tests can substitute scripted fakes.

use anyhow::Result;
use async_trait::async_trait;

/// Pipeline stage a prompt belongs to. Each stage has its own role
/// instruction and expected output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Stage 1: free-form request in, plan JSON out.
    Plan,
    /// Stage 2: plan in, per-slide markdown bodies (JSON) out.
    Write,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Adapter interface for producing stage output from a prompt.
///
/// Implementors wrap a specific backend (a subprocess, an HTTP API, a test
/// script) and return the raw response text. Shape validation is the
/// caller's job; retry policy, if any, belongs to the implementor or the
/// orchestrating caller, never to the pipeline.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Human-readable name for this generator (e.g. "subprocess").
    fn name(&self) -> &str;

    /// Produce the raw response for one stage's prompt.
    async fn generate(&self, stage: Stage, prompt: &str) -> Result<String>;
}

// Compile-time assertion: Generator must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn Generator) {}
};
