//! `deckforge generate` command: run the full three-stage pipeline.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;

use deckforge_core::generator::SubprocessGenerator;
use deckforge_core::pipeline::DeckPipeline;

use crate::config;

const DEFAULT_OUTPUT: &str = "deck.html";

/// Run the generate command.
pub async fn run_generate(
    generator_override: Option<&str>,
    request: Option<&str>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let request = read_request(request, input)?;
    if request.trim().is_empty() {
        bail!("request is empty");
    }

    let section = config::resolve_generator(generator_override)?;
    info!(command = %section.command, "using generator");

    let generator = SubprocessGenerator::new(&section.command)
        .with_args(section.args.clone())
        .with_timeout(section.timeout());
    let pipeline = DeckPipeline::new(Arc::new(generator));

    let doc = pipeline.run(request.trim()).await?;

    let path = output.unwrap_or_else(|| Path::new(DEFAULT_OUTPUT));
    std::fs::write(path, &doc.html)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("Wrote {} ({} bytes)", path.display(), doc.html.len());
    println!(
        "  {} slide{}{}",
        doc.slide_count,
        if doc.slide_count == 1 { "" } else { "s" },
        if doc.has_chart {
            ", including a bar chart"
        } else {
            ""
        }
    );
    Ok(())
}

/// Resolve the request text: positional argument, then --input file, then
/// stdin.
fn read_request(request: Option<&str>, input: Option<&Path>) -> Result<String> {
    if let Some(text) = request {
        return Ok(text.to_string());
    }
    if let Some(path) = input {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read request from stdin")?;
    Ok(text)
}
