//! `deckforge compile` command: compile a stage-2 content JSON file to HTML
//! without invoking a generator.

use std::path::Path;

use anyhow::{Context, Result};

use deckforge_core::content::{self, SlideContentSetWire};
use deckforge_core::render;
use deckforge_core::wire::strip_code_fence;

const DEFAULT_OUTPUT: &str = "deck.html";

/// Run the compile command.
pub fn run_compile(file: &Path, output: Option<&Path>) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read content file {}", file.display()))?;
    let wire: SlideContentSetWire = serde_json::from_str(strip_code_fence(&raw))
        .with_context(|| format!("failed to parse content file {}", file.display()))?;

    let set = content::compile_bodies(&wire.style, &wire.all_slides_content)?;
    let doc = render::compile_deck(&set);
    render::validate_document(&doc, &set)?;

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

#[cfg(test)]
mod tests {
    use super::*;

    fn write_content(dir: &Path, json: &serde_json::Value) -> std::path::PathBuf {
        let path = dir.join("content.json");
        std::fs::write(&path, json.to_string()).unwrap();
        path
    }

    #[test]
    fn compiles_a_content_file_to_html() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_content(
            dir.path(),
            &serde_json::json!({
                "style": "modern",
                "all_slides_content": [
                    "# Rivers\n- one\n- two\n- three\n- four\n- five"
                ]
            }),
        );
        let out = dir.path().join("out.html");

        run_compile(&file, Some(&out)).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Rivers"));
    }

    #[test]
    fn bad_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "not json").unwrap();
        let err = run_compile(&path, Some(&dir.path().join("out.html"))).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
