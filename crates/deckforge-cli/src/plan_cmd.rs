//! `deckforge check-plan` command: parse and validate a stage-1 plan file.

use std::path::Path;

use anyhow::{Context, Result};

use deckforge_core::plan;

/// Run the check-plan command.
pub fn run_check_plan(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read plan file {}", file.display()))?;

    let deck_plan = plan::parse_deck_plan(&raw)
        .with_context(|| format!("plan file {} is not a valid plan", file.display()))?;

    println!("Plan OK");
    println!("  style: {}", deck_plan.style);
    println!("  slides: {}", deck_plan.slide_titles.len());
    for (i, title) in deck_plan.slide_titles.iter().enumerate() {
        println!("    {}. {title}", i + 1);
    }
    if deck_plan.chart_eligible() {
        println!(
            "  chart: {} ({} pairs)",
            deck_plan.chart_title.as_deref().unwrap_or("Key Figures"),
            deck_plan.stat_categories.len()
        );
        for (label, value) in deck_plan
            .stat_categories
            .iter()
            .zip(deck_plan.stat_values.iter())
        {
            println!("    {label}: {value}");
        }
    } else {
        println!("  chart: none");
    }
    Ok(())
}
