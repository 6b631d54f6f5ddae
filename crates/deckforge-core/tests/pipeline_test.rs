//! End-to-end pipeline tests with a scripted generator.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use deckforge_core::chart;
use deckforge_core::content::ContentShapeError;
use deckforge_core::generator::{Generator, Stage};
use deckforge_core::model::ChartRow;
use deckforge_core::pipeline::{DeckPipeline, PipelineError};

// ===========================================================================
// Scripted generator
// ===========================================================================

struct ScriptedGenerator {
    plan: String,
    content: String,
}

#[async_trait]
impl Generator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, stage: Stage, _prompt: &str) -> Result<String> {
        Ok(match stage {
            Stage::Plan => self.plan.clone(),
            Stage::Write => self.content.clone(),
        })
    }
}

fn pipeline(plan: serde_json::Value, content: serde_json::Value) -> DeckPipeline {
    DeckPipeline::new(Arc::new(ScriptedGenerator {
        plan: plan.to_string(),
        content: content.to_string(),
    }))
}

fn body(title: &str) -> String {
    format!("# {title}\n- one\n- two\n- three\n- four\n- five")
}

fn space_plan() -> serde_json::Value {
    serde_json::json!({
        "style": "vintage",
        "slides": [
            "The Dawn of the Space Age",
            "The Apollo Program",
            "Bar Chart: Most Active Missions"
        ],
        "stats-categories": ["NASA", "ESA", "Roscosmos"],
        "stats-numbers": [150, 45, 35]
    })
}

fn chart_rows_in(html: &str) -> Vec<ChartRow> {
    let start = html.find("data-chart-data=\"").unwrap() + "data-chart-data=\"".len();
    let len = html[start..].find('"').unwrap();
    let data = html[start..start + len]
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    serde_json::from_str(&data).expect("chart data attribute should be JSON rows")
}

fn space_content() -> serde_json::Value {
    serde_json::json!({
        "style": "vintage",
        "all_slides_content": [
            body("The Dawn of the Space Age"),
            body("The Apollo Program")
        ]
    })
}

// ===========================================================================
// Eligible statistics
// ===========================================================================

#[tokio::test]
async fn eligible_stats_produce_one_trailing_chart_slide() {
    let doc = pipeline(space_plan(), space_content())
        .run("space exploration with statistics")
        .await
        .expect("pipeline should succeed");

    // Two text slides plus the synthesized chart slide.
    assert_eq!(doc.slide_count, 3);
    assert!(doc.has_chart);
    assert!(doc.html.contains("Bar Chart: Most Active Missions"));
    assert_eq!(
        chart_rows_in(&doc.html),
        vec![
            ChartRow::new("NASA", 150.0),
            ChartRow::new("ESA", 45.0),
            ChartRow::new("Roscosmos", 35.0),
        ]
    );

    // The chart container is the last slide in the document.
    let chart_pos = doc.html.find("class=\"bar-chart\"").unwrap();
    let apollo_pos = doc.html.find("The Apollo Program").unwrap();
    assert!(chart_pos > apollo_pos);
}

#[tokio::test]
async fn chart_rows_follow_the_plan_zip_and_widths_follow_the_spec() {
    // The reference example: max 150, widths 100 / 30 / ~23.3, all above
    // the visibility floor.
    let rows = vec![
        ChartRow::new("NASA", 150.0),
        ChartRow::new("ESA", 45.0),
        ChartRow::new("Roscosmos", 35.0),
    ];
    let layout = chart::layout(&rows);
    assert_eq!(layout.max_value, 150.0);
    assert_eq!(layout.bars[0].width_percent, 100.0);
    assert_eq!(layout.bars[1].width_percent, 30.0);
    assert!((layout.bars[2].width_percent - 23.333).abs() < 0.001);
    assert!(layout
        .bars
        .iter()
        .all(|b| b.width_percent >= chart::MIN_VISIBLE_PERCENT));
}

#[tokio::test]
async fn colon_labels_survive_end_to_end() {
    let plan = serde_json::json!({
        "style": "vintage",
        "slides": ["Intro", "Bar Chart: Programs"],
        "stats-categories": ["Artemis: crewed", "Voyager: probes", "Hubble"],
        "stats-numbers": [35, 2, 1]
    });
    let content = serde_json::json!({
        "style": "vintage",
        "all_slides_content": [body("Intro")]
    });

    let doc = pipeline(plan, content).run("space programs").await.unwrap();
    let rows = chart_rows_in(&doc.html);
    assert_eq!(rows[0], ChartRow::new("Artemis: crewed", 35.0));
    assert_eq!(rows[1], ChartRow::new("Voyager: probes", 2.0));
}

// ===========================================================================
// Ineligible statistics
// ===========================================================================

#[tokio::test]
async fn two_pairs_never_produce_a_chart_slide() {
    let plan = serde_json::json!({
        "style": "vintage",
        "slides": ["Intro", "Bar Chart: Stats"],
        "stats-categories": ["NASA", "ESA"],
        "stats-numbers": [150, 45]
    });
    let content = serde_json::json!({
        "style": "vintage",
        "all_slides_content": [body("Intro")]
    });

    let doc = pipeline(plan, content).run("space").await.unwrap();
    // The bar-chart title is dropped and no chart slide is synthesized.
    assert_eq!(doc.slide_count, 1);
    assert!(!doc.has_chart);
    assert!(!doc.html.contains("class=\"bar-chart\""));
}

#[tokio::test]
async fn mismatched_stat_arrays_never_produce_a_chart_slide() {
    let plan = serde_json::json!({
        "style": "modern",
        "slides": ["Intro"],
        "stats-categories": ["a", "b", "c", "d"],
        "stats-numbers": [1, 2, 3]
    });
    let content = serde_json::json!({
        "style": "modern",
        "all_slides_content": [body("Intro")]
    });

    let doc = pipeline(plan, content).run("anything").await.unwrap();
    assert!(!doc.has_chart);
}

// ===========================================================================
// Failure paths
// ===========================================================================

#[tokio::test]
async fn writer_slide_count_mismatch_fails_the_pipeline() {
    let content = serde_json::json!({
        "style": "vintage",
        "all_slides_content": [body("The Dawn of the Space Age")]
    });
    let err = pipeline(space_plan(), content)
        .run("space")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Content(ContentShapeError::SlideCountMismatch {
            expected: 2,
            found: 1
        })
    ));
}

#[tokio::test]
async fn bulletless_writer_slide_fails_the_pipeline() {
    let content = serde_json::json!({
        "style": "vintage",
        "all_slides_content": [
            "# The Dawn of the Space Age\nno bullets here",
            body("The Apollo Program")
        ]
    });
    let err = pipeline(space_plan(), content)
        .run("space")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Content(ContentShapeError::EmptySlide { .. })
    ));
}

#[tokio::test]
async fn fenced_generator_output_is_tolerated() {
    let plan = format!("```json\n{}\n```", space_plan());
    let content = format!("```json\n{}\n```", space_content());
    let p = DeckPipeline::new(Arc::new(ScriptedGenerator { plan, content }));
    let doc = p.run("space").await.expect("fenced JSON should parse");
    assert_eq!(doc.slide_count, 3);
}
