//! Sequential deck-generation pipeline.
//!
//! Runs plan -> write -> render in strict order; a stage's output must pass
//! shape validation before the next stage starts, and a failure stops the
//! run outright -- the pipeline never substitutes placeholder content for a
//! missing stage output. Each run owns its data; concurrent runs share only
//! the `Arc<dyn Generator>`.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::content::{self, ContentShapeError};
use crate::generator::{Generator, Stage};
use crate::model::DeckDocument;
use crate::plan::{self, PlanShapeError};
use crate::render::{self, DocumentShapeError};

/// A failed deck-generation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("text generator failed during {stage} stage: {source}")]
    Generator {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("plan stage returned an invalid shape: {0}")]
    Plan(#[from] PlanShapeError),

    #[error("content stage returned an invalid shape: {0}")]
    Content(#[from] ContentShapeError),

    #[error("compiled document failed validation: {0}")]
    Document(#[from] DocumentShapeError),
}

/// One deck-generation pipeline bound to a text generator.
#[derive(Clone)]
pub struct DeckPipeline {
    generator: Arc<dyn Generator>,
}

impl DeckPipeline {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Run the full pipeline for one request, producing the final document.
    pub async fn run(&self, request: &str) -> Result<DeckDocument, PipelineError> {
        // Stage 1: plan.
        let prompt = plan::build_planner_prompt(request);
        info!(generator = self.generator.name(), "requesting deck plan");
        let raw = self
            .generator
            .generate(Stage::Plan, &prompt)
            .await
            .map_err(|source| PipelineError::Generator {
                stage: Stage::Plan.as_str(),
                source,
            })?;
        let deck_plan = plan::parse_deck_plan(&raw)?;
        info!(
            style = %deck_plan.style,
            slides = deck_plan.slide_titles.len(),
            chart = deck_plan.chart_eligible(),
            "plan validated"
        );

        // Stage 2: write.
        let prompt = content::build_writer_prompt(&deck_plan);
        let raw = self
            .generator
            .generate(Stage::Write, &prompt)
            .await
            .map_err(|source| PipelineError::Generator {
                stage: Stage::Write.as_str(),
                source,
            })?;
        let set = content::parse_content_set(&deck_plan, &raw)?;
        info!(slides = set.slides.len(), "content validated");

        // Stage 3: render, natively and deterministically, then hold the
        // result to the same shape contract an external renderer would face.
        let doc = render::compile_deck(&set);
        render::validate_document(&doc, &set)?;
        info!(
            slides = doc.slide_count,
            chart = doc.has_chart,
            bytes = doc.html.len(),
            "deck compiled"
        );

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Scripted generator: fixed response per stage.
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

    /// Generator that always fails.
    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _stage: Stage, _prompt: &str) -> Result<String> {
            anyhow::bail!("backend unavailable")
        }
    }

    fn pipeline(plan: &str, content: &str) -> DeckPipeline {
        DeckPipeline::new(Arc::new(ScriptedGenerator {
            plan: plan.to_string(),
            content: content.to_string(),
        }))
    }

    fn simple_plan() -> String {
        serde_json::json!({
            "style": "modern",
            "slides": ["Intro"],
        })
        .to_string()
    }

    fn simple_content() -> String {
        serde_json::json!({
            "style": "modern",
            "all_slides_content": ["# Intro\n- a\n- b\n- c\n- d\n- e"],
        })
        .to_string()
    }

    #[tokio::test]
    async fn happy_path_produces_validated_document() {
        let doc = pipeline(&simple_plan(), &simple_content())
            .run("a short talk")
            .await
            .expect("pipeline should succeed");
        assert_eq!(doc.slide_count, 1);
        assert!(!doc.has_chart);
        assert!(doc.html.starts_with("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn generator_failure_names_the_stage() {
        let p = DeckPipeline::new(Arc::new(FailingGenerator));
        let err = p.run("anything").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Generator { stage: "plan", .. }
        ));
    }

    #[tokio::test]
    async fn bad_plan_shape_stops_before_write_stage() {
        let p = pipeline("not json", &simple_content());
        let err = p.run("anything").await.unwrap_err();
        assert!(matches!(err, PipelineError::Plan(PlanShapeError::Json(_))));
    }

    #[tokio::test]
    async fn bad_content_shape_is_fatal() {
        let p = pipeline(
            &simple_plan(),
            r#"{"style": "modern", "all_slides_content": []}"#,
        );
        let err = p.run("anything").await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Content(ContentShapeError::SlideCountMismatch { .. })
        ));
    }
}
