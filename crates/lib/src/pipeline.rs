//! # Research Pipeline
//!
//! Runs the research stage and then the validation stage, feeding the first
//! stage's text into the second. The coordinator never looks at what the
//! research stage produced: a tagged error is refined like any other text.

use crate::{
    providers::ai::AiProvider,
    stages::{ResearchStage, StageOutput, ValidationStage},
};
use serde::Serialize;
use std::{fmt, sync::Arc};
use tracing::info;

/// Where a pipeline run is. Runs move strictly forward and end in `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Idle,
    Researching,
    Validating,
    Done,
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelinePhase::Idle => "idle",
            PipelinePhase::Researching => "researching",
            PipelinePhase::Validating => "validating",
            PipelinePhase::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub research: StageOutput,
    pub refined: StageOutput,
    /// The phases visited, in order.
    pub phases: Vec<PipelinePhase>,
}

impl PipelineReport {
    /// The text shown to the user and offered for download.
    pub fn final_text(&self) -> String {
        self.refined.text().into_owned()
    }
}

/// Sequences the two stages against a shared provider.
///
/// The provider is the only state and is never mutated, so one pipeline can
/// serve any number of concurrent runs.
#[derive(Clone, Debug)]
pub struct ResearchPipeline {
    ai_provider: Arc<dyn AiProvider>,
}

impl ResearchPipeline {
    pub fn new(ai_provider: Arc<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    pub fn from_boxed(ai_provider: Box<dyn AiProvider>) -> Self {
        Self::new(Arc::from(ai_provider))
    }

    pub fn ai_provider(&self) -> &dyn AiProvider {
        self.ai_provider.as_ref()
    }

    /// Runs research then validation for `topic`. Issues exactly two requests.
    pub async fn run(&self, topic: &str) -> PipelineReport {
        let mut phases = vec![PipelinePhase::Idle];
        let provider = self.ai_provider.as_ref();

        Self::enter(&mut phases, PipelinePhase::Researching);
        let research = ResearchStage::new(provider).collect(topic).await;

        Self::enter(&mut phases, PipelinePhase::Validating);
        let refined = ValidationStage::new(provider)
            .validate_and_refine(&research.text())
            .await;

        Self::enter(&mut phases, PipelinePhase::Done);
        PipelineReport {
            research,
            refined,
            phases,
        }
    }

    /// Convenience wrapper returning only the refined text.
    pub async fn run_to_text(&self, topic: &str) -> String {
        self.run(topic).await.refined.into_text()
    }

    fn enter(phases: &mut Vec<PipelinePhase>, next: PipelinePhase) {
        if let Some(current) = phases.last() {
            info!("[pipeline] {current} -> {next}");
        }
        phases.push(next);
    }
}
