use super::{run_stage, StageKind, StageOutput};
use crate::{prompts::core::build_validation_prompt, providers::ai::AiProvider};
use tracing::info;

/// Validates, trims and restructures the research stage's text.
pub struct ValidationStage<'a> {
    ai_provider: &'a dyn AiProvider,
}

impl<'a> ValidationStage<'a> {
    pub fn new(ai_provider: &'a dyn AiProvider) -> Self {
        Self { ai_provider }
    }

    /// Issues one generation request embedding `research` verbatim.
    ///
    /// A tagged research error is refined like any other content.
    pub async fn validate_and_refine(&self, research: &str) -> StageOutput {
        info!("Validating research ({} chars).", research.len());
        let prompt = build_validation_prompt(research);
        run_stage(self.ai_provider, StageKind::Validation, &prompt).await
    }
}
