use super::{run_stage, StageKind, StageOutput};
use crate::{prompts::core::build_research_prompt, providers::ai::AiProvider};
use tracing::info;

/// Gathers an initial, unstructured summary for a topic.
pub struct ResearchStage<'a> {
    ai_provider: &'a dyn AiProvider,
}

impl<'a> ResearchStage<'a> {
    pub fn new(ai_provider: &'a dyn AiProvider) -> Self {
        Self { ai_provider }
    }

    /// Issues one generation request for `topic`.
    ///
    /// Any string is accepted, including an empty one.
    pub async fn collect(&self, topic: &str) -> StageOutput {
        info!("Researching topic ({} chars).", topic.len());
        let prompt = build_research_prompt(topic);
        run_stage(self.ai_provider, StageKind::Research, &prompt).await
    }
}
