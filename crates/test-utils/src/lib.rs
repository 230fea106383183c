use researcher::errors::GenerationError;
use researcher::prompts::tasks::RESEARCH_PROMPT;
use researcher::providers::ai::AiProvider;
use researcher::StageKind;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// What the mock answers for a stage.
#[derive(Clone, Debug)]
pub enum MockReply {
    Text(String),
    /// Simulates a non-2xx answer from the service.
    ApiError { status: u16, body: String },
}

impl MockReply {
    pub fn text(text: &str) -> Self {
        MockReply::Text(text.to_string())
    }

    pub fn api_error(status: u16, body: &str) -> Self {
        MockReply::ApiError {
            status,
            body: body.to_string(),
        }
    }
}

/// A scripted provider that records every prompt it receives.
///
/// Stages without a programmed reply answer with an empty payload.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    replies: Arc<Mutex<HashMap<&'static str, MockReply>>>,
    calls: Arc<Mutex<Vec<(StageKind, String)>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-programs the reply for every call of `stage`.
    pub fn with_reply(self, stage: StageKind, reply: MockReply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(stage_key(stage), reply);
        self
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(StageKind, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// The stages called so far, in call order.
    pub fn called_stages(&self) -> Vec<StageKind> {
        self.get_calls().into_iter().map(|(stage, _)| stage).collect()
    }
}

fn stage_key(stage: StageKind) -> &'static str {
    match stage {
        StageKind::Research => "research",
        StageKind::Validation => "validation",
    }
}

/// Recognises which stage built `prompt`.
///
/// The topic is free text, so only the fixed tail after `{topic}` identifies a
/// research prompt. A validation prompt always ends with its checklist.
pub fn stage_of_prompt(prompt: &str) -> StageKind {
    let research_tail = RESEARCH_PROMPT
        .split_once("{topic}")
        .map_or(RESEARCH_PROMPT, |(_, tail)| tail);
    if prompt.ends_with(research_tail) {
        StageKind::Research
    } else {
        StageKind::Validation
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let stage = stage_of_prompt(prompt);
        self.calls
            .lock()
            .unwrap()
            .push((stage, prompt.to_string()));

        let reply = self.replies.lock().unwrap().get(stage_key(stage)).cloned();
        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::ApiError { status, body }) => {
                Err(GenerationError::AiApi { status, body })
            }
            None => Ok(String::new()),
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
