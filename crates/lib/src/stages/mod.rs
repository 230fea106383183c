//! # Pipeline Stages
//!
//! Each stage issues exactly one generation request and never returns an
//! error: provider failures and empty payloads are folded into a
//! [`StageOutput`], whose text is always forwarded to whatever comes next.

pub mod research;
pub mod validation;

pub use research::ResearchStage;
pub use validation::ValidationStage;

use crate::{
    constants::{NO_RESEARCH_DATA, NO_VALIDATED_DATA, RESEARCH_ERROR_TAG, VALIDATION_ERROR_TAG},
    providers::ai::AiProvider,
};
use serde::Serialize;
use std::{borrow::Cow, fmt};
use tracing::{debug, info, warn};

/// Identifies a stage in logs and selects its fallback text and error tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Research,
    Validation,
}

impl StageKind {
    /// Text substituted when the service answers without any usable text.
    pub fn fallback(self) -> &'static str {
        match self {
            StageKind::Research => NO_RESEARCH_DATA,
            StageKind::Validation => NO_VALIDATED_DATA,
        }
    }

    /// Prefix identifying a failed call of this stage.
    pub fn error_tag(self) -> &'static str {
        match self {
            StageKind::Research => RESEARCH_ERROR_TAG,
            StageKind::Validation => VALIDATION_ERROR_TAG,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Research => f.write_str("research"),
            StageKind::Validation => f.write_str("validation"),
        }
    }
}

/// The result of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutput {
    /// The service returned text.
    Generated { text: String },
    /// The call succeeded but carried no usable text.
    Empty { fallback: &'static str },
    /// The call failed; `message` is the provider error rendered as text.
    Failed { tag: &'static str, message: String },
}

impl StageOutput {
    /// The text handed to the next stage or to the user.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            StageOutput::Generated { text } => Cow::Borrowed(text),
            StageOutput::Empty { fallback } => Cow::Borrowed(fallback),
            StageOutput::Failed { tag, message } => Cow::Owned(format!("{tag} {message}")),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            StageOutput::Generated { text } => text,
            other => other.text().into_owned(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, StageOutput::Failed { .. })
    }
}

/// Sends `prompt` once and folds the outcome into a `StageOutput`.
pub(crate) async fn run_stage(
    ai_provider: &dyn AiProvider,
    kind: StageKind,
    prompt: &str,
) -> StageOutput {
    debug!(
        stage = %kind,
        model = ai_provider.model(),
        prompt_len = prompt.len(),
        "Sending stage prompt."
    );

    match ai_provider.generate(prompt).await {
        Ok(text) if text.trim().is_empty() => {
            info!(stage = %kind, "Service returned no text; using fallback.");
            StageOutput::Empty {
                fallback: kind.fallback(),
            }
        }
        Ok(text) => {
            debug!(stage = %kind, response_len = text.len(), "Stage completed.");
            StageOutput::Generated { text }
        }
        Err(e) => {
            warn!(stage = %kind, error = %e, "Stage call failed.");
            StageOutput::Failed {
                tag: kind.error_tag(),
                message: e.to_string(),
            }
        }
    }
}
