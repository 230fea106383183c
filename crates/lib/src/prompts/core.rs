//! # Prompt Builders
//!
//! Fill the stage templates from `tasks`. Inputs are inserted verbatim; the
//! inserted text is never scanned for further placeholders.

use super::tasks::{RESEARCH_PROMPT, VALIDATION_PROMPT};

/// Builds the research-stage prompt for `topic`.
pub fn build_research_prompt(topic: &str) -> String {
    RESEARCH_PROMPT.replace("{topic}", topic)
}

/// Builds the validation-stage prompt embedding `research` unchanged.
pub fn build_validation_prompt(research: &str) -> String {
    VALIDATION_PROMPT.replace("{research}", research)
}
