//! # Stage Prompts
//!
//! The two fixed templates of the research pipeline. Each has exactly one
//! placeholder.

// --- Research ---

/// Template for the research stage.
///
/// Placeholders: `{topic}`
pub const RESEARCH_PROMPT: &str =
    "{topic}. Provide a detailed and structured summary, and attribute each key claim to the source it comes from.";

// --- Validation / Refinement ---

/// Template for the validation and refinement stage.
///
/// Placeholders: `{research}`
pub const VALIDATION_PROMPT: &str = r#"Validate and refine the following data:

{research}

- Ensure accuracy and up-to-date information (2023 onwards).
- Trim unnecessary information while keeping key insights.
- Identify any potential bias or conflicting claims.
- If the query is regarding some national policy or health, refer to government sources such as websites that have .gov as their domain name.
- If the query is regarding some technology, refer to pages such as wikipedia.org or arxiv.org.
- If it is about some general issue, still refer to the most recently published and trusted sources.
- Structure it in a readable and concise format.
- If a cited source is unreliable, look the claim up again in a trusted source and list that source.

Provide the final refined version."#;
