//! # Researcher
//!
//! A two-stage research assistant. A topic is sent to a generation service for
//! an initial summary, and that summary is sent back for validation and
//! refinement. The crate holds the providers, the prompt templates, the two
//! stages and the pipeline that sequences them.

pub mod constants;
pub mod errors;
pub mod export;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod stages;
pub mod types;

pub use errors::{GenerationError, TopicError};
pub use export::ExportArtifact;
pub use pipeline::{PipelinePhase, PipelineReport, ResearchPipeline};
pub use stages::{StageKind, StageOutput};
pub use types::{ProviderConfig, Topic};
