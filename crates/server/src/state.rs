//! # Application State
//!
//! Defines the shared application state (`AppState`) and the logic for
//! building it at startup. The provider client is created once here and
//! shared by every request.

use crate::config::AppConfig;
use researcher::{providers::factory::create_provider, ResearchPipeline};
use tracing::{error, info};

/// Whether the research form can be offered.
#[derive(Clone, Debug)]
pub enum PipelineAvailability {
    Ready(ResearchPipeline),
    /// The configuration is unusable; the message is shown to users in place of the form.
    Unavailable(String),
}

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pipeline: PipelineAvailability,
}

impl AppState {
    /// Wraps an already built pipeline, e.g. one backed by a test provider.
    pub fn with_pipeline(pipeline: ResearchPipeline) -> Self {
        Self {
            pipeline: PipelineAvailability::Ready(pipeline),
        }
    }

    pub fn pipeline(&self) -> Result<&ResearchPipeline, &str> {
        match &self.pipeline {
            PipelineAvailability::Ready(pipeline) => Ok(pipeline),
            PipelineAvailability::Unavailable(message) => Err(message),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// A provider that cannot be created (most often a missing API key) does not
/// abort startup: the server still runs so the message reaches the user, but
/// no pipeline exists and every research request is refused.
pub fn build_app_state(config: &AppConfig) -> AppState {
    let pipeline = match create_provider(&config.provider) {
        Ok(provider) => {
            info!(
                provider = %config.provider.provider,
                model = provider.model(),
                "Research pipeline ready."
            );
            PipelineAvailability::Ready(ResearchPipeline::from_boxed(provider))
        }
        Err(e) => {
            error!("Research pipeline unavailable: {e}");
            PipelineAvailability::Unavailable(format!(
                "The research service is not configured: {e}. Set {} (or provider.api_key in config.yml) and restart the server.",
                crate::config::API_KEY_ENV_VAR
            ))
        }
    };

    AppState { pipeline }
}
