//! # AI Provider Factory
//!
//! Turns a `ProviderConfig` into a ready-to-use provider. The server calls this
//! once at startup; any error here means the pipeline cannot be offered.

use crate::{
    constants::GEMINI_API_BASE_URL,
    errors::GenerationError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// Creates the provider described by `config`.
///
/// - `gemini` requires a non-blank `api_key`; `api_url` overrides the public API root.
/// - `local` requires `api_url` (a chat completions endpoint); the key is optional.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, GenerationError> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from);

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key =
                api_key.ok_or_else(|| GenerationError::MissingApiKey(config.provider.clone()))?;
            let base_url = config.api_url.as_deref().unwrap_or(GEMINI_API_BASE_URL);
            let provider = GeminiProvider::new(base_url, api_key, config.model_name.clone())?;
            info!(
                "Configured Gemini provider with URL: {}",
                provider.api_url()
            );
            Box::new(provider)
        }
        "local" => {
            let api_url = config
                .api_url
                .clone()
                .ok_or_else(|| GenerationError::MissingApiUrl(config.provider.clone()))?;
            info!("Configured Local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                config.model_name.clone(),
            )?)
        }
        other => return Err(GenerationError::UnsupportedProvider(other.to_string())),
    };

    Ok(provider)
}
