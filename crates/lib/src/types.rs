//! # Core Types
//!
//! Input and configuration types shared by the library and its consumers.

use crate::{constants::DEFAULT_MODEL, errors::TopicError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A research subject that has passed input validation.
///
/// The pipeline stages accept any string; this type exists for the inbound
/// layer, which must refuse blank input before anything is sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Accepts `input` unless it is empty or whitespace-only.
    ///
    /// The original text is kept as typed; only the emptiness check trims.
    pub fn parse(input: &str) -> Result<Self, TopicError> {
        if input.trim().is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reusable configuration for a generation provider instance.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider_kind")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where the public endpoint is used.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Required for Gemini, optional for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
}

fn default_provider_kind() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider_kind(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
        }
    }
}
