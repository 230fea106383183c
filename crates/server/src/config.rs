//! # Application Configuration
//!
//! Defines the configuration structure for `researcher-server` and loads it
//! from an optional `config.yml` plus environment variables.
//!
//! Layers, lowest precedence first:
//! 1. Programmatic defaults (`host`, `port`, and the provider defaults).
//! 2. The YAML file, with `${VAR}` references substituted from the environment.
//! 3. `PORT` for the listening port.
//! 4. `RESEARCHER_`-prefixed variables with `__` as the nesting separator
//!    (e.g. `RESEARCHER_PROVIDER__API_KEY`).
//! 5. `GEMINI_API_KEY`, only when no key was set by the layers above.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use researcher::ProviderConfig;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// Environment variable read as the credential of last resort.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The interface to bind. Loaded from `RESEARCHER_HOST`.
    #[serde(default = "default_host")]
    pub host: String,
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The generation service both stages call.
    #[serde(default)]
    pub provider: ProviderConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Provides a default value for the `port` field if not set in the environment.
fn default_port() -> u16 {
    8501
}

impl std::fmt::Debug for AppConfig {
    // The API key is never written to logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("provider", &self.provider.provider)
            .field("api_url", &self.provider.api_url)
            .field("model_name", &self.provider.model_name)
            .field(
                "api_key",
                &self.provider.api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// With `config_path_override` the file must exist. Without it,
/// `config.yml` next to the crate manifest is used when present and skipped
/// otherwise, so a bare `GEMINI_API_KEY` is enough to run.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults.
        .set_default("host", default_host())?
        .set_default("port", i64::from(default_port()))?;

    // Layer 2: YAML file.
    let content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            } else {
                info!("'{default_path}' not found. Using defaults and environment only.");
            }
            content
        }
    };
    if let Some(content) = content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    // Layer 3: The conventional PORT variable.
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("port", port)?;
    }

    let settings = builder
        // Layer 4: Prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("RESEARCHER")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // Layer 5: Fall back to the well-known credential variable.
    let has_key = config
        .provider
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if !has_key {
        if let Ok(key) = env::var(API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                config.provider.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
