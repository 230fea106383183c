use thiserror::Error;

/// Errors raised while talking to a generation service or building a client for one.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned status {status}: {body}")]
    AiApi { status: u16, body: String },
    #[error("API key is missing for provider '{0}'")]
    MissingApiKey(String),
    #[error("api_url is required for provider '{0}'")]
    MissingApiUrl(String),
    #[error("Unsupported AI provider type '{0}'")]
    UnsupportedProvider(String),
}

impl GenerationError {
    /// Wraps a transport failure. The URL is dropped so endpoint credentials never
    /// reach the text shown to users.
    pub fn request(err: reqwest::Error) -> Self {
        GenerationError::AiRequest(err.without_url())
    }

    pub fn deserialization(err: reqwest::Error) -> Self {
        GenerationError::AiDeserialization(err.without_url())
    }
}

/// Rejection of user input before any pipeline stage runs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopicError {
    #[error("Please enter a topic to research.")]
    Empty,
}
