use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// Body of `POST /research`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchRequest {
    #[serde(default)]
    pub topic: String,
}

/// Result of `POST /research`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub text: String,
}

/// Body of `POST /research/download`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub text: String,
}

/// Fields of the HTML form posted to `/`.
#[derive(Debug, Deserialize)]
pub struct ResearchForm {
    #[serde(default)]
    pub topic: String,
}
