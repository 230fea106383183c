pub mod gemini;
pub mod local;

use crate::errors::GenerationError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a hosted text-generation service.
///
/// Both pipeline stages talk to the service only through this trait, so a
/// provider can be swapped (Gemini, an OpenAI-compatible server, a test mock)
/// without touching the stages.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends a single prompt and returns the text payload of the response.
    ///
    /// An empty string means the call succeeded but carried no text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// The model identifier requests are issued against.
    fn model(&self) -> &str;
}

dyn_clone::clone_trait_object!(AiProvider);
