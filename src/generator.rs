use crate::{Error, GenerationParams};

/// A text generator that turns a prompt into model output.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Generate a completion for `prompt` with the given sampling controls.
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, Error>;
}
