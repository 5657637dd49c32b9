use serde::{Deserialize, Serialize};

/// Sampling controls sent alongside the prompt.
///
/// No client-side validation is performed; out-of-range values are rejected
/// by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on the number of generated tokens.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl GenerationParams {
    pub fn max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 200,
            temperature: 0.7,
        }
    }
}

/// Request body for the text-generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub inputs: String,
    pub parameters: GenerationParams,
}

/// One element of the endpoint's success response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationChunk {
    pub generated_text: Option<String>,
}
