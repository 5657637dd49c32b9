use crate::generator::TextGenerator;
use crate::types::{GenerationChunk, GenerationParams, InferenceRequest};
use crate::{Error, InferenceConfig};
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Returned as a successful result when the service answers 2xx but the
/// response carries no generated text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response generated.";

/// Client for a hosted text-generation endpoint.
///
/// Each call is one blocking-style awaited round trip bounded by the
/// configured timeout. No retries, no caching.
pub struct InferenceClient {
    client: Client,
    config: InferenceConfig,
    base_url: String,
}

impl InferenceClient {
    /// Create a client against the default endpoint.
    pub fn new(config: InferenceConfig) -> Result<Self, Error> {
        Self::with_base_url(config, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL.
    ///
    /// Tests use this to point the client at a stub server.
    pub fn with_base_url(config: InferenceConfig, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn build_request(&self, prompt: &str, params: GenerationParams) -> InferenceRequest {
        InferenceRequest {
            inputs: prompt.to_string(),
            parameters: params,
        }
    }

    /// Print-friendly variant of [`TextGenerator::generate`]: default
    /// parameters, and failures rendered as `"Error: {message}"` so
    /// interactive callers can display the result either way.
    pub async fn generate_text(&self, prompt: &str) -> String {
        match self.generate(prompt, GenerationParams::default()).await {
            Ok(text) => text,
            Err(err) => format!("Error: {err}"),
        }
    }
}

#[async_trait::async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, Error> {
        let body = self.build_request(prompt, params);

        let response = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.config.model))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await?;
            return Err(Error::status(status, detail));
        }

        // Parse the body ourselves so decode failures surface as Error::Json
        // rather than a generic transport error.
        let payload = response.text().await?;
        let chunks: Vec<GenerationChunk> = serde_json::from_str(&payload)?;

        Ok(chunks
            .into_iter()
            .next()
            .and_then(|chunk| chunk.generated_text)
            .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string()))
    }
}
