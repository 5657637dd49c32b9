use crate::Error;
use std::env;
use std::time::Duration;

/// Client-side deadline for one inference round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection details for the inference endpoint.
///
/// Passed explicitly to [`crate::InferenceClient::new`]; the model identity
/// and credential are immutable for the life of the client.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Bearer credential for the `Authorization` header.
    pub api_key: String,
    /// Remote model identity, e.g. an organization/model-name pair.
    pub model: String,
    /// Request timeout, [`DEFAULT_TIMEOUT`] unless overridden.
    pub timeout: Duration,
}

impl InferenceConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create configuration from the `API_KEY` and `MODEL_NAME` environment
    /// variables, failing with a message naming the missing variable.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("API_KEY")
            .map_err(|_| Error::config("API_KEY environment variable is required"))?;
        let model = env::var("MODEL_NAME")
            .map_err(|_| Error::config("MODEL_NAME environment variable is required"))?;
        Ok(Self::new(api_key, model))
    }
}
