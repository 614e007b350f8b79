//! GeminiProvider -- concrete [`CompletionProvider`] for Google Gemini.
//!
//! Sends one `generateContent` request per prompt with the API key passed as
//! the `key` query parameter, and extracts the first candidate's text.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use supportdesk_core::llm::provider::CompletionProvider;
use supportdesk_types::config::ProviderConfig;
use supportdesk_types::error::CompletionError;

use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Google Gemini completion provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with a fixed request timeout.
    pub fn new(api_key: SecretString, config: &ProviderConfig) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CompletionError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// The model this provider targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full `generateContent` URL for the configured model, without the key.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

// GeminiProvider does not derive Debug so the key and client internals stay
// out of logs.

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let body = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CompletionError::Transport(e.without_url().to_string()))?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CompletionError::Parse(format!("failed to parse response: {e}")))?;

        parsed
            .first_text()
            .map(str::to_string)
            .ok_or(CompletionError::EmptyCandidate)
    }
}
