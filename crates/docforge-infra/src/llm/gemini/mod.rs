//! GeminiBackend -- concrete [`GenerativeBackend`] implementation for the
//! Google Gemini generative-language API.
//!
//! Two endpoints are used: `GET /v1beta/models` for model discovery and
//! `POST /v1beta/{model}:generateContent` for generation. Authentication is
//! the `x-goog-api-key` header, so the credential never appears in a URL.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use docforge_core::agent::BackendFactory;
use docforge_core::llm::GenerativeBackend;
use docforge_types::llm::{BackendError, GenerationConfig, ModelInfo};

use types::{GenerateContentRequest, GenerateContentResponse, ListModelsResponse};

/// Gemini REST backend bound to one API key.
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiBackend {
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Upper bound on one remote call, listing or generation.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Create a backend with the given request timeout.
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success HTTP status to a [`BackendError`].
    async fn status_error(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => BackendError::AuthenticationFailed,
            429 => BackendError::RateLimited,
            _ => BackendError::Provider {
                message: format!("HTTP {status}: {error_body}"),
            },
        }
    }
}

// GeminiBackend intentionally does NOT derive Debug; the SecretString field
// would be redacted, but omitting Debug entirely keeps the whole request
// state out of logs.

impl GenerativeBackend for GeminiBackend {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, BackendError> {
        tracing::debug!("listing available models");

        // One page is enough: accounts expose far fewer models than this,
        // and only the first capable entry is ever consulted.
        let response = self
            .client
            .get(self.url("/v1beta/models"))
            .query(&[("pageSize", "1000")])
            .header("x-goog-api-key", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| BackendError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let listing: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Deserialization(format!("failed to parse model listing: {e}")))?;

        Ok(listing.models)
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, BackendError> {
        let body = GenerateContentRequest::single_turn(prompt, config);
        tracing::debug!(model, prompt_chars = prompt.len(), "sending generation request");

        let response = self
            .client
            .post(self.url(&format!("/v1beta/{model}:generateContent")))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(generated.text())
    }
}

/// Creates [`GeminiBackend`] instances, one per request credential.
#[derive(Debug, Clone)]
pub struct GeminiBackendFactory {
    base_url: Option<String>,
    timeout: Duration,
}

impl GeminiBackendFactory {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: GeminiBackend::DEFAULT_TIMEOUT,
        }
    }

    /// Point created backends at a different host (testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for GeminiBackendFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendFactory for GeminiBackendFactory {
    type Backend = GeminiBackend;

    fn create(&self, api_key: SecretString) -> GeminiBackend {
        let backend = GeminiBackend::new(api_key, self.timeout);
        match &self.base_url {
            Some(base_url) => backend.with_base_url(base_url.clone()),
            None => backend,
        }
    }
}
