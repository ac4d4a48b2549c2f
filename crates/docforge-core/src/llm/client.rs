//! GenerationClient -- owns a session against one remote model.
//!
//! Model resolution happens once, at [`GenerationClient::connect`]: the
//! backend's model listing is filtered to entries that advertise content
//! generation and the client binds to the first capable one for its
//! lifetime. Generation itself is a single attempt with the fixed sampling
//! configuration.

use docforge_types::error::GenerationError;
use docforge_types::llm::GenerationConfig;

use crate::llm::backend::GenerativeBackend;

/// A generation session bound to one resolved model.
#[derive(Debug)]
pub struct GenerationClient<B: GenerativeBackend> {
    backend: B,
    model: String,
    config: GenerationConfig,
}

impl<B: GenerativeBackend> GenerationClient<B> {
    /// Resolve a model and bind to it.
    ///
    /// Lists the models the backend's credential can access, keeps those
    /// supporting content generation, and selects the first in
    /// provider-returned order. That order is not guaranteed stable across
    /// calls; the rule is kept because changing it changes which model a
    /// multi-model account is served by.
    ///
    /// # Errors
    ///
    /// [`GenerationError::GenerationFailed`] if the listing call errors,
    /// [`GenerationError::NoCapableModel`] if nothing supports generation.
    pub async fn connect(backend: B) -> Result<Self, GenerationError> {
        let models = backend
            .list_models()
            .await
            .map_err(|e| GenerationError::GenerationFailed(e.to_string()))?;

        let total = models.len();
        let mut capable = models.into_iter().filter(|m| m.supports_generation());

        let Some(selected) = capable.next() else {
            tracing::warn!(total, "no listed model supports content generation");
            return Err(GenerationError::NoCapableModel);
        };

        tracing::debug!(total, model = %selected.name, "resolved generation model");

        Ok(Self {
            backend,
            model: selected.name,
            config: GenerationConfig::default(),
        })
    }

    /// The model this client is bound to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for `prompt`. Exactly one attempt.
    ///
    /// # Errors
    ///
    /// [`GenerationError::GenerationFailed`] with the provider's message if
    /// the call errors, [`GenerationError::EmptyGeneration`] if it succeeds
    /// but yields no usable text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let text = self
            .backend
            .generate(&self.model, prompt, &self.config)
            .await
            .map_err(|e| GenerationError::GenerationFailed(e.to_string()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GenerationError::EmptyGeneration);
        }

        Ok(trimmed.to_string())
    }
}
