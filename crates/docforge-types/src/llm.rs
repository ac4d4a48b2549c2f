//! Generation model types for docforge.
//!
//! These types model the data shapes for the remote generation provider:
//! the fixed sampling configuration, the provider's model listing entries,
//! and transport-level errors.

use serde::{Deserialize, Serialize};

/// The capability a model must advertise to be usable for README generation.
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Sampling configuration for a generation call.
///
/// Fixed by the service, not caller-configurable: low temperature keeps the
/// output close to the analysis facts instead of inventing content.
/// Serialized camelCase so it can be embedded verbatim in the provider's
/// `generationConfig` request field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.9,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

/// One entry from the provider's model listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified model name (e.g. "models/gemini-2.0-flash").
    pub name: String,
    /// Generation methods this model advertises.
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this model can serve free-form content generation
    /// (as opposed to, e.g., embeddings-only models).
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
    }
}

/// Errors from the generation backend transport.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}
