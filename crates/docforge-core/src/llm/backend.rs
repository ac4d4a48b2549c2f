//! GenerativeBackend trait definition.
//!
//! This is the port the infrastructure layer implements against the remote
//! provider's REST API. Uses native async fn in traits (RPITIT, Rust 2024
//! edition); implementations live in docforge-infra (e.g. `GeminiBackend`),
//! and tests substitute handwritten mocks.

use std::future::Future;

use docforge_types::llm::{BackendError, GenerationConfig, ModelInfo};

/// Transport to a remote text-generation provider, bound to one credential.
pub trait GenerativeBackend: Send + Sync {
    /// Enumerate the models the bound credential can access.
    fn list_models(&self) -> impl Future<Output = Result<Vec<ModelInfo>, BackendError>> + Send;

    /// Run one generation call against `model` and return the raw response
    /// text. No retries; exactly one outbound request per invocation.
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> impl Future<Output = Result<String, BackendError>> + Send;
}
