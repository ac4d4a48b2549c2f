//! Application state wiring the agent to its concrete backend.
//!
//! The agent is generic over a backend factory; AppState pins it to the
//! Gemini implementation from docforge-infra.

use std::sync::Arc;

use docforge_core::agent::ReadmeAgent;
use docforge_infra::config;
use docforge_infra::llm::GeminiBackendFactory;

/// The agent generic pinned to the Gemini backend factory.
pub type ConcreteReadmeAgent = ReadmeAgent<GeminiBackendFactory>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<ConcreteReadmeAgent>,
}

impl AppState {
    /// Resolve the environment fallback credential and wire the agent.
    pub fn init() -> Self {
        let fallback = config::fallback_credential();
        if fallback.is_some() {
            tracing::info!(
                var = config::FALLBACK_CREDENTIAL_VAR,
                "environment fallback credential found"
            );
        } else {
            tracing::info!(
                var = config::FALLBACK_CREDENTIAL_VAR,
                "no environment fallback credential; requests must supply an API key"
            );
        }

        Self {
            agent: Arc::new(ReadmeAgent::new(GeminiBackendFactory::new(), fallback)),
        }
    }
}
