//! README generation error taxonomy.

use thiserror::Error;

/// Failures of the README generation pipeline.
///
/// All variants propagate unmodified to the HTTP adapter; none are retried
/// or recovered internally.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No usable API credential at call time. Raised before any network
    /// activity so the caller never sees a confusing downstream auth error.
    #[error(
        "no API key provided; supply one in the request or set the GEMINI_API_KEY environment variable"
    )]
    MissingCredential,

    /// Authenticated, but the account exposes no model that supports
    /// content generation. Fatal per call, no fallback.
    #[error("no available model supports content generation")]
    NoCapableModel,

    /// The remote call itself errored (network, auth, quota, malformed
    /// request). Carries the provider's message for diagnosis.
    #[error("generation request failed: {0}")]
    GenerationFailed(String),

    /// The call succeeded transport-wise but produced no usable text.
    /// Distinct from a transport failure; never surfaced as success.
    #[error("model returned an empty response")]
    EmptyGeneration,
}
