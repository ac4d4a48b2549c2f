//! Environment-sourced configuration for docforge.
//!
//! The only ambient configuration the service reads is the fallback API
//! credential. It is resolved once at startup and injected into the agent,
//! never read ad hoc mid-request.

use secrecy::SecretString;

/// Environment variable consulted when a request carries no API key.
pub const FALLBACK_CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

/// Read the fallback credential from the process environment.
///
/// Returns `None` when the variable is unset, empty, or blank.
pub fn fallback_credential() -> Option<SecretString> {
    credential_from(std::env::var(FALLBACK_CREDENTIAL_VAR).ok())
}

/// Pure filtering step behind [`fallback_credential`], separated so it can
/// be tested without mutating process state.
fn credential_from(value: Option<String>) -> Option<SecretString> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}
