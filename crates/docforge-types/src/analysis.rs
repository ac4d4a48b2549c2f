//! Project analysis input and README response types.
//!
//! `ProjectAnalysis` is the payload produced by the external project scanner
//! (an editor extension); this service never touches a filesystem itself.
//! Field names on the wire are camelCase to match the scanner's JSON.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Structured description of a scanned codebase.
///
/// Immutable for the duration of one request and discarded afterwards.
/// Every field except `name` is defaulted so a partial payload still
/// deserializes; the prompt builder substitutes neutral markers for
/// anything missing.
///
/// # API Key Security
///
/// `api_key` is wrapped in [`SecretString`]: it is redacted in `Debug`
/// output and must never be logged or persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    /// Project name as reported by the scanner.
    pub name: String,
    /// File paths in scanner order (relative, one entry per file).
    #[serde(default)]
    pub structure: Vec<String>,
    /// Detected programming languages.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Detected frameworks and tools.
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// Total number of files scanned.
    #[serde(default)]
    pub file_count: u64,
    /// Estimated lines of code across the project.
    #[serde(default, rename = "estimatedLOC")]
    pub estimated_loc: u64,
    /// Free-form project description, if the scanner found one.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared dependencies (e.g. package.json `dependencies`).
    #[serde(default)]
    pub dependencies: Option<serde_json::Map<String, serde_json::Value>>,
    /// Declared scripts (e.g. package.json `scripts`).
    #[serde(default)]
    pub scripts: Option<serde_json::Map<String, serde_json::Value>>,
    /// Per-request API credential; falls back to the server's environment
    /// credential when absent.
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

/// Response body for a successful README generation.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeResponse {
    /// Generated markdown, non-empty, no surrounding code fence.
    pub readme: String,
}
