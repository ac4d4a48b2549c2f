//! Gemini generative-language API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with `generativelanguage.googleapis.com`. They are NOT the
//! provider-agnostic types from docforge-types.

use serde::{Deserialize, Serialize};

use docforge_types::llm::{GenerationConfig, ModelInfo};

/// Request body for `models/*:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn user request with the given sampling configuration.
    pub fn single_turn(prompt: &str, config: &GenerationConfig) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: config.clone(),
        }
    }
}

/// One conversation turn in a Gemini request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

/// A text part inside a request turn.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

/// Response body for `GET /v1beta/models`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// Response body for `models/*:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// A response with no candidates, no content, or only empty parts
    /// yields an empty string; the caller decides whether that is an error.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// A generation candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// The content object inside a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A text part inside a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: String,
}
