//! Application error type mapping generation failures to HTTP responses.
//!
//! The pipeline's error taxonomy crosses the transport boundary as a
//! machine-readable code next to a single human-readable message. A missing
//! credential is the caller's to fix (400); everything else is an upstream
//! failure (502).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use docforge_types::error::GenerationError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// README generation failures.
    Generation(GenerationError),
}

impl From<GenerationError> for AppError {
    fn from(e: GenerationError) -> Self {
        AppError::Generation(e)
    }
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Generation(GenerationError::MissingCredential) => {
                (StatusCode::BAD_REQUEST, "MISSING_CREDENTIAL")
            }
            AppError::Generation(GenerationError::NoCapableModel) => {
                (StatusCode::BAD_GATEWAY, "NO_CAPABLE_MODEL")
            }
            AppError::Generation(GenerationError::GenerationFailed(_)) => {
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED")
            }
            AppError::Generation(GenerationError::EmptyGeneration) => {
                (StatusCode::BAD_GATEWAY, "EMPTY_GENERATION")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let AppError::Generation(err) = &self;

        let body = json!({
            "error": {
                "code": code,
                "message": err.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
