//! README generation handler.

use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use docforge_types::analysis::{ProjectAnalysis, ReadmeResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /generate-readme - Generate a README from a project analysis.
///
/// The request-lifecycle log lines carry the project name and sizes, never
/// the credential.
pub async fn generate_readme(
    State(state): State<AppState>,
    Json(analysis): Json<ProjectAnalysis>,
) -> Result<Json<ReadmeResponse>, AppError> {
    let request_id = Uuid::now_v7();

    tracing::info!(
        %request_id,
        project = %analysis.name,
        files = analysis.file_count,
        loc = analysis.estimated_loc,
        "README generation requested"
    );

    let readme = state.agent.generate(&analysis).await.inspect_err(|e| {
        tracing::warn!(%request_id, error = %e, "README generation failed");
    })?;

    tracing::info!(%request_id, chars = readme.len(), "README generated");

    Ok(Json(ReadmeResponse { readme }))
}
