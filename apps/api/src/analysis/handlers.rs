//! Axum route handlers for résumé analysis.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::analyze_resume;
use crate::analysis::AnalysisError;
use crate::errors::AppError;
use crate::preview::analysis::{project_analysis, AnalysisView};
use crate::session::handlers::load_session;
use crate::session::AnalysisState;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisState,
    /// Present only when a result is stored.
    pub view: Option<AnalysisView>,
}

impl From<AnalysisState> for AnalysisResponse {
    fn from(analysis: AnalysisState) -> Self {
        let view = analysis.result().map(project_analysis);
        Self { analysis, view }
    }
}

/// POST /api/v1/sessions/:session_id/analysis
///
/// The generation call runs outside every session lock. Blank input is
/// rejected without touching the stored outcome; any other failure replaces it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let session = load_session(&state, session_id).await?;

    match analyze_resume(&req.resume_text, state.generator.as_ref(), &state.config.llm).await {
        Ok(result) => {
            let stored = AnalysisState::Ready { result };
            session.set_analysis(stored.clone()).await;
            info!("Stored analysis for session {session_id}");
            Ok(Json(stored.into()))
        }
        Err(AnalysisError::EmptyInput) => Err(AnalysisError::EmptyInput.into()),
        Err(e) => {
            if let Some(failed) = AnalysisState::from_error(&e) {
                session.set_analysis(failed).await;
            }
            Err(e.into())
        }
    }
}

/// GET /api/v1/sessions/:session_id/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let session = load_session(&state, session_id).await?;
    Ok(Json(session.analysis().await.into()))
}

/// DELETE /api/v1/sessions/:session_id/analysis
pub async fn handle_clear_analysis(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let session = load_session(&state, session_id).await?;
    session.set_analysis(AnalysisState::Empty).await;
    Ok(Json(AnalysisState::Empty.into()))
}
