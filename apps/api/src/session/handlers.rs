//! Axum route handlers for session lifecycle.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{PortfolioSnapshot, ResumeSnapshot, Session};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume: ResumeSnapshot,
    pub portfolio: PortfolioSnapshot,
}

/// Looks up a live session or fails with 404.
pub async fn load_session(state: &AppState, id: Uuid) -> Result<Arc<Session>, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let session = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.id,
            created_at: session.created_at,
            resume: session.resume().await,
            portfolio: session.portfolio().await,
        }),
    )
}

/// DELETE /api/v1/sessions/:session_id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(session_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {session_id} not found")))
    }
}
