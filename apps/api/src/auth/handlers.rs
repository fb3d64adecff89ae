//! Axum route handlers for the per-session credential store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::session::handlers::load_session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub user: Option<User>,
    pub authenticated: bool,
}

impl AuthStatus {
    fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            authenticated: true,
        }
    }
}

/// POST /api/v1/sessions/:session_id/auth/sign-up
pub async fn handle_sign_up(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<AuthStatus>), AppError> {
    let session = load_session(&state, session_id).await?;
    let user = session
        .auth()
        .await
        .sign_up(&req.email, &req.password, &req.name)?;
    Ok((StatusCode::CREATED, Json(AuthStatus::signed_in(user))))
}

/// POST /api/v1/sessions/:session_id/auth/sign-in
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<AuthStatus>, AppError> {
    let session = load_session(&state, session_id).await?;
    let user = session.auth().await.sign_in(&req.email, &req.password)?;
    Ok(Json(AuthStatus::signed_in(user)))
}

/// POST /api/v1/sessions/:session_id/auth/sign-out
pub async fn handle_sign_out(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let session = load_session(&state, session_id).await?;
    session.auth().await.sign_out();
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/sessions/:session_id/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<AuthStatus>, AppError> {
    let session = load_session(&state, session_id).await?;
    let user = session.auth().await.current_user();
    Ok(Json(AuthStatus {
        authenticated: user.is_some(),
        user,
    }))
}
