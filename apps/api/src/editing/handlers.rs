//! Axum route handlers for résumé and portfolio editing.
//!
//! Every mutation answers with the new document, its revision and the
//! freshly recomputed preview.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::editing::{
    add_portfolio_skill, add_project, remove_portfolio_skill, remove_project, update_personal,
    update_profile, update_project, update_social, ResumeCollection,
};
use crate::errors::AppError;
use crate::models::document::{
    PersonalInfo, PortfolioDocument, Project, ResumeDocument, SocialLinks,
};
use crate::models::record::{IdGenerator, Record, RecordId};
use crate::preview::TemplateId;
use crate::session::handlers::load_session;
use crate::session::{PortfolioSnapshot, ResumeSnapshot};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FieldUpdate {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    /// Unknown names fall back to the default template.
    pub template: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillTagRequest {
    pub skill: String,
}

#[derive(Debug, Serialize)]
pub struct RecordAddedResponse<S> {
    pub id: RecordId,
    #[serde(flatten)]
    pub snapshot: S,
}

fn require_field(kind: &str, field: &str, allowed: &[&str]) -> Result<(), AppError> {
    if allowed.contains(&field) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unknown {kind} field '{field}'. Expected one of: {}",
            allowed.join(", ")
        )))
    }
}

/// Checks the ids of one supplied collection: no duplicates, none above
/// [`RecordId::MAX_SUPPLIED`].
fn check_ids<R: Record>(records: &[R]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let id = record.id();
        if !id.is_assignable() {
            return Err(AppError::Validation(format!(
                "{} id {id} exceeds the maximum of {}",
                R::KIND,
                RecordId::MAX_SUPPLIED
            )));
        }
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "Duplicate {} id {id}",
                R::KIND
            )));
        }
    }
    Ok(())
}

/// Reserves every supplied id so the generator never hands it out again.
fn reserve_ids<R: Record>(records: &[R], ids: &IdGenerator) {
    for record in records {
        ids.observe(record.id());
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:session_id/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    Ok(Json(session.resume().await))
}

/// PUT /api/v1/sessions/:session_id/resume
///
/// Replaces the whole document.
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(document): Json<ResumeDocument>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    check_ids(&document.experience)?;
    check_ids(&document.education)?;
    check_ids(&document.skills)?;

    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_resume(|_, ids| {
            reserve_ids(&document.experience, ids);
            reserve_ids(&document.education, ids);
            reserve_ids(&document.skills, ids);
            (document, ())
        })
        .await;
    info!("Replaced resume in session {session_id}");
    Ok(Json(snapshot))
}

/// PATCH /api/v1/sessions/:session_id/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<FieldUpdate>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    require_field("personal", &req.field, PersonalInfo::FIELDS)?;
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_resume(|doc, _| (update_personal(doc, &req.field, &req.value), ()))
        .await;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:session_id/resume/template
pub async fn handle_set_resume_template(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let template = TemplateId::parse_or_default(&req.template);
    Ok(Json(session.set_resume_template(template).await))
}

/// POST /api/v1/sessions/:session_id/resume/:collection
pub async fn handle_add_resume_record(
    State(state): State<AppState>,
    Path((session_id, collection)): Path<(Uuid, ResumeCollection)>,
) -> Result<(StatusCode, Json<RecordAddedResponse<ResumeSnapshot>>), AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, id) = session
        .edit_resume(|doc, ids| collection.add(doc, ids))
        .await;
    info!(
        "Added {} record {id} in session {session_id}",
        collection.as_str()
    );
    Ok((
        StatusCode::CREATED,
        Json(RecordAddedResponse { id, snapshot }),
    ))
}

/// PATCH /api/v1/sessions/:session_id/resume/:collection/:record_id
///
/// An unknown record id is a no-op, not an error.
pub async fn handle_update_resume_record(
    State(state): State<AppState>,
    Path((session_id, collection, record_id)): Path<(Uuid, ResumeCollection, RecordId)>,
    Json(req): Json<FieldUpdate>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    require_field(collection.as_str(), &req.field, collection.fields())?;
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_resume(|doc, _| {
            (
                collection.update_field(doc, record_id, &req.field, &req.value),
                (),
            )
        })
        .await;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:session_id/resume/:collection/:record_id
pub async fn handle_remove_resume_record(
    State(state): State<AppState>,
    Path((session_id, collection, record_id)): Path<(Uuid, ResumeCollection, RecordId)>,
) -> Result<Json<ResumeSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_resume(|doc, _| (collection.remove(doc, record_id), ()))
        .await;
    Ok(Json(snapshot))
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:session_id/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    Ok(Json(session.portfolio().await))
}

/// PUT /api/v1/sessions/:session_id/portfolio
pub async fn handle_replace_portfolio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(document): Json<PortfolioDocument>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    check_ids(&document.projects)?;

    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|_, ids| {
            reserve_ids(&document.projects, ids);
            (document, ())
        })
        .await;
    info!("Replaced portfolio in session {session_id}");
    Ok(Json(snapshot))
}

/// PATCH /api/v1/sessions/:session_id/portfolio/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<FieldUpdate>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    require_field("profile", &req.field, PortfolioDocument::PROFILE_FIELDS)?;
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (update_profile(doc, &req.field, &req.value), ()))
        .await;
    Ok(Json(snapshot))
}

/// PATCH /api/v1/sessions/:session_id/portfolio/social
pub async fn handle_update_social(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<FieldUpdate>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    require_field("social link", &req.field, SocialLinks::FIELDS)?;
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (update_social(doc, &req.field, &req.value), ()))
        .await;
    Ok(Json(snapshot))
}

/// PUT /api/v1/sessions/:session_id/portfolio/template
pub async fn handle_set_portfolio_template(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<TemplateRequest>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let template = TemplateId::parse_or_default(&req.template);
    Ok(Json(session.set_portfolio_template(template).await))
}

/// POST /api/v1/sessions/:session_id/portfolio/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<(StatusCode, Json<RecordAddedResponse<PortfolioSnapshot>>), AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, id) = session.edit_portfolio(add_project).await;
    info!("Added project {id} in session {session_id}");
    Ok((
        StatusCode::CREATED,
        Json(RecordAddedResponse { id, snapshot }),
    ))
}

/// PATCH /api/v1/sessions/:session_id/portfolio/projects/:record_id
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path((session_id, record_id)): Path<(Uuid, RecordId)>,
    Json(req): Json<FieldUpdate>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    require_field(Project::KIND, &req.field, Project::FIELDS)?;
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (update_project(doc, record_id, &req.field, &req.value), ()))
        .await;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:session_id/portfolio/projects/:record_id
pub async fn handle_remove_project(
    State(state): State<AppState>,
    Path((session_id, record_id)): Path<(Uuid, RecordId)>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (remove_project(doc, record_id), ()))
        .await;
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:session_id/portfolio/skills
pub async fn handle_add_portfolio_skill(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(req): Json<SkillTagRequest>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (add_portfolio_skill(doc, &req.skill), ()))
        .await;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/sessions/:session_id/portfolio/skills/:skill
pub async fn handle_remove_portfolio_skill(
    State(state): State<AppState>,
    Path((session_id, skill)): Path<(Uuid, String)>,
) -> Result<Json<PortfolioSnapshot>, AppError> {
    let session = load_session(&state, session_id).await?;
    let (snapshot, ()) = session
        .edit_portfolio(|doc, _| (remove_portfolio_skill(doc, &skill), ()))
        .await;
    Ok(Json(snapshot))
}
