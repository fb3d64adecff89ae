pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::auth::handlers as auth;
use crate::editing::handlers as editing;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:session_id",
            delete(session::handle_end_session),
        )
        // Résumé
        .route(
            "/api/v1/sessions/:session_id/resume",
            get(editing::handle_get_resume).put(editing::handle_replace_resume),
        )
        .route(
            "/api/v1/sessions/:session_id/resume/personal",
            patch(editing::handle_update_personal),
        )
        .route(
            "/api/v1/sessions/:session_id/resume/template",
            put(editing::handle_set_resume_template),
        )
        .route(
            "/api/v1/sessions/:session_id/resume/:collection",
            post(editing::handle_add_resume_record),
        )
        .route(
            "/api/v1/sessions/:session_id/resume/:collection/:record_id",
            patch(editing::handle_update_resume_record)
                .delete(editing::handle_remove_resume_record),
        )
        // Portfolio
        .route(
            "/api/v1/sessions/:session_id/portfolio",
            get(editing::handle_get_portfolio).put(editing::handle_replace_portfolio),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/profile",
            patch(editing::handle_update_profile),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/social",
            patch(editing::handle_update_social),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/template",
            put(editing::handle_set_portfolio_template),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/projects",
            post(editing::handle_add_project),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/projects/:record_id",
            patch(editing::handle_update_project).delete(editing::handle_remove_project),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/skills",
            post(editing::handle_add_portfolio_skill),
        )
        .route(
            "/api/v1/sessions/:session_id/portfolio/skills/:skill",
            delete(editing::handle_remove_portfolio_skill),
        )
        // Analysis
        .route(
            "/api/v1/sessions/:session_id/analysis",
            post(analysis::handle_analyze)
                .get(analysis::handle_get_analysis)
                .delete(analysis::handle_clear_analysis),
        )
        // Credential store
        .route(
            "/api/v1/sessions/:session_id/auth/sign-up",
            post(auth::handle_sign_up),
        )
        .route(
            "/api/v1/sessions/:session_id/auth/sign-in",
            post(auth::handle_sign_in),
        )
        .route(
            "/api/v1/sessions/:session_id/auth/sign-out",
            post(auth::handle_sign_out),
        )
        .route("/api/v1/sessions/:session_id/auth/me", get(auth::handle_me))
        .with_state(state)
}
