use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    /// Text-generation collaborator. Default: the HTTP `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
