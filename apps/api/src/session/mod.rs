//! Per-session editing state.
//!
//! One session holds the current résumé, the current portfolio, at most one
//! analysis outcome, and the session's credential store. Each slot has its own
//! lock, so an outstanding analysis never blocks document edits. Writes to a
//! slot are serialized in arrival order (last write wins).

pub mod handlers;
pub mod store;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::{AnalysisError, FailureKind};
use crate::auth::CredentialStore;
use crate::models::analysis::AnalysisResult;
use crate::models::document::{PortfolioDocument, ResumeDocument};
use crate::models::record::IdGenerator;
use crate::preview::portfolio::PortfolioView;
use crate::preview::resume::ResumeView;
use crate::preview::{Project, TemplateId};

// ────────────────────────────────────────────────────────────────────────────
// Document slot
// ────────────────────────────────────────────────────────────────────────────

/// Current document plus its preview. The preview is recomputed exactly
/// once per `update` or template change.
pub struct DocumentSlot<D: Project> {
    document: D,
    template: TemplateId,
    view: D::View,
    revision: u64,
}

/// Serializable copy of a slot at one revision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSnapshot<D, V> {
    pub document: D,
    pub template: TemplateId,
    pub revision: u64,
    pub preview: V,
}

impl<D: Project + Clone> DocumentSlot<D> {
    pub fn new(document: D) -> Self {
        let template = TemplateId::default();
        let view = document.project(template);
        Self {
            document,
            template,
            view,
            revision: 0,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn view(&self) -> &D::View {
        &self.view
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the document wholesale and re-projects it.
    pub fn update(&mut self, document: D) {
        self.document = document;
        self.refresh();
    }

    pub fn set_template(&mut self, template: TemplateId) {
        self.template = template;
        self.refresh();
    }

    pub fn snapshot(&self) -> SlotSnapshot<D, D::View> {
        SlotSnapshot {
            document: self.document.clone(),
            template: self.template,
            revision: self.revision,
            preview: self.view.clone(),
        }
    }

    fn refresh(&mut self) {
        self.view = self.document.project(self.template);
        self.revision += 1;
        debug!("Re-projected document at revision {}", self.revision);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis slot
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Empty,
    Ready {
        result: AnalysisResult,
    },
    Failed {
        kind: FailureKind,
        reason: String,
        raw: Option<String>,
    },
}

impl AnalysisState {
    /// The stored form of a failed attempt. Input rejected before any
    /// generation call leaves no trace.
    pub fn from_error(error: &AnalysisError) -> Option<Self> {
        error.kind().map(|kind| AnalysisState::Failed {
            kind,
            reason: error.to_string(),
            raw: error.raw().map(str::to_string),
        })
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            AnalysisState::Ready { result } => Some(result),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

pub type ResumeSnapshot = SlotSnapshot<ResumeDocument, ResumeView>;
pub type PortfolioSnapshot = SlotSnapshot<PortfolioDocument, PortfolioView>;

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    ids: IdGenerator,
    resume: Mutex<DocumentSlot<ResumeDocument>>,
    portfolio: Mutex<DocumentSlot<PortfolioDocument>>,
    analysis: Mutex<AnalysisState>,
    auth: Mutex<CredentialStore>,
}

impl Session {
    /// A fresh session seeded with the default résumé and portfolio.
    pub fn new(auth: CredentialStore) -> Self {
        let ids = IdGenerator::new();
        let resume = ResumeDocument::seed(&ids);
        let portfolio = PortfolioDocument::seed(&ids);
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            ids,
            resume: Mutex::new(DocumentSlot::new(resume)),
            portfolio: Mutex::new(DocumentSlot::new(portfolio)),
            analysis: Mutex::new(AnalysisState::Empty),
            auth: Mutex::new(auth),
        }
    }

    pub async fn resume(&self) -> ResumeSnapshot {
        self.resume.lock().await.snapshot()
    }

    pub async fn portfolio(&self) -> PortfolioSnapshot {
        self.portfolio.lock().await.snapshot()
    }

    /// Applies one edit to the résumé. `edit` receives the current document and
    /// the session's id generator and returns the replacement plus any extra output.
    pub async fn edit_resume<T>(
        &self,
        edit: impl FnOnce(&ResumeDocument, &IdGenerator) -> (ResumeDocument, T),
    ) -> (ResumeSnapshot, T) {
        let mut slot = self.resume.lock().await;
        let (next, output) = edit(slot.document(), &self.ids);
        slot.update(next);
        (slot.snapshot(), output)
    }

    pub async fn edit_portfolio<T>(
        &self,
        edit: impl FnOnce(&PortfolioDocument, &IdGenerator) -> (PortfolioDocument, T),
    ) -> (PortfolioSnapshot, T) {
        let mut slot = self.portfolio.lock().await;
        let (next, output) = edit(slot.document(), &self.ids);
        slot.update(next);
        (slot.snapshot(), output)
    }

    pub async fn set_resume_template(&self, template: TemplateId) -> ResumeSnapshot {
        let mut slot = self.resume.lock().await;
        slot.set_template(template);
        slot.snapshot()
    }

    pub async fn set_portfolio_template(&self, template: TemplateId) -> PortfolioSnapshot {
        let mut slot = self.portfolio.lock().await;
        slot.set_template(template);
        slot.snapshot()
    }

    pub async fn analysis(&self) -> AnalysisState {
        self.analysis.lock().await.clone()
    }

    /// Replaces the analysis outcome wholesale.
    pub async fn set_analysis(&self, state: AnalysisState) {
        *self.analysis.lock().await = state;
    }

    pub async fn auth(&self) -> tokio::sync::MutexGuard<'_, CredentialStore> {
        self.auth.lock().await
    }
}
