use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::auth::CredentialStore;
use crate::session::Session;

/// Live editing sessions. Nothing outlives the process.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session seeded with the default documents and an empty,
    /// signed-out credential store.
    pub async fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new(CredentialStore::in_memory()));
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        info!("Started editing session {}", session.id);
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Session>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Ends a session, discarding its documents. Returns `false` if it did not exist.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Ended editing session {id}");
        }
        removed
    }
}
