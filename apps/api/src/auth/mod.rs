//! Local credential store.
//!
//! Demo-grade accounts: any non-empty email/password pair is
//! accepted and nothing is verified. State is one JSON blob in a pluggable
//! key-value store. Document editing and analysis never consult it.

pub mod handlers;

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::user::User;

/// Key under which the auth blob is stored.
pub const STORAGE_KEY: &str = "jobfolio_auth";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Failed to encode auth state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Opaque string key-value persistence backing the credential store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct AuthState {
    user: Option<User>,
    token: Option<String>,
}

pub struct CredentialStore {
    store: Box<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::<MemoryStore>::default())
    }

    /// Registers and signs in a new user. A blank name defaults to the
    /// local part of the email.
    pub fn sign_up(&mut self, email: &str, password: &str, name: &str) -> Result<User, AuthError> {
        require_credentials(email, password)?;
        let name = if name.trim().is_empty() {
            default_name(email)
        } else {
            name.trim().to_string()
        };
        let user = self.start_session(email, name)?;
        info!("Signed up user {}", user.id);
        Ok(user)
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        require_credentials(email, password)?;
        let user = self.start_session(email, default_name(email))?;
        info!("Signed in user {}", user.id);
        Ok(user)
    }

    pub fn sign_out(&mut self) {
        self.store.remove(STORAGE_KEY);
    }

    pub fn current_user(&self) -> Option<User> {
        self.load().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn start_session(&mut self, email: &str, name: String) -> Result<User, AuthError> {
        let user = User {
            id: random_token(9),
            email: email.trim().to_string(),
            name,
            created_at: Utc::now(),
        };
        let state = AuthState {
            user: Some(user.clone()),
            token: Some(random_token(32)),
        };
        self.store.set(STORAGE_KEY, serde_json::to_string(&state)?);
        Ok(user)
    }

    fn load(&self) -> AuthState {
        let Some(raw) = self.store.get(STORAGE_KEY) else {
            return AuthState::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Discarding unreadable auth state: {e}");
            AuthState::default()
        })
    }
}

fn require_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

fn default_name(email: &str) -> String {
    email.trim().split('@').next().unwrap_or_default().to_string()
}

fn random_token(len: usize) -> String {
    Uuid::new_v4().simple().to_string().chars().take(len).collect()
}
