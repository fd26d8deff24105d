//! The session: who is logged in, and with which bearer token.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::User;
use crate::storage::{Storage, StorageError, TOKEN_KEY};

/// A consistent view of the session at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Derived from the token alone; an empty token is no token.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Single source of truth for the session.
///
/// The token is mirrored into durable storage, the user record lives in
/// memory only. Changes are broadcast through a `watch` channel so views can
/// react to logins and logouts.
pub struct AuthStore {
    state: watch::Sender<AuthState>,
    storage: Arc<dyn Storage>,
}

impl AuthStore {
    /// Restores the token persisted by a previous session, if any.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let token = storage.get_item(TOKEN_KEY);
        debug!(restored = token.is_some(), "Initialising auth store");
        let (state, _) = watch::channel(AuthState { token, user: None });
        AuthStore { state, storage }
    }

    /// Replaces the token, persisting it first. Nothing changes when the write fails.
    pub fn set_token(&self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        self.storage.set_item(TOKEN_KEY, &token)?;
        self.state.send_modify(|state| state.token = Some(token));
        info!(
            event_name = "auth.token.set",
            event_domain = "auth",
            "Session token updated"
        );
        Ok(())
    }

    pub fn set_user(&self, user: User) {
        debug!("Session user set to '{}'", user.username);
        self.state.send_modify(|state| state.user = Some(user));
    }

    /// Clears the session. Memory is cleared even if the durable entry cannot be removed.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.state.send_modify(|state| {
            state.token = None;
            state.user = None;
        });
        info!(
            event_name = "auth.logout",
            event_domain = "auth",
            "Session cleared"
        );
        self.storage.remove_item(TOKEN_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Receives every subsequent change of the session.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}
