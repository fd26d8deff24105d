//! Where the user currently is, and how to send them somewhere else.

use std::sync::{Mutex, PoisonError};

use tracing::info;

/// Path a session is sent to once the API rejects its credentials.
pub const LOGIN_PATH: &str = "/login";

/// Performs full navigations. Paths need not be in the route table.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
    fn current_path(&self) -> String;
}

/// A navigator that remembers every location it was sent to.
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    /// Starts at `/`.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    pub fn starting_at(path: &str) -> Self {
        HistoryNavigator {
            entries: Mutex::new(vec![path.to_string()]),
        }
    }

    /// Every location visited so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        info!(
            event_name = "navigation.navigate",
            event_domain = "navigation",
            from = entries.last().map(String::as_str).unwrap_or("/"),
            to = path,
            "navigating"
        );
        entries.push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }
}
