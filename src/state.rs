//! Shared application context.
//!
//! Everything a view or command needs, built once by
//! [`crate::startup::build_context`] and passed around explicitly.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::api::{ApiClient, ApiError};
use crate::auth::AuthStore;
use crate::config::ConfigV1;
use crate::navigation::Navigator;
use crate::routes::{RouteError, RouteTable};
use crate::storage::{Storage, StorageError};
use crate::views::Page;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Application context shared by all views and commands.
#[derive(Clone)]
pub struct AppContext {
    /// Configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Durable key/value storage backing the session.
    pub storage: Arc<dyn Storage>,
    /// The current session.
    pub auth: Arc<AuthStore>,
    pub navigator: Arc<dyn Navigator>,
    /// HTTP client with the bearer and 401 interceptors installed.
    pub api: Arc<ApiClient>,
    pub routes: Arc<RouteTable>,
}

impl AppContext {
    /// Navigates to `path` and loads the page of its component.
    ///
    /// An unknown path fails before anything is navigated. A 401 while
    /// loading leaves the navigator on the login page.
    pub async fn open(&self, path: &str) -> Result<Page, AppError> {
        let route = self.routes.resolve(path)?;
        self.navigator.navigate(route.path);
        let view = route.component();
        info!(
            event_name = "view.open",
            event_domain = "views",
            route = route.name,
            component = view.name(),
            "opening {}",
            view.title()
        );
        Ok(view.load(&self.api).await?)
    }
}
