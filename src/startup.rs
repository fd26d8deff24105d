//! Application startup.
//!
//! Wires storage, session, navigation, the API client and the route table
//! into an [`AppContext`].

use std::sync::Arc;

use tracing::info;

use crate::api::{ApiClient, BearerTokenInterceptor, UnauthorizedInterceptor};
use crate::auth::AuthStore;
use crate::config::ConfigV1;
use crate::navigation::{HistoryNavigator, Navigator};
use crate::routes::RouteTable;
use crate::state::{AppContext, AppError};
use crate::storage::{create_storage, Storage};

/// Builds the context from `config` with a fresh [`HistoryNavigator`].
///
/// # Errors
///
/// Returns an error if the storage backend cannot be opened or the HTTP
/// client cannot be built.
pub fn build_context(config: Arc<ConfigV1>) -> Result<AppContext, AppError> {
    let storage = create_storage(&config.storage)?;
    build_context_with(config, storage, Arc::new(HistoryNavigator::new()))
}

/// Same as [`build_context`] with caller-supplied storage and navigator.
pub fn build_context_with(
    config: Arc<ConfigV1>,
    storage: Arc<dyn Storage>,
    navigator: Arc<dyn Navigator>,
) -> Result<AppContext, AppError> {
    let auth = Arc::new(AuthStore::new(storage.clone()));

    let api = ApiClient::new(&config.api)?
        .with_request_interceptor(BearerTokenInterceptor::new(storage.clone()))
        .with_response_interceptor(UnauthorizedInterceptor::new(
            auth.clone(),
            navigator.clone(),
        ));

    let routes = RouteTable::new();
    info!(
        "Client ready: {} routes, API at {}, session {}",
        routes.len(),
        api.base_url(),
        if auth.is_authenticated() {
            "restored"
        } else {
            "anonymous"
        }
    );

    Ok(AppContext {
        config,
        storage,
        auth,
        navigator,
        api: Arc::new(api),
        routes: Arc::new(routes),
    })
}
