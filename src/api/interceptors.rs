//! Hooks run on every outgoing request and every failed response.

use std::sync::Arc;

use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{info, warn};

use super::ApiError;
use crate::auth::AuthStore;
use crate::navigation::{Navigator, LOGIN_PATH};
use crate::storage::{Storage, TOKEN_KEY};

/// Adjusts the headers of an outgoing request. Must not fail.
pub trait RequestInterceptor: Send + Sync {
    fn get_name(&self) -> &str;
    fn on_request(&self, headers: &mut HeaderMap);
}

/// Observes a failed call before the error reaches the caller.
pub trait ResponseInterceptor: Send + Sync {
    fn get_name(&self) -> &str;
    fn on_error(&self, error: &ApiError);
}

/// Sends the persisted token as a bearer credential.
///
/// The token is read from durable storage on every request, so a login in
/// another component is picked up without rewiring the client.
pub struct BearerTokenInterceptor {
    storage: Arc<dyn Storage>,
}

impl BearerTokenInterceptor {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        BearerTokenInterceptor { storage }
    }
}

impl RequestInterceptor for BearerTokenInterceptor {
    fn get_name(&self) -> &str {
        "bearer-token"
    }

    fn on_request(&self, headers: &mut HeaderMap) {
        let Some(token) = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return;
        };
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!(
                event_name = "api.auth.token_unusable",
                event_domain = "api",
                "Stored token cannot be sent as a header; request goes out unauthenticated"
            ),
        }
    }
}

/// Ends the session and sends the user to the login page on HTTP 401.
pub struct UnauthorizedInterceptor {
    auth: Arc<AuthStore>,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedInterceptor {
    pub fn new(auth: Arc<AuthStore>, navigator: Arc<dyn Navigator>) -> Self {
        UnauthorizedInterceptor { auth, navigator }
    }
}

impl ResponseInterceptor for UnauthorizedInterceptor {
    fn get_name(&self) -> &str {
        "unauthorized-redirect"
    }

    fn on_error(&self, error: &ApiError) {
        if !error.is_unauthorized() {
            return;
        }
        info!(
            event_name = "api.auth.rejected",
            event_domain = "api",
            "Credentials rejected; clearing session and redirecting to {}",
            LOGIN_PATH
        );
        if let Err(e) = self.auth.logout() {
            warn!("Failed to remove the stored token: {}", e);
        }
        self.navigator.navigate(LOGIN_PATH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::HistoryNavigator;
    use crate::storage::MemoryStorage;
    use http::StatusCode;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn bearer_header_from_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "abc123").unwrap();
        let interceptor = BearerTokenInterceptor::new(storage);

        let mut headers = HeaderMap::new();
        interceptor.on_request(&mut headers);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc123");
        assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn no_token_no_header() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let interceptor = BearerTokenInterceptor::new(storage.clone());

        let mut headers = HeaderMap::new();
        interceptor.on_request(&mut headers);
        assert!(headers.get(AUTHORIZATION).is_none());

        storage.set_item(TOKEN_KEY, "").unwrap();
        interceptor.on_request(&mut headers);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn unusable_token_is_skipped() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "line\nbreak").unwrap();
        let interceptor = BearerTokenInterceptor::new(storage);

        let mut headers = HeaderMap::new();
        interceptor.on_request(&mut headers);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn unauthorized_logs_out_and_redirects() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let auth = Arc::new(AuthStore::new(storage.clone()));
        auth.set_token("expired").unwrap();
        let navigator = Arc::new(HistoryNavigator::starting_at("/assets"));
        let interceptor = UnauthorizedInterceptor::new(auth.clone(), navigator.clone());

        interceptor.on_error(&status_error(StatusCode::UNAUTHORIZED));

        assert!(!auth.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY), None);
        assert_eq!(navigator.current_path(), LOGIN_PATH);
    }

    #[test]
    fn other_errors_leave_session_alone() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let auth = Arc::new(AuthStore::new(storage.clone()));
        auth.set_token("valid").unwrap();
        let navigator = Arc::new(HistoryNavigator::starting_at("/assets"));
        let interceptor = UnauthorizedInterceptor::new(auth.clone(), navigator.clone());

        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::FORBIDDEN,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            interceptor.on_error(&status_error(status));
        }

        assert!(auth.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("valid"));
        assert_eq!(navigator.current_path(), "/assets");
    }
}
