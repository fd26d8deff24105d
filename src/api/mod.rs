//! HTTP access to the ITAM API.
//!
//! [`ApiClient`] owns the configured `reqwest::Client` and the interceptor
//! chains; the per-resource services in [`services`] borrow it and map one
//! method to one endpoint.

pub mod client;
pub mod error;
pub mod interceptors;
pub mod services;

pub use client::ApiClient;
pub use error::ApiError;
pub use interceptors::{
    BearerTokenInterceptor, RequestInterceptor, ResponseInterceptor, UnauthorizedInterceptor,
};

#[cfg(test)]
pub(crate) fn test_client(server: &mockito::ServerGuard) -> ApiClient {
    use crate::config::ApiConfig;

    ApiClient::new(&ApiConfig {
        base_url: format!("{}/api/v1/itam/api", server.url()),
        timeout_in_ms: 2_000,
    })
    .unwrap()
}
