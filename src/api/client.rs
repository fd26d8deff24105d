use std::time::{Duration, Instant};

use bytes::Bytes;
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::interceptors::{RequestInterceptor, ResponseInterceptor};
use super::services::{
    AssetService, AssignmentService, CategoryService, DashboardService, LocationService,
    MaintenanceService, UserService, VendorService,
};
use super::ApiError;
use crate::config::ApiConfig;
use crate::models::Validate;

/// The one configured HTTP client every service goes through.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Builds a client with the configured base URL and timeout and a JSON content type.
    /// No interceptors are installed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Client)?;

        info!(
            "Creating API client for {} (timeout {} ms)",
            config.base_url, config.timeout_in_ms
        );

        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        })
    }

    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        debug!("Adding request interceptor '{}'", interceptor.get_name());
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn with_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        debug!("Adding response interceptor '{}'", interceptor.get_name());
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/assets/5/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn assets(&self) -> AssetService<'_> {
        AssetService::new(self)
    }

    pub fn categories(&self) -> CategoryService<'_> {
        CategoryService::new(self)
    }

    pub fn locations(&self) -> LocationService<'_> {
        LocationService::new(self)
    }

    pub fn vendors(&self) -> VendorService<'_> {
        VendorService::new(self)
    }

    pub fn users(&self) -> UserService<'_> {
        UserService::new(self)
    }

    pub fn assignments(&self) -> AssignmentService<'_> {
        AssignmentService::new(self)
    }

    pub fn maintenance(&self) -> MaintenanceService<'_> {
        MaintenanceService::new(self)
    }

    pub fn dashboard(&self) -> DashboardService<'_> {
        DashboardService::new(self)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let bytes = self.send(Method::GET, path, None).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let bytes = self.send(Method::POST, path, Some(body)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Validate,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let bytes = self.send(Method::PUT, path, Some(body)).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// DELETE ignores whatever body the server sends back.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Bytes, ApiError> {
        let url = self.url(path);

        let mut headers = HeaderMap::new();
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut headers);
        }

        let mut request = self.http.request(method.clone(), &url).headers(headers);
        if let Some(body) = body {
            request = request.json(&body);
        }

        debug!("Sending {} request to: {}", method, url);
        let started = Instant::now();
        let result = match request.send().await {
            Ok(response) if response.status().is_success() => {
                response.bytes().await.map_err(ApiError::from)
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
            Err(e) => Err(ApiError::from(e)),
        };
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(bytes) => debug!(
                event_name = "api.request.completed",
                event_domain = "api",
                method = %method,
                url = url.as_str(),
                elapsed_ms,
                response_bytes = bytes.len(),
                "request completed"
            ),
            Err(error) => {
                warn!(
                    event_name = "api.request.failed",
                    event_domain = "api",
                    method = %method,
                    url = url.as_str(),
                    elapsed_ms,
                    status = error.status().map(|s| s.as_u16()),
                    "request failed: {}",
                    error
                );
                for interceptor in &self.response_interceptors {
                    interceptor.on_error(error);
                }
            }
        }

        result
    }
}

/// Validates then serialises a write payload.
fn encode<B: Serialize + Validate>(body: &B) -> Result<Value, ApiError> {
    body.validate()?;
    serde_json::to_value(body).map_err(ApiError::Encode)
}
