#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use itam_client::config::{config_from_str, ConfigV1};
use itam_client::navigation::HistoryNavigator;
use itam_client::startup::build_context_with;
use itam_client::state::AppContext;
use itam_client::storage::{MemoryStorage, Storage};
use mockito::{Mock, ServerGuard};

pub const API_PREFIX: &str = "/api/v1/itam/api";

const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
api:
  base_url: "__BASE_URL__"
  timeout_in_ms: 2000
storage:
  type: "memory"
"#;

pub const STATS: &str = r#"{
    "total_assets": 1, "available_assets": 1, "assigned_assets": 0,
    "maintenance_assets": 0, "total_value": "540.00", "categories_count": 1,
    "locations_count": 1, "vendors_count": 0, "recent_assignments": [],
    "upcoming_maintenance": []
}"#;

pub const ALERTS: &str = r#"{"alerts": []}"#;

pub const MONITOR: &str = r#"[{
    "id": 6, "asset_tag": "MN-0001", "name": "Dell U2723QE", "description": "",
    "category": 2, "brand": "Dell", "model": "U2723QE", "serial_number": "",
    "status": "available", "condition": "good", "location": 2, "assigned_to": null,
    "vendor": null, "purchase_date": null, "purchase_cost": "540.00",
    "invoice_number": "", "warranty_start_date": null, "warranty_end_date": null,
    "warranty_provider": "", "notes": "", "qr_code": "", "current_value": null,
    "created_at": "2023-06-01T09:30:00Z", "updated_at": "2023-06-01T09:30:00Z",
    "category_name": "Monitors", "location_name": "HQ", "assigned_to_name": "",
    "vendor_name": "", "is_assigned": false
}]"#;

/// Config pointing the API client at the mock server.
pub fn load_test_config(server: &ServerGuard) -> ConfigV1 {
    let yaml = TEST_CONFIG.replace("__BASE_URL__", &format!("{}{}", server.url(), API_PREFIX));
    config_from_str(&yaml).expect("test config should parse")
}

pub fn build_ctx(
    server: &ServerGuard,
    storage: Arc<dyn Storage>,
) -> (AppContext, Arc<HistoryNavigator>) {
    let navigator = Arc::new(HistoryNavigator::new());
    let ctx = build_context_with(
        Arc::new(load_test_config(server)),
        storage,
        navigator.clone(),
    )
    .expect("context should build");
    (ctx, navigator)
}

pub fn build_memory_ctx(server: &ServerGuard) -> (AppContext, Arc<HistoryNavigator>) {
    build_ctx(server, Arc::new(MemoryStorage::new()))
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

/// A GET endpoint answering 200 with `body`.
pub async fn mock_get(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", endpoint(path).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Serves every list endpoint the views read from.
pub async fn mock_all_endpoints(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    mocks.push(mock_get(server, "/dashboard/stats/", STATS).await);
    mocks.push(mock_get(server, "/dashboard/alerts/", ALERTS).await);
    mocks.push(mock_get(server, "/assets/", MONITOR).await);
    for path in [
        "/assignments/",
        "/maintenance/",
        "/categories/",
        "/locations/",
        "/vendors/",
        "/users/",
    ] {
        mocks.push(mock_get(server, path, "[]").await);
    }
    mocks
}

pub fn storage_path(dir: &Path) -> std::path::PathBuf {
    dir.join("session").join("storage.json")
}
