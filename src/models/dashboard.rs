use serde::{Deserialize, Serialize};

use super::{AssetAssignment, MaintenanceRecord};

/// Body of `/dashboard/stats/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_assets: u64,
    pub available_assets: u64,
    pub assigned_assets: u64,
    pub maintenance_assets: u64,
    /// Sum of purchase costs, a decimal string.
    pub total_value: String,
    pub categories_count: u64,
    pub locations_count: u64,
    pub vendors_count: u64,
    #[serde(default)]
    pub recent_assignments: Vec<AssetAssignment>,
    #[serde(default)]
    pub upcoming_maintenance: Vec<MaintenanceRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub count: u64,
}

/// Body of `/dashboard/alerts/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
}
