use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{decimal, max_len, required, Validate, ValidationError};
use super::{AssetAssignment, Id, MaintenanceRecord};

/// Lifecycle state of an asset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
    InUse,
    Maintenance,
    Repair,
    Retired,
    Disposed,
    Lost,
    Stolen,
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::InUse => "In Use",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Repair => "Repair",
            AssetStatus::Retired => "Retired",
            AssetStatus::Disposed => "Disposed",
            AssetStatus::Lost => "Lost",
            AssetStatus::Stolen => "Stolen",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssetCondition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    Broken,
}

/// An asset as returned by `/assets/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: Id,
    pub asset_tag: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Id,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub location: Id,
    pub assigned_to: Option<Id>,
    pub vendor: Option<Id>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<String>,
    #[serde(default)]
    pub invoice_number: String,
    pub warranty_start_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_provider: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub qr_code: String,
    pub current_value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub assigned_to_name: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub is_assigned: bool,
}

impl Asset {
    /// True while `on` falls inside the warranty window. Open-ended windows count as covered.
    pub fn under_warranty(&self, on: NaiveDate) -> bool {
        match (self.warranty_start_date, self.warranty_end_date) {
            (None, None) => false,
            (start, end) => start.map_or(true, |s| s <= on) && end.map_or(true, |e| on <= e),
        }
    }
}

/// Writable fields of an asset, for create and update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AssetInput {
    pub asset_tag: String,
    pub name: String,
    pub description: String,
    pub category: Id,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub location: Id,
    pub assigned_to: Option<Id>,
    pub vendor: Option<Id>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<String>,
    pub invoice_number: String,
    pub warranty_start_date: Option<NaiveDate>,
    pub warranty_end_date: Option<NaiveDate>,
    pub warranty_provider: String,
    pub notes: String,
    pub qr_code: String,
    pub current_value: Option<String>,
}

impl Validate for AssetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("asset_tag", &self.asset_tag)?;
        max_len("asset_tag", &self.asset_tag, 50)?;
        required("name", &self.name)?;
        max_len("name", &self.name, 200)?;
        max_len("brand", &self.brand, 100)?;
        max_len("model", &self.model, 100)?;
        max_len("serial_number", &self.serial_number, 100)?;
        max_len("invoice_number", &self.invoice_number, 100)?;
        max_len("warranty_provider", &self.warranty_provider, 100)?;
        max_len("qr_code", &self.qr_code, 100)?;
        decimal("purchase_cost", self.purchase_cost.as_deref())?;
        decimal("current_value", self.current_value.as_deref())?;
        if let (Some(start), Some(end)) = (self.warranty_start_date, self.warranty_end_date) {
            if end < start {
                return Err(ValidationError::new(
                    "warranty_end_date",
                    "ends before the warranty starts",
                ));
            }
        }
        Ok(())
    }
}

/// Body of `POST /assets/{id}/assign/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignRequest {
    pub assigned_to: Id,
    #[serde(default)]
    pub notes: String,
}

impl Validate for AssignRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        // Primary keys start at 1, zero means the caller forgot to pick a user.
        if self.assigned_to == 0 {
            return Err(ValidationError::new("assigned_to", "is required"));
        }
        Ok(())
    }
}

/// Body of `POST /assets/{id}/unassign/`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct UnassignRequest {
    #[serde(default)]
    pub notes: String,
}

impl Validate for UnassignRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// The `{"message": ...}` acknowledgement of assign/unassign.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Everything that ever happened to one asset, newest first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AssetHistory {
    pub assignments: Vec<AssetAssignment>,
    pub maintenance: Vec<MaintenanceRecord>,
}
