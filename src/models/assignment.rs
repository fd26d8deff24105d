use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{Validate, ValidationError};
use super::Id;

/// Who held an asset, and when.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetAssignment {
    pub id: Id,
    pub asset: Id,
    pub assigned_to: Id,
    pub assigned_by: Id,
    pub assigned_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    pub is_active: bool,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub assigned_to_name: String,
    #[serde(default)]
    pub assigned_by_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssignmentInput {
    pub asset: Id,
    pub assigned_to: Id,
    pub assigned_by: Id,
    pub return_date: Option<DateTime<Utc>>,
    pub notes: String,
    pub is_active: bool,
}

impl Validate for AssignmentInput {
    fn validate(&self) -> Result<(), ValidationError> {
        for (field, id) in [
            ("asset", self.asset),
            ("assigned_to", self.assigned_to),
            ("assigned_by", self.assigned_by),
        ] {
            if id == 0 {
                return Err(ValidationError::new(field, "is required"));
            }
        }
        Ok(())
    }
}
