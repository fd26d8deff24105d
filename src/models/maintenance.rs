use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{decimal, max_len, required, Validate, ValidationError};
use super::Id;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Preventive,
    Corrective,
    Emergency,
    Upgrade,
    Inspection,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRecord {
    pub id: Id,
    pub asset: Id,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub vendor: Option<Id>,
    pub cost: Option<String>,
    #[serde(default)]
    pub performed_by: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Id,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub asset_tag: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub created_by_name: String,
}

impl MaintenanceRecord {
    /// Still scheduled although its date has passed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == MaintenanceStatus::Scheduled && self.scheduled_date < now
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceInput {
    pub asset: Id,
    pub maintenance_type: MaintenanceType,
    pub title: String,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
    pub vendor: Option<Id>,
    pub cost: Option<String>,
    pub performed_by: String,
    pub notes: String,
    pub created_by: Id,
}

impl Validate for MaintenanceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.asset == 0 {
            return Err(ValidationError::new("asset", "is required"));
        }
        required("title", &self.title)?;
        max_len("title", &self.title, 200)?;
        required("description", &self.description)?;
        max_len("performed_by", &self.performed_by, 100)?;
        decimal("cost", self.cost.as_deref())?;
        if let Some(completed) = self.completed_date {
            if completed < self.scheduled_date {
                return Err(ValidationError::new(
                    "completed_date",
                    "is earlier than the scheduled date",
                ));
            }
        }
        if self.created_by == 0 {
            return Err(ValidationError::new("created_by", "is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> MaintenanceInput {
        MaintenanceInput {
            asset: 5,
            maintenance_type: MaintenanceType::Preventive,
            title: "Battery check".to_string(),
            description: "Annual battery health check".to_string(),
            scheduled_date: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            completed_date: None,
            status: MaintenanceStatus::Scheduled,
            vendor: None,
            cost: Some("80.00".to_string()),
            performed_by: String::new(),
            notes: String::new(),
            created_by: 1,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn completion_before_schedule_is_rejected() {
        let mut input = input();
        input.completed_date = Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
        assert_eq!(input.validate().unwrap_err().field, "completed_date");
    }

    #[test]
    fn description_is_required() {
        let mut input = input();
        input.description = " ".to_string();
        assert_eq!(input.validate().unwrap_err().field, "description");
    }

    #[test]
    fn status_wire_names() {
        let value = serde_json::to_value(MaintenanceStatus::InProgress).unwrap();
        assert_eq!(value, "in_progress");
    }

    #[test]
    fn overdue_only_when_still_scheduled() {
        let record: MaintenanceRecord = serde_json::from_str(
            r#"{"id": 4, "asset": 5, "maintenance_type": "inspection", "title": "Check",
                "description": "Visual check", "scheduled_date": "2024-01-10T09:00:00Z",
                "completed_date": null, "status": "scheduled", "vendor": null,
                "cost": null, "performed_by": "", "notes": "",
                "created_at": "2024-01-01T09:00:00Z", "created_by": 1}"#,
        )
        .unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(record.is_overdue(later));
        assert!(!record.is_overdue(earlier));

        let done = MaintenanceRecord {
            status: MaintenanceStatus::Completed,
            ..record
        };
        assert!(!done.is_overdue(later));
    }
}
