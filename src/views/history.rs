use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Page, View};
use crate::api::{ApiClient, ApiError};
use crate::models::{AssetAssignment, Id, MaintenanceRecord};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEvent {
    Assigned,
    Returned,
    Maintenance,
}

/// One line of the asset timeline.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub at: DateTime<Utc>,
    pub event: HistoryEvent,
    pub asset: Id,
    pub asset_tag: String,
    pub asset_name: String,
    pub summary: String,
}

/// Merges assignments and maintenance into one list, newest first.
///
/// A returned assignment yields two entries; maintenance is dated by its
/// completion, or its schedule while still open.
pub fn timeline(
    assignments: &[AssetAssignment],
    maintenance: &[MaintenanceRecord],
) -> Vec<HistoryEntry> {
    let mut entries = Vec::with_capacity(assignments.len() * 2 + maintenance.len());

    for a in assignments {
        entries.push(HistoryEntry {
            at: a.assigned_date,
            event: HistoryEvent::Assigned,
            asset: a.asset,
            asset_tag: a.asset_tag.clone(),
            asset_name: a.asset_name.clone(),
            summary: format!("Assigned to {} by {}", a.assigned_to_name, a.assigned_by_name),
        });
        if let Some(returned) = a.return_date {
            entries.push(HistoryEntry {
                at: returned,
                event: HistoryEvent::Returned,
                asset: a.asset,
                asset_tag: a.asset_tag.clone(),
                asset_name: a.asset_name.clone(),
                summary: format!("Returned by {}", a.assigned_to_name),
            });
        }
    }

    for m in maintenance {
        entries.push(HistoryEntry {
            at: m.completed_date.unwrap_or(m.scheduled_date),
            event: HistoryEvent::Maintenance,
            asset: m.asset,
            asset_tag: m.asset_tag.clone(),
            asset_name: m.asset_name.clone(),
            summary: format!("{:?} maintenance: {} ({:?})", m.maintenance_type, m.title, m.status),
        });
    }

    entries.sort_by(|a, b| b.at.cmp(&a.at));
    entries
}

pub struct HistoryView;

#[async_trait]
impl View for HistoryView {
    fn name(&self) -> &'static str {
        "HistoryView"
    }

    fn title(&self) -> &'static str {
        "History"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let assignment_service = api.assignments();
        let maintenance_service = api.maintenance();
        let (assignments, maintenance) = tokio::try_join!(
            assignment_service.get_all(),
            maintenance_service.get_all()
        )?;
        Ok(Page::History {
            entries: timeline(&assignments, &maintenance),
        })
    }
}
