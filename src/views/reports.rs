use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use super::{Page, View};
use crate::api::{ApiClient, ApiError};
use crate::models::{Asset, AssetStatus, DashboardStats};

/// Inventory broken down for reporting.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub total_assets: usize,
    /// Sum of purchase costs as reported by the server.
    pub total_value: String,
    pub by_status: BTreeMap<AssetStatus, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_location: BTreeMap<String, usize>,
    pub under_warranty: usize,
}

/// Counts `assets` per status, category and location as of `today`.
pub fn summarize(assets: &[Asset], stats: &DashboardStats, today: NaiveDate) -> ReportSummary {
    let mut summary = ReportSummary {
        total_assets: assets.len(),
        total_value: stats.total_value.clone(),
        ..Default::default()
    };
    for asset in assets {
        *summary.by_status.entry(asset.status).or_default() += 1;
        *summary
            .by_category
            .entry(label_or_id(&asset.category_name, asset.category))
            .or_default() += 1;
        *summary
            .by_location
            .entry(label_or_id(&asset.location_name, asset.location))
            .or_default() += 1;
        if asset.under_warranty(today) {
            summary.under_warranty += 1;
        }
    }
    summary
}

fn label_or_id(name: &str, id: u64) -> String {
    if name.is_empty() {
        format!("#{}", id)
    } else {
        name.to_string()
    }
}

pub struct ReportsView;

#[async_trait]
impl View for ReportsView {
    fn name(&self) -> &'static str {
        "ReportsView"
    }

    fn title(&self) -> &'static str {
        "Reports"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let asset_service = api.assets();
        let dashboard = api.dashboard();
        let (assets, stats) = tokio::try_join!(asset_service.get_all(), dashboard.get_stats())?;
        Ok(Page::Reports(summarize(
            &assets,
            &stats,
            Utc::now().date_naive(),
        )))
    }
}
