use async_trait::async_trait;

use super::{Page, View};
use crate::api::{ApiClient, ApiError};

/// Landing page: headline numbers and open alerts.
pub struct DashboardView;

#[async_trait]
impl View for DashboardView {
    fn name(&self) -> &'static str {
        "DashboardView"
    }

    fn title(&self) -> &'static str {
        "Dashboard"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let dashboard = api.dashboard();
        let (stats, alerts) = tokio::try_join!(dashboard.get_stats(), dashboard.get_alerts())?;
        Ok(Page::Dashboard { stats, alerts })
    }
}
