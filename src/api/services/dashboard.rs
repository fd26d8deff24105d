use crate::api::{ApiClient, ApiError};
use crate::models::{Alert, AlertsResponse, DashboardStats};

pub struct DashboardService<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        DashboardService { client }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.client.get("/dashboard/stats/").await
    }

    /// The alerts, unwrapped from their `{"alerts": [...]}` envelope.
    pub async fn get_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        let response: AlertsResponse = self.client.get("/dashboard/alerts/").await?;
        Ok(response.alerts)
    }
}
