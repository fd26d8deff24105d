use crate::api::{ApiClient, ApiError};
use crate::models::{Id, MaintenanceInput, MaintenanceRecord};

pub struct MaintenanceService<'a> {
    client: &'a ApiClient,
}

impl<'a> MaintenanceService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        MaintenanceService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<MaintenanceRecord>, ApiError> {
        self.client.get("/maintenance/").await
    }

    pub async fn create(&self, input: &MaintenanceInput) -> Result<MaintenanceRecord, ApiError> {
        self.client.post("/maintenance/", input).await
    }

    pub async fn update(
        &self,
        id: Id,
        input: &MaintenanceInput,
    ) -> Result<MaintenanceRecord, ApiError> {
        self.client.put(&format!("/maintenance/{}/", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/maintenance/{}/", id)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_client;
    use crate::models::fixtures;
    use crate::models::{MaintenanceInput, MaintenanceStatus, MaintenanceType};
    use chrono::{TimeZone, Utc};
    use mockito::Server;

    fn input() -> MaintenanceInput {
        MaintenanceInput {
            asset: 5,
            maintenance_type: MaintenanceType::Inspection,
            title: "Check".to_string(),
            description: "Visual check".to_string(),
            scheduled_date: Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap(),
            completed_date: None,
            status: MaintenanceStatus::Scheduled,
            vendor: None,
            cost: None,
            performed_by: String::new(),
            notes: String::new(),
            created_by: 1,
        }
    }

    #[tokio::test]
    async fn crud_endpoints() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/api/v1/itam/api/maintenance/")
            .with_status(200)
            .with_body(format!("[{}]", fixtures::MAINTENANCE))
            .create_async()
            .await;
        let create = server
            .mock("POST", "/api/v1/itam/api/maintenance/")
            .with_status(201)
            .with_body(fixtures::MAINTENANCE)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/v1/itam/api/maintenance/4/")
            .with_status(200)
            .with_body(fixtures::MAINTENANCE)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/v1/itam/api/maintenance/4/")
            .with_status(204)
            .create_async()
            .await;

        let client = test_client(&server);
        let service = client.maintenance();
        assert_eq!(service.get_all().await.unwrap()[0].id, 4);
        service.create(&input()).await.unwrap();
        service.update(4, &input()).await.unwrap();
        service.delete(4).await.unwrap();

        list.assert_async().await;
        create.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }
}
