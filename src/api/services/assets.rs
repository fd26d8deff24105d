use crate::api::{ApiClient, ApiError};
use crate::models::{
    Asset, AssetHistory, AssetInput, AssignRequest, Id, MessageResponse, UnassignRequest,
};

/// `/assets/` and its assign/unassign/history actions.
pub struct AssetService<'a> {
    client: &'a ApiClient,
}

impl<'a> AssetService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        AssetService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Asset>, ApiError> {
        self.client.get("/assets/").await
    }

    pub async fn get_by_id(&self, id: Id) -> Result<Asset, ApiError> {
        self.client.get(&format!("/assets/{}/", id)).await
    }

    pub async fn create(&self, input: &AssetInput) -> Result<Asset, ApiError> {
        self.client.post("/assets/", input).await
    }

    pub async fn update(&self, id: Id, input: &AssetInput) -> Result<Asset, ApiError> {
        self.client.put(&format!("/assets/{}/", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/assets/{}/", id)).await
    }

    pub async fn assign(&self, id: Id, request: &AssignRequest) -> Result<MessageResponse, ApiError> {
        self.client
            .post(&format!("/assets/{}/assign/", id), request)
            .await
    }

    pub async fn unassign(
        &self,
        id: Id,
        request: &UnassignRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .post(&format!("/assets/{}/unassign/", id), request)
            .await
    }

    pub async fn get_history(&self, id: Id) -> Result<AssetHistory, ApiError> {
        self.client.get(&format!("/assets/{}/history/", id)).await
    }
}
