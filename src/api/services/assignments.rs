use crate::api::{ApiClient, ApiError};
use crate::models::{AssetAssignment, AssignmentInput};

pub struct AssignmentService<'a> {
    client: &'a ApiClient,
}

impl<'a> AssignmentService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        AssignmentService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<AssetAssignment>, ApiError> {
        self.client.get("/assignments/").await
    }

    pub async fn create(&self, input: &AssignmentInput) -> Result<AssetAssignment, ApiError> {
        self.client.post("/assignments/", input).await
    }
}
