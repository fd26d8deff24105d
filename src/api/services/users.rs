use crate::api::{ApiClient, ApiError};
use crate::models::User;

/// Read-only: accounts are managed on the server.
pub struct UserService<'a> {
    client: &'a ApiClient,
}

impl<'a> UserService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        UserService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, ApiError> {
        self.client.get("/users/").await
    }
}
