//! Categories, locations and vendors share the same four endpoints.

use crate::api::{ApiClient, ApiError};
use crate::models::{
    AssetCategory, CategoryInput, Id, Location, LocationInput, Vendor, VendorInput,
};

pub struct CategoryService<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoryService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        CategoryService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<AssetCategory>, ApiError> {
        self.client.get("/categories/").await
    }

    pub async fn create(&self, input: &CategoryInput) -> Result<AssetCategory, ApiError> {
        self.client.post("/categories/", input).await
    }

    pub async fn update(&self, id: Id, input: &CategoryInput) -> Result<AssetCategory, ApiError> {
        self.client.put(&format!("/categories/{}/", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/categories/{}/", id)).await
    }
}

pub struct LocationService<'a> {
    client: &'a ApiClient,
}

impl<'a> LocationService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        LocationService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, ApiError> {
        self.client.get("/locations/").await
    }

    pub async fn create(&self, input: &LocationInput) -> Result<Location, ApiError> {
        self.client.post("/locations/", input).await
    }

    pub async fn update(&self, id: Id, input: &LocationInput) -> Result<Location, ApiError> {
        self.client.put(&format!("/locations/{}/", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/locations/{}/", id)).await
    }
}

pub struct VendorService<'a> {
    client: &'a ApiClient,
}

impl<'a> VendorService<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        VendorService { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Vendor>, ApiError> {
        self.client.get("/vendors/").await
    }

    pub async fn create(&self, input: &VendorInput) -> Result<Vendor, ApiError> {
        self.client.post("/vendors/", input).await
    }

    pub async fn update(&self, id: Id, input: &VendorInput) -> Result<Vendor, ApiError> {
        self.client.put(&format!("/vendors/{}/", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete(&format!("/vendors/{}/", id)).await
    }
}
