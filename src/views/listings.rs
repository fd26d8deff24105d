//! Views that show one resource collection as-is.

use async_trait::async_trait;

use super::{Page, View};
use crate::api::{ApiClient, ApiError};

pub struct AssetsView;

#[async_trait]
impl View for AssetsView {
    fn name(&self) -> &'static str {
        "AssetsView"
    }

    fn title(&self) -> &'static str {
        "Assets"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let assets = api.assets().get_all().await?;
        Ok(Page::Assets { assets })
    }
}

pub struct AssignmentsView;

#[async_trait]
impl View for AssignmentsView {
    fn name(&self) -> &'static str {
        "AssignmentsView"
    }

    fn title(&self) -> &'static str {
        "Assignments"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let assignments = api.assignments().get_all().await?;
        Ok(Page::Assignments { assignments })
    }
}

pub struct MaintenanceView;

#[async_trait]
impl View for MaintenanceView {
    fn name(&self) -> &'static str {
        "MaintenanceView"
    }

    fn title(&self) -> &'static str {
        "Maintenance"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let records = api.maintenance().get_all().await?;
        Ok(Page::Maintenance { records })
    }
}

pub struct CategoriesView;

#[async_trait]
impl View for CategoriesView {
    fn name(&self) -> &'static str {
        "CategoriesView"
    }

    fn title(&self) -> &'static str {
        "Categories"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let categories = api.categories().get_all().await?;
        Ok(Page::Categories { categories })
    }
}

pub struct LocationsView;

#[async_trait]
impl View for LocationsView {
    fn name(&self) -> &'static str {
        "LocationsView"
    }

    fn title(&self) -> &'static str {
        "Locations"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let locations = api.locations().get_all().await?;
        Ok(Page::Locations { locations })
    }
}

pub struct VendorsView;

#[async_trait]
impl View for VendorsView {
    fn name(&self) -> &'static str {
        "VendorsView"
    }

    fn title(&self) -> &'static str {
        "Vendors"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let vendors = api.vendors().get_all().await?;
        Ok(Page::Vendors { vendors })
    }
}

pub struct UsersView;

#[async_trait]
impl View for UsersView {
    fn name(&self) -> &'static str {
        "UsersView"
    }

    fn title(&self) -> &'static str {
        "Users"
    }

    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError> {
        let users = api.users().get_all().await?;
        Ok(Page::Users { users })
    }
}
