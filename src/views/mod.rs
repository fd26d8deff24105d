//! Page components reachable from the route table.
//!
//! A view knows which endpoints feed it and turns their answers into a
//! [`Page`]. Rendering the page is left to the front end.

mod dashboard;
mod history;
mod listings;
mod reports;

use async_trait::async_trait;
use serde::Serialize;

use crate::api::{ApiClient, ApiError};
use crate::models::{
    Alert, Asset, AssetAssignment, AssetCategory, DashboardStats, Location, MaintenanceRecord,
    User, Vendor,
};

pub use dashboard::DashboardView;
pub use history::{timeline, HistoryEntry, HistoryEvent, HistoryView};
pub use listings::{
    AssetsView, AssignmentsView, CategoriesView, LocationsView, MaintenanceView, UsersView,
    VendorsView,
};
pub use reports::{summarize, ReportSummary, ReportsView};

/// A page component.
#[async_trait]
pub trait View: Send + Sync {
    /// Component name, e.g. `AssetsView`.
    fn name(&self) -> &'static str;
    fn title(&self) -> &'static str;
    async fn load(&self, api: &ApiClient) -> Result<Page, ApiError>;
}

/// The data a view loaded, ready to render.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Dashboard {
        stats: DashboardStats,
        alerts: Vec<Alert>,
    },
    Assets {
        assets: Vec<Asset>,
    },
    Assignments {
        assignments: Vec<AssetAssignment>,
    },
    Maintenance {
        records: Vec<MaintenanceRecord>,
    },
    Categories {
        categories: Vec<AssetCategory>,
    },
    Locations {
        locations: Vec<Location>,
    },
    Vendors {
        vendors: Vec<Vendor>,
    },
    Users {
        users: Vec<User>,
    },
    Reports(ReportSummary),
    History {
        entries: Vec<HistoryEntry>,
    },
}

impl Page {
    /// Number of rows the page would render.
    pub fn len(&self) -> usize {
        match self {
            Page::Dashboard { alerts, .. } => alerts.len(),
            Page::Assets { assets } => assets.len(),
            Page::Assignments { assignments } => assignments.len(),
            Page::Maintenance { records } => records.len(),
            Page::Categories { categories } => categories.len(),
            Page::Locations { locations } => locations.len(),
            Page::Vendors { vendors } => vendors.len(),
            Page::Users { users } => users.len(),
            Page::Reports(summary) => summary.by_status.len(),
            Page::History { entries } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Factories for the lazily resolved components of the route table.

pub fn assets_view() -> Box<dyn View> {
    Box::new(AssetsView)
}

pub fn assignments_view() -> Box<dyn View> {
    Box::new(AssignmentsView)
}

pub fn maintenance_view() -> Box<dyn View> {
    Box::new(MaintenanceView)
}

pub fn categories_view() -> Box<dyn View> {
    Box::new(CategoriesView)
}

pub fn locations_view() -> Box<dyn View> {
    Box::new(LocationsView)
}

pub fn vendors_view() -> Box<dyn View> {
    Box::new(VendorsView)
}

pub fn users_view() -> Box<dyn View> {
    Box::new(UsersView)
}

pub fn reports_view() -> Box<dyn View> {
    Box::new(ReportsView)
}

pub fn history_view() -> Box<dyn View> {
    Box::new(HistoryView)
}
