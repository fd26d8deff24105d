//! One service per API resource; one method per endpoint.

mod assets;
mod assignments;
mod catalog;
mod dashboard;
mod maintenance;
mod users;

pub use assets::AssetService;
pub use assignments::AssignmentService;
pub use catalog::{CategoryService, LocationService, VendorService};
pub use dashboard::DashboardService;
pub use maintenance::MaintenanceService;
pub use users::UserService;
