//! Typed records exchanged with the ITAM API.
//!
//! Read models mirror what the API returns, including the read-only
//! convenience fields (`category_name`, `asset_tag`, ...). Write payloads
//! carry only the writable fields and implement [`Validate`].

pub mod assignment;
pub mod asset;
pub mod catalog;
pub mod dashboard;
pub mod maintenance;
pub mod user;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use assignment::{AssetAssignment, AssignmentInput};
pub use asset::{
    Asset, AssetCondition, AssetHistory, AssetInput, AssetStatus, AssignRequest, MessageResponse,
    UnassignRequest,
};
pub use catalog::{AssetCategory, CategoryInput, Location, LocationInput, Vendor, VendorInput};
pub use dashboard::{Alert, AlertKind, AlertsResponse, DashboardStats};
pub use maintenance::{MaintenanceInput, MaintenanceRecord, MaintenanceStatus, MaintenanceType};
pub use user::User;
pub use validate::{Validate, ValidationError};

/// Primary keys are plain integers on the wire.
pub type Id = u64;
