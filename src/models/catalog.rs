//! Reference data: categories, locations and vendors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{email, max_len, required, url, Validate, ValidationError};
use super::Id;

fn active() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetCategory {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Active sub-categories, when the server nests them.
    #[serde(default)]
    pub children: Vec<AssetCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
}

impl Default for CategoryInput {
    fn default() -> Self {
        CategoryInput {
            name: String::new(),
            description: String::new(),
            icon: String::new(),
            is_active: true,
        }
    }
}

impl Validate for CategoryInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        max_len("name", &self.name, 100)?;
        max_len("icon", &self.icon, 50)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub asset_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LocationInput {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub is_active: bool,
}

impl Default for LocationInput {
    fn default() -> Self {
        LocationInput {
            name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            country: String::new(),
            postal_code: String::new(),
            contact_person: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            is_active: true,
        }
    }
}

impl Validate for LocationInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        max_len("name", &self.name, 100)?;
        max_len("city", &self.city, 100)?;
        max_len("state", &self.state, 100)?;
        max_len("country", &self.country, 100)?;
        max_len("postal_code", &self.postal_code, 20)?;
        max_len("contact_person", &self.contact_person, 100)?;
        email("contact_email", &self.contact_email)?;
        max_len("contact_phone", &self.contact_phone, 20)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub asset_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VendorInput {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub notes: String,
    pub is_active: bool,
}

impl Default for VendorInput {
    fn default() -> Self {
        VendorInput {
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            website: String::new(),
            notes: String::new(),
            is_active: true,
        }
    }
}

impl Validate for VendorInput {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        max_len("name", &self.name, 100)?;
        max_len("contact_person", &self.contact_person, 100)?;
        email("email", &self.email)?;
        max_len("phone", &self.phone, 20)?;
        url("website", &self.website)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_without_children_decodes() {
        let category: AssetCategory = serde_json::from_str(
            r#"{"id": 1, "name": "Laptops", "description": "", "icon": "laptop",
                "is_active": true, "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(category.children.is_empty());
    }

    #[test]
    fn location_carries_asset_count() {
        let location: Location = serde_json::from_str(
            r#"{"id": 2, "name": "HQ", "city": "Reading", "asset_count": 41,
                "created_at": "2024-01-01T00:00:00Z", "updated_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(location.asset_count, 41);
        assert!(location.is_active);
    }

    #[test]
    fn category_rules() {
        let input = CategoryInput {
            name: "Monitors".to_string(),
            icon: "m".repeat(51),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err().field, "icon");
    }

    #[test]
    fn location_rules() {
        let input = LocationInput {
            name: "HQ".to_string(),
            postal_code: "RG2 9AX".to_string(),
            contact_email: "facilities".to_string(),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err().field, "contact_email");
    }

    #[test]
    fn vendor_rules() {
        let mut input = VendorInput {
            name: "Lenovo".to_string(),
            website: "www.lenovo.com".to_string(),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err().field, "website");
        input.website = "https://www.lenovo.com".to_string();
        assert!(input.validate().is_ok());
        input.name.clear();
        assert_eq!(input.validate().unwrap_err().field, "name");
    }
}
