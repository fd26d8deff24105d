//! Canned API payloads shared by the unit tests.

pub const ASSET: &str = r#"{
    "id": 5, "asset_tag": "LT-0005", "name": "ThinkPad T14", "description": "",
    "category": 1, "brand": "Lenovo", "model": "T14 Gen 3", "serial_number": "PF3XYZ",
    "status": "in_use", "condition": "excellent", "location": 2, "assigned_to": 7,
    "vendor": 3, "purchase_date": "2023-02-01", "purchase_cost": "1299.00",
    "invoice_number": "INV-77", "warranty_start_date": "2023-02-01",
    "warranty_end_date": "2026-01-31", "warranty_provider": "Lenovo", "notes": "",
    "qr_code": "", "current_value": null, "created_at": "2023-02-01T09:30:00Z",
    "updated_at": "2024-05-10T12:00:00Z", "category_name": "Laptops",
    "location_name": "HQ", "assigned_to_name": "Jane Doe", "vendor_name": "Lenovo",
    "is_assigned": true
}"#;

pub const SPARE_MONITOR: &str = r#"{
    "id": 6, "asset_tag": "MN-0001", "name": "Dell U2723QE", "description": "",
    "category": 2, "brand": "Dell", "model": "U2723QE", "serial_number": "",
    "status": "available", "condition": "good", "location": 2, "assigned_to": null,
    "vendor": null, "purchase_date": null, "purchase_cost": "540.00",
    "invoice_number": "", "warranty_start_date": null, "warranty_end_date": null,
    "warranty_provider": "", "notes": "", "qr_code": "", "current_value": null,
    "created_at": "2023-06-01T09:30:00Z", "updated_at": "2023-06-01T09:30:00Z",
    "category_name": "Monitors", "location_name": "HQ", "assigned_to_name": "",
    "vendor_name": "", "is_assigned": false
}"#;

pub const CATEGORY: &str = r#"{
    "id": 1, "name": "Laptops", "description": "Portable computers", "icon": "laptop",
    "is_active": true, "created_at": "2023-01-01T00:00:00Z",
    "updated_at": "2023-01-01T00:00:00Z", "children": []
}"#;

pub const LOCATION: &str = r#"{
    "id": 2, "name": "HQ", "address": "1 Main Street", "city": "Reading", "state": "",
    "country": "UK", "postal_code": "RG2 9AX", "contact_person": "Facilities",
    "contact_email": "facilities@example.org", "contact_phone": "", "is_active": true,
    "created_at": "2023-01-01T00:00:00Z", "updated_at": "2023-01-01T00:00:00Z",
    "asset_count": 41
}"#;

pub const VENDOR: &str = r#"{
    "id": 3, "name": "Lenovo", "contact_person": "", "email": "sales@lenovo.example",
    "phone": "", "address": "", "website": "https://www.lenovo.com", "notes": "",
    "is_active": true, "created_at": "2023-01-01T00:00:00Z",
    "updated_at": "2023-01-01T00:00:00Z", "asset_count": 12
}"#;

pub const USER: &str = r#"{
    "id": 7, "username": "jdoe", "email": "jdoe@example.org", "first_name": "Jane",
    "last_name": "Doe", "full_name": "Jane Doe"
}"#;

pub const ASSIGNMENT: &str = r#"{
    "id": 9, "asset": 5, "assigned_to": 7, "assigned_by": 1,
    "assigned_date": "2024-03-04T08:00:00Z", "return_date": null, "notes": "",
    "is_active": true, "asset_name": "ThinkPad T14", "asset_tag": "LT-0005",
    "assigned_to_name": "Jane Doe", "assigned_by_name": "Admin"
}"#;

pub const MAINTENANCE: &str = r#"{
    "id": 4, "asset": 5, "maintenance_type": "inspection", "title": "Battery check",
    "description": "Annual battery health check", "scheduled_date": "2024-06-01T09:00:00Z",
    "completed_date": null, "status": "scheduled", "vendor": null, "cost": null,
    "performed_by": "", "notes": "", "created_at": "2024-05-20T10:00:00Z",
    "created_by": 1, "asset_name": "ThinkPad T14", "asset_tag": "LT-0005",
    "vendor_name": "", "created_by_name": "Admin"
}"#;

pub const STATS: &str = r#"{
    "total_assets": 3, "available_assets": 1, "assigned_assets": 1,
    "maintenance_assets": 1, "total_value": "3138.00", "categories_count": 2,
    "locations_count": 1, "vendors_count": 1, "recent_assignments": [],
    "upcoming_maintenance": [{
        "id": 4, "asset": 5, "maintenance_type": "inspection", "title": "Battery check",
        "description": "Annual battery health check",
        "scheduled_date": "2024-06-01T09:00:00Z", "completed_date": null,
        "status": "scheduled", "vendor": null, "cost": null, "performed_by": "",
        "notes": "", "created_at": "2024-05-20T10:00:00Z", "created_by": 1
    }]
}"#;

pub const ALERTS: &str = r#"{"alerts": [
    {"type": "warning", "title": "Maintenance Required",
     "message": "1 assets may need maintenance scheduling", "count": 1}
]}"#;
