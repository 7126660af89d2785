//! Frontend Models
//!
//! Data structures matching the JaayBaan REST API payloads.

use serde::{Deserialize, Serialize};

/// Location kind, lowercase on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    House,
    Room,
    Storage,
    Shelf,
    Container,
    Box,
    Item,
    Other,
}

impl LocationType {
    pub const ALL: [LocationType; 8] = [
        LocationType::House,
        LocationType::Room,
        LocationType::Storage,
        LocationType::Shelf,
        LocationType::Container,
        LocationType::Box,
        LocationType::Item,
        LocationType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::House => "house",
            LocationType::Room => "room",
            LocationType::Storage => "storage",
            LocationType::Shelf => "shelf",
            LocationType::Container => "container",
            LocationType::Box => "box",
            LocationType::Item => "item",
            LocationType::Other => "other",
        }
    }
}

/// Full location record (matches backend serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub description: String,
    pub is_container: bool,
    pub barcode: Option<String>,
    pub quantity: u32,
    pub value: Option<f64>,
    pub cleaned_time: Option<String>,
    /// Cleaning interval in days
    pub cleaned_duration: u32,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub breadcrumb: String,
    pub children_count: u32,
    pub needs_cleaning: bool,
    #[serde(default)]
    pub images: Vec<LocationImage>,
    pub parent_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationImage {
    pub id: u32,
    pub image: String,
    pub description: Option<String>,
    pub is_primary: bool,
    pub created_at: String,
}

/// Node as returned by the `/locations/tree/` endpoint.
///
/// The server can nest `children` when asked for a full subtree; the lazy
/// tree ignores them and fetches level by level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: u32,
    pub name: String,
    pub location_type: LocationType,
    pub is_container: bool,
    pub children_count: u32,
    pub needs_cleaning: bool,
    #[serde(default)]
    pub children: Option<Vec<TreeNode>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub id: u32,
    pub name: String,
    pub location_type: LocationType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTypeInfo {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_locations: u32,
    pub containers: u32,
    pub items: u32,
    pub locations_needing_cleaning: u32,
    pub locations_with_images: u32,
    pub locations_with_barcode: u32,
    pub by_type: std::collections::HashMap<String, LocationTypeInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Query parameters for list/search endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub location_type: Option<LocationType>,
    pub needs_cleaning: Option<bool>,
    pub has_barcode: Option<bool>,
    /// `Some(None)` means "root level only"
    pub parent_id: Option<Option<u32>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateLocationData {
    pub name: String,
    pub location_type: LocationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_container: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_duration: Option<u32>,
}

/// Partial update payload; only set fields are sent
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLocationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_container: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleaned_duration: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveLocationData {
    pub new_parent_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkOperationData {
    pub operation: BulkOperation,
    pub location_ids: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_parent_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOperation {
    MarkCleaned,
    Delete,
    MoveToParent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkOperationResult {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_type_roundtrips_lowercase() {
        for ty in LocationType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            let back: LocationType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn tree_node_children_default_to_none() {
        let node: TreeNode = serde_json::from_str(
            r#"{"id":1,"name":"خانه","location_type":"house","is_container":true,"children_count":3,"needs_cleaning":false}"#,
        )
        .unwrap();
        assert_eq!(node.children, None);
        assert_eq!(node.children_count, 3);
    }
}
