//! Service catalog item model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An item of the service catalog (`/api/v2/service_catalog/items`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: u64,

    /// ID used when placing a request for the item.
    pub display_id: u64,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Delivery time in hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_visibility: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<u32>,

    #[serde(default)]
    pub allow_attachments: bool,

    #[serde(default)]
    pub allow_quantity: bool,

    #[serde(default)]
    pub is_bundle: bool,

    #[serde(default)]
    pub create_child: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configs: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ServiceItem {
    /// Whether the item can currently be requested.
    pub fn is_requestable(&self) -> bool {
        !self.deleted.unwrap_or(false)
    }
}
