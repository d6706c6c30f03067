//! Asset model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An asset as returned by `GET /api/v2/assets/{display_id}`.
///
/// `type_fields` keys are generated per tenant when custom fields are added
/// (e.g. `product_7000123456`), so they stay untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Internal ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// ID shown in the UI and used in asset URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_id: Option<u64>,

    /// Asset name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Asset type the asset belongs to.
    pub asset_type_id: u64,

    /// `low`, `medium` or `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,

    /// `Discovery Agent`, `Discovery Probe` or `User`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_type: Option<String>,

    /// `permanent` or `loaner`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_tag: Option<String>,

    /// Requester the asset is used by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    /// Agent managing the asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// ISO 8601 timestamps, kept as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Asset-type specific fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_fields: Option<Map<String, Value>>,
}

impl Asset {
    /// Creates an asset with the two fields Freshservice requires.
    pub fn new(name: impl Into<String>, asset_type_id: u64) -> Self {
        Self {
            name: name.into(),
            asset_type_id,
            ..Default::default()
        }
    }

    /// Returns a custom field from `type_fields`.
    pub fn type_field(&self, key: &str) -> Option<&Value> {
        self.type_fields.as_ref().and_then(|fields| fields.get(key))
    }
}
