//! Assets (`/api/v2/assets`).
//!
//! Assets are addressed by their `display_id`.

use std::ops::Deref;

use reqwest::Method;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::FsError;
use crate::models::{from_envelope, from_items, Asset};
use crate::session::RequestService;

/// URL path of the assets collection.
pub const PATH: &str = "/api/v2/assets";

/// Envelope key of asset listings.
pub const RESOURCE_KEY: &str = "assets";

/// Envelope key of a single asset.
pub const ITEM_KEY: &str = "asset";

/// Fields Freshservice sets itself and rejects on input.
pub const READ_ONLY_FIELDS: [&str; 5] = [
    "id",
    "display_id",
    "author_type",
    "created_at",
    "updated_at",
];

/// Endpoint for assets.
#[derive(Clone)]
pub struct AssetsEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> AssetsEndpoint<'a> {
    /// Creates the assets endpoint.
    pub fn new(service: &'a RequestService) -> Self {
        Self {
            inner: Endpoint::new(service, PATH, RESOURCE_KEY)
                .with_read_only_fields(READ_ONLY_FIELDS),
        }
    }

    /// Binds the endpoint to one asset.
    #[must_use]
    pub fn with_identifier(self, display_id: u64) -> Self {
        Self {
            inner: self.inner.with_identifier(display_id),
        }
    }

    /// Returns the generic endpoint.
    pub fn into_inner(self) -> Endpoint<'a> {
        self.inner
    }

    /// Fetches one asset as a typed model.
    pub fn get_asset(&self, display_id: u64) -> Result<Asset, FsError> {
        from_envelope(self.get(display_id)?, ITEM_KEY)
    }

    /// Fetches every asset as typed models, including `type_fields`.
    pub fn all_assets(&self) -> Result<Vec<Asset>, FsError> {
        from_items(self.collect_all(Some("include=type_fields"))?)
    }

    /// Creates an asset from a typed model, gated by the creation flag.
    pub fn create_asset(&self, asset: &Asset) -> Result<Option<Value>, FsError> {
        let data = serde_json::to_value(asset)?;
        self.create_guarded(data)
    }

    /// Lists the requests (tickets, changes, ...) associated with an asset.
    pub fn get_associated_requests(&self, display_id: u64) -> Result<Value, FsError> {
        let url = self.action_url(display_id, "requests")?;
        self.request_service().send_request(Method::GET, &url, None)
    }

    /// Restores a deleted (trashed) asset.
    pub fn restore(&self, display_id: u64) -> Result<Value, FsError> {
        let url = self.action_url(display_id, "restore")?;
        self.request_service().send_request(Method::PUT, &url, None)
    }
}

impl<'a> Deref for AssetsEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
