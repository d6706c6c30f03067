//! Asset types (`/api/v2/asset_types`).

use std::ops::Deref;

use crate::endpoint::Endpoint;
use crate::session::RequestService;

/// URL path of the collection.
pub const PATH: &str = "/api/v2/asset_types";

/// Envelope key of listings.
pub const RESOURCE_KEY: &str = "asset_types";

/// Endpoint for asset types.
#[derive(Clone)]
pub struct AssetTypesEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> AssetTypesEndpoint<'a> {
    /// Creates the endpoint.
    pub fn new(service: &'a RequestService) -> Self {
        Self {
            inner: Endpoint::new(service, PATH, RESOURCE_KEY),
        }
    }

    /// Returns the generic endpoint.
    pub fn into_inner(self) -> Endpoint<'a> {
        self.inner
    }
}

impl<'a> Deref for AssetTypesEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
