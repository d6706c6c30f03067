//! Service catalog items (`/api/v2/service_catalog/items`).
//!
//! Creating against a service item means placing a service request for it:
//! `POST /api/v2/service_catalog/items/{display_id}/place_request`.

use std::ops::Deref;

use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::FsError;
use crate::models::{from_items, ServiceItem};
use crate::session::RequestService;

/// URL path of the service catalog.
pub const PATH: &str = "/api/v2/service_catalog/items";

/// Envelope key of service item listings.
pub const RESOURCE_KEY: &str = "service_items";

/// Action appended to the item URL when placing a request.
pub const CREATE_COMMAND: &str = "place_request";

/// Fields accepted by `place_request`.
pub const CREATION_FIELDS: [&str; 5] = [
    "quantity",
    "requested_for",
    "email",
    "custom_fields",
    "parent_ticket_id",
];

/// Endpoint for service catalog items.
#[derive(Clone)]
pub struct ServiceItemsEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> ServiceItemsEndpoint<'a> {
    /// Creates the service catalog endpoint.
    pub fn new(service: &'a RequestService) -> Self {
        Self {
            inner: Endpoint::new(service, PATH, RESOURCE_KEY)
                .with_creation_fields(CREATION_FIELDS)
                .with_create_command(CREATE_COMMAND),
        }
    }

    /// Creates the endpoint for one item, addressed by `display_id`.
    pub fn for_item(service: &'a RequestService, display_id: u64) -> Self {
        Self {
            inner: Self::new(service).inner.with_identifier(display_id),
        }
    }

    /// Returns the generic endpoint.
    pub fn into_inner(self) -> Endpoint<'a> {
        self.inner
    }

    /// Fetches the whole catalog as typed models.
    pub fn all_items(&self) -> Result<Vec<ServiceItem>, FsError> {
        from_items(self.collect_all(None)?)
    }

    /// Places a service request for the bound item.
    ///
    /// Only sent when `ALLOW_FS_CREATE_REQUESTS` is enabled on the service;
    /// otherwise returns `Ok(None)`.
    pub fn place_request(&self, data: Value) -> Result<Option<Value>, FsError> {
        if self.identifier().is_none() {
            return Err(FsError::validation(
                "place_request needs an item display_id; use ServiceItemsEndpoint::for_item",
            ));
        }
        self.create_guarded(data)
    }
}

impl<'a> Deref for ServiceItemsEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
