//! Locations (`/api/v2/locations`).

use std::ops::Deref;

use crate::endpoint::Endpoint;
use crate::session::RequestService;

/// URL path of the collection.
pub const PATH: &str = "/api/v2/locations";

/// Envelope key of listings.
pub const RESOURCE_KEY: &str = "locations";

/// Endpoint for locations.
#[derive(Clone)]
pub struct LocationsEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> LocationsEndpoint<'a> {
    /// Creates the endpoint.
    pub fn new(service: &'a RequestService) -> Self {
        Self {
            inner: Endpoint::new(service, PATH, RESOURCE_KEY),
        }
    }

    /// Binds the endpoint to one location.
    #[must_use]
    pub fn with_identifier(self, id: u64) -> Self {
        Self {
            inner: self.inner.with_identifier(id),
        }
    }

    /// Returns the generic endpoint.
    pub fn into_inner(self) -> Endpoint<'a> {
        self.inner
    }
}

impl<'a> Deref for LocationsEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
