//! Ticket form fields (`/api/v2/ticket_form_fields`).
//!
//! The listing envelope is `ticket_fields`, not the path name.

use std::ops::Deref;

use crate::endpoint::Endpoint;
use crate::session::RequestService;

/// URL path of the collection.
pub const PATH: &str = "/api/v2/ticket_form_fields";

/// Envelope key of listings.
pub const RESOURCE_KEY: &str = "ticket_fields";

/// Endpoint for the ticket form field definitions.
#[derive(Clone)]
pub struct TicketFormFieldsEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> TicketFormFieldsEndpoint<'a> {
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

impl<'a> Deref for TicketFormFieldsEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
