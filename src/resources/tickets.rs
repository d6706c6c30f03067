//! Tickets (`/api/v2/tickets`).
//!
//! Deleting a ticket moves it to trash; `delete(id, true)` follows up with
//! `PUT /api/v2/tickets/{id}/delete_forever`.

use std::ops::Deref;

use crate::endpoint::Endpoint;
use crate::session::RequestService;

/// URL path of the collection.
pub const PATH: &str = "/api/v2/tickets";

/// Envelope key of listings.
pub const RESOURCE_KEY: &str = "tickets";

/// Fields accepted when creating a ticket.
pub const CREATION_FIELDS: &[&str] = &[
    "name",
    "requester_id",
    "email",
    "phone",
    "subject",
    "type",
    "status",
    "priority",
    "description",
    "responder_id",
    "attachments",
    "cc_emails",
    "custom_fields",
    "due_by",
    "email_config_id",
    "fr_due_by",
    "group_id",
    "source",
    "tags",
    "assets",
    "urgency",
    "impact",
    "category",
    "sub_category",
    "item_category",
    "department_id",
];

/// Fields maintained by Freshservice.
pub const READ_ONLY_FIELDS: &[&str] = &["id", "created_at", "updated_at", "deleted", "spam"];

/// Endpoint for tickets.
#[derive(Clone)]
pub struct TicketsEndpoint<'a> {
    inner: Endpoint<'a>,
}

impl<'a> TicketsEndpoint<'a> {
    /// Creates the endpoint.
    pub fn new(service: &'a RequestService) -> Self {
        Self {
            inner: Endpoint::new(service, PATH, RESOURCE_KEY)
                .with_creation_fields(CREATION_FIELDS.iter().copied())
                .with_read_only_fields(READ_ONLY_FIELDS.iter().copied()),
        }
    }

    /// Returns the generic endpoint.
    pub fn into_inner(self) -> Endpoint<'a> {
        self.inner
    }
}

impl<'a> Deref for TicketsEndpoint<'a> {
    type Target = Endpoint<'a>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
