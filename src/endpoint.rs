//! Generic CRUD endpoint for Freshservice resources.
//!
//! An [`Endpoint`] is a small piece of configuration (URL path, envelope key,
//! field allow/deny lists) bound to a [`RequestService`]. The per-resource
//! types in [`crate::resources`] only fill in that configuration.
//!
//! # Payload sanitization
//!
//! Outbound payloads for `create` go through [`sanitize_for_create`]:
//!
//! 1. keys whose value is `null` are removed, recursively
//! 2. if `creation_fields` is non-empty, top-level keys not in it are removed
//! 3. top-level keys listed in `read_only_fields` are removed

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::FsError;
use crate::session::RequestService;

/// Default page size; the largest value Freshservice accepts.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 100;

/// Path segment of the permanent-deletion call issued after a DELETE.
pub const DELETE_FOREVER: &str = "delete_forever";

/// A configured resource endpoint.
#[derive(Clone)]
pub struct Endpoint<'a> {
    pub(crate) service: &'a RequestService,
    path: String,
    resource_key: String,
    identifier: Option<u64>,
    creation_fields: Vec<String>,
    read_only_fields: Vec<String>,
    pub(crate) items_per_page: usize,
    create_command: Option<String>,
}

impl<'a> Endpoint<'a> {
    /// Creates an endpoint at `path` (e.g. `/api/v2/assets`) whose listings
    /// are nested under `resource_key`.
    pub fn new(
        service: &'a RequestService,
        path: impl Into<String>,
        resource_key: impl Into<String>,
    ) -> Self {
        Self {
            service,
            path: path.into(),
            resource_key: resource_key.into(),
            identifier: None,
            creation_fields: Vec::new(),
            read_only_fields: Vec::new(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            create_command: None,
        }
    }

    /// Binds the endpoint to a single resource.
    #[must_use]
    pub fn with_identifier(mut self, identifier: u64) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Restricts `create` payloads to these top-level keys.
    #[must_use]
    pub fn with_creation_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.creation_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Top-level keys that are never sent to the server.
    #[must_use]
    pub fn with_read_only_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_only_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the page size used by listings. Clamped to `1..=100`.
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.clamp(1, DEFAULT_ITEMS_PER_PAGE);
        self
    }

    /// Appends `command` to the POST URL used by `create`.
    #[must_use]
    pub fn with_create_command(mut self, command: impl Into<String>) -> Self {
        self.create_command = Some(command.into());
        self
    }

    /// The service this endpoint sends through.
    pub fn request_service(&self) -> &'a RequestService {
        self.service
    }

    /// Envelope key of listing responses.
    pub fn resource_key(&self) -> &str {
        &self.resource_key
    }

    /// Bound identifier, if any.
    pub fn identifier(&self) -> Option<u64> {
        self.identifier
    }

    /// Allow-list for `create`.
    pub fn creation_fields(&self) -> &[String] {
        &self.creation_fields
    }

    /// Deny-list for `create` and `update`.
    pub fn read_only_fields(&self) -> &[String] {
        &self.read_only_fields
    }

    /// Page size used by listings.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Path segment appended by `create`, if any.
    pub fn create_command(&self) -> Option<&str> {
        self.create_command.as_deref()
    }

    /// Full URL of the collection, e.g. `https://acme.freshservice.com/api/v2/assets`.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.service.base_url(), self.path)
    }

    /// `base_url()` followed by the bound identifier, if there is one.
    pub fn extended_url(&self) -> String {
        match self.identifier {
            Some(id) => format!("{}/{}", self.base_url(), id),
            None => self.base_url(),
        }
    }

    /// URL of a single resource. Rejects `0`.
    pub fn item_url(&self, id: u64) -> Result<String, FsError> {
        validate_id(id)?;
        Ok(format!("{}/{}", self.base_url(), id))
    }

    /// URL of an action on a single resource, e.g. `.../assets/7/restore`.
    pub fn action_url(&self, id: u64, action: &str) -> Result<String, FsError> {
        Ok(format!("{}/{}", self.item_url(id)?, action))
    }

    /// Target of `create`: `extended_url()` plus the create command.
    pub fn create_url(&self) -> String {
        match &self.create_command {
            Some(command) => format!("{}/{}", self.extended_url(), command),
            None => self.extended_url(),
        }
    }

    /// Fetches a single resource.
    ///
    /// # Errors
    ///
    /// Returns `FsError::HttpStatus` when the server answers non-2xx.
    pub fn get(&self, id: u64) -> Result<Value, FsError> {
        let url = self.item_url(id)?;
        self.service.send_request(Method::GET, &url, None)
    }

    /// Sanitizes `data` and POSTs it, but only when `enabled` is true.
    ///
    /// Returns `Ok(None)` without sending anything when disabled.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Validation` if `data` is not a JSON object.
    pub fn create(&self, data: Value, enabled: bool) -> Result<Option<Value>, FsError> {
        let payload = sanitize_for_create(data, &self.creation_fields, &self.read_only_fields)?;
        let url = self.create_url();

        if !enabled {
            tracing::warn!(
                url = %url,
                "Creation disabled; set ALLOW_FS_CREATE_REQUESTS to send this request"
            );
            return Ok(None);
        }

        self.service
            .send_request(Method::POST, &url, Some(&Value::Object(payload)))
            .map(Some)
    }

    /// `create` gated by the service's `ALLOW_FS_CREATE_REQUESTS` flag.
    pub fn create_guarded(&self, data: Value) -> Result<Option<Value>, FsError> {
        self.create(data, self.service.allow_create())
    }

    /// Updates a resource with PUT. Nulls and read-only fields are stripped.
    pub fn update(&self, data: Value, id: u64) -> Result<Value, FsError> {
        let url = self.item_url(id)?;
        let payload = sanitize_for_create(data, &[], &self.read_only_fields)?;
        self.service
            .send_request(Method::PUT, &url, Some(&Value::Object(payload)))
    }

    /// Deletes a resource.
    ///
    /// With `permanently`, a PUT to `{id}/delete_forever` follows the DELETE.
    /// The second call is only made if the first succeeded.
    pub fn delete(&self, id: u64, permanently: bool) -> Result<(), FsError> {
        let url = self.item_url(id)?;
        self.service.send_request(Method::DELETE, &url, None)?;

        if permanently {
            let url = self.action_url(id, DELETE_FOREVER)?;
            self.service.send_request(Method::PUT, &url, None)?;
        }
        Ok(())
    }
}

/// Rejects identifiers that cannot name a resource.
pub fn validate_id(id: u64) -> Result<(), FsError> {
    if id == 0 {
        return Err(FsError::validation("identifier must be a positive integer"));
    }
    Ok(())
}

/// Removes every object key whose value is `null`, at any depth.
///
/// Objects inside arrays are cleaned too; `null` array elements are kept.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

/// Applies the full outbound pipeline to a `create` payload.
pub fn sanitize_for_create(
    data: Value,
    creation_fields: &[String],
    read_only_fields: &[String],
) -> Result<Map<String, Value>, FsError> {
    let mut map = match strip_nulls(data) {
        Value::Object(map) => map,
        other => {
            return Err(FsError::validation(format!(
                "payload must be a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    if !creation_fields.is_empty() {
        map.retain(|key, _| creation_fields.iter().any(|f| f == key));
    }
    for field in read_only_fields {
        map.remove(field);
    }
    Ok(map)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
