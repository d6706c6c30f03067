//! Authenticated session handling.
//!
//! `RequestService` owns the HTTP session for one Freshservice tenant. The
//! session is acquired with [`RequestService::enter`] and released with
//! [`RequestService::exit`]; [`RequestService::scoped`] wraps both around a
//! closure. Endpoints borrow the service and send every call through
//! [`RequestService::send_request`].
//!
//! All I/O is blocking. Each `send_request` is exactly one HTTP exchange:
//! there is no retry and no timeout beyond the client defaults.
//!
//! # Security
//!
//! The credential is sent as an HTTP Basic `Authorization` header. It is
//! never part of a URL, never logged, and scrubbed from error bodies.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde_json::Value;

use crate::config::{allow_create_from_env, resolve_base_url, Config};
use crate::credential::Credential;
use crate::error::FsError;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("fshelper/", env!("CARGO_PKG_VERSION"));

/// Session wrapper scoped to a single tenant.
///
/// # Example
///
/// ```ignore
/// let mut service = RequestService::new(Credential::api_key(key), "acme")?;
/// let asset = service.scoped(|svc| assets(svc).get(1))?;
/// ```
pub struct RequestService {
    base_url: String,
    credential: Credential,
    allow_create: Option<bool>,
    session: Option<Client>,
}

impl RequestService {
    /// Creates a service for `domain` (tenant name or base URL).
    ///
    /// Unless [`with_allow_create`](Self::with_allow_create) pins the flag,
    /// `ALLOW_FS_CREATE_REQUESTS` is read each time a guarded create runs.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Config` if the domain cannot be turned into a URL.
    pub fn new(credential: Credential, domain: &str) -> Result<Self, FsError> {
        Ok(Self {
            base_url: resolve_base_url(domain)?,
            credential,
            allow_create: None,
            session: None,
        })
    }

    /// Creates a service from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            credential: config.credential.clone(),
            allow_create: Some(config.allow_create),
            session: None,
        }
    }

    /// Pins the creation feature flag, ignoring the environment.
    #[must_use]
    pub fn with_allow_create(mut self, allow: bool) -> Self {
        self.allow_create = Some(allow);
        self
    }

    /// Base URL of the tenant, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether guarded creation calls are sent.
    ///
    /// Falls back to `ALLOW_FS_CREATE_REQUESTS` at call time when unpinned.
    pub fn allow_create(&self) -> bool {
        self.allow_create.unwrap_or_else(allow_create_from_env)
    }

    /// Returns true while a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens the underlying HTTP session. Entering twice keeps the first one.
    ///
    /// # Errors
    ///
    /// Returns `FsError::HttpClient` if the HTTP client fails to initialize.
    pub fn enter(&mut self) -> Result<&mut Self, FsError> {
        if self.session.is_none() {
            let client = Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .map_err(FsError::HttpClient)?;
            tracing::info!(base_url = %self.base_url, "Opened Freshservice session");
            self.session = Some(client);
        }
        Ok(self)
    }

    /// Releases the HTTP session.
    pub fn exit(&mut self) {
        if self.session.take().is_some() {
            tracing::info!(base_url = %self.base_url, "Closed Freshservice session");
        }
    }

    /// Runs `f` with an open session.
    ///
    /// A session opened here is closed afterwards, even on error. A session
    /// the caller already entered is left open.
    pub fn scoped<T, F>(&mut self, f: F) -> Result<T, FsError>
    where
        F: FnOnce(&Self) -> Result<T, FsError>,
    {
        let opened_here = !self.is_open();
        self.enter()?;
        let result = f(self);
        if opened_here {
            self.exit();
        }
        result
    }

    /// Sends one request and parses the JSON response.
    ///
    /// An empty response body (e.g. `204 No Content`) is returned as
    /// `Value::Null`.
    ///
    /// # Errors
    ///
    /// - `FsError::SessionClosed` outside `enter`/`exit`
    /// - `FsError::Http` for transport failures
    /// - `FsError::HttpStatus` for non-2xx responses
    /// - `FsError::Serialization` for malformed JSON
    pub fn send_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Value, FsError> {
        let client = self.session.as_ref().ok_or(FsError::SessionClosed)?;

        tracing::debug!(method = %method, url = %url, "Making Freshservice API request");

        let mut req = client
            .request(method, url)
            .basic_auth(self.credential.username(), Some(self.credential.password()))
            .header(ACCEPT, "application/json");
        if let Some(data) = body {
            req = req.json(data);
        }

        let response = req.send().map_err(FsError::Http)?;
        let status = response.status();
        let text = response.text().map_err(FsError::Http)?;

        if !status.is_success() {
            tracing::debug!(status = %status, url = %url, "Freshservice returned an error status");
            return Err(FsError::http_status(status, &text, self.credential.secret()));
        }

        tracing::trace!(body = %text, "Freshservice API response");

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
