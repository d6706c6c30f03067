//! Configuration management for fshelper.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present.

use std::env;

use url::Url;

use crate::credential::{Credential, API_KEY_PASSWORD};
use crate::error::FsError;

/// Tenant name or full base URL.
pub const DOMAIN_VAR: &str = "FreshServiceDomain";

/// API key or agent login.
pub const USERNAME_VAR: &str = "FreshServiceUsername";

/// Optional password; defaults to the API key placeholder.
pub const PASSWORD_VAR: &str = "FreshServicePassword";

/// Feature flag that enables creation calls against the tenant.
pub const ALLOW_CREATE_VAR: &str = "ALLOW_FS_CREATE_REQUESTS";

/// Configuration for connecting to Freshservice.
///
/// The credential is kept here but never logged.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the tenant (e.g., `https://acme.freshservice.com`).
    pub base_url: String,

    /// Credential used for HTTP Basic authentication.
    pub credential: Credential,

    /// Whether creation calls may actually be sent.
    pub allow_create: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `FreshServiceDomain`: tenant name (`acme`) or base URL
    /// - `FreshServiceUsername`: API key or agent login
    ///
    /// # Optional Environment Variables
    ///
    /// - `FreshServicePassword`: defaults to `X` (API key authentication)
    /// - `ALLOW_FS_CREATE_REQUESTS`: `true` enables creation calls
    ///
    /// # Errors
    ///
    /// Returns `FsError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, FsError> {
        let domain = Self::get_required_env(DOMAIN_VAR)?;
        let username = Self::get_required_env(USERNAME_VAR)?;
        let password = env::var(PASSWORD_VAR)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| API_KEY_PASSWORD.to_string());

        let base_url = resolve_base_url(&domain)?;
        Self::validate_username(&username)?;

        Ok(Config {
            base_url,
            credential: Credential::new(username.trim(), password),
            allow_create: allow_create_from_env(),
        })
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FsError> {
        env::var(name)
            .map_err(|_| FsError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FsError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates the username is not a placeholder value.
    fn validate_username(username: &str) -> Result<(), FsError> {
        let lower = username.to_lowercase();
        let placeholder_patterns = ["your_api_key", "your_key", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if lower.contains(pattern) {
                return Err(FsError::invalid_config(format!(
                    "{} appears to be a placeholder value",
                    USERNAME_VAR
                )));
            }
        }

        Ok(())
    }
}

/// Reads `ALLOW_FS_CREATE_REQUESTS` from the environment.
pub fn allow_create_from_env() -> bool {
    env::var(ALLOW_CREATE_VAR)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

/// Interprets a feature-flag value. Only explicit truthy spellings enable it.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Turns a tenant name or URL into a normalized base URL.
///
/// `acme` becomes `https://acme.freshservice.com`; anything that already has
/// an `http(s)://` scheme is kept, minus trailing slashes.
pub fn resolve_base_url(domain: &str) -> Result<String, FsError> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err(FsError::invalid_config("domain must not be empty"));
    }

    let candidate = match ["https://", "http://"]
        .iter()
        .find(|scheme| domain.starts_with(*scheme))
    {
        Some(scheme) => {
            let rest = domain[scheme.len()..].trim_end_matches('/');
            if rest.is_empty() {
                return Err(FsError::invalid_config(format!(
                    "domain {:?} has no host",
                    domain
                )));
            }
            format!("{}{}", scheme, rest)
        }
        None => {
            let host = domain.trim_end_matches('/');
            if host.is_empty() {
                return Err(FsError::invalid_config("domain must not be empty"));
            }
            if host.contains('.') {
                format!("https://{}", host)
            } else {
                format!("https://{}.freshservice.com", host)
            }
        }
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| FsError::invalid_config(format!("invalid domain {:?}: {}", domain, e)))?;
    if parsed.host_str().is_none() {
        return Err(FsError::invalid_config(format!(
            "domain {:?} has no host",
            domain
        )));
    }

    Ok(candidate)
}
