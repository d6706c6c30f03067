//! Credentials used to authenticate against Freshservice.

use std::fmt;

/// Password Freshservice expects when the username is an API key.
pub const API_KEY_PASSWORD: &str = "X";

/// Username and secret for HTTP Basic authentication.
///
/// Freshservice accepts either an agent's login or an API key as the username.
/// With an API key the password is ignored by the server, so
/// [`Credential::api_key`] fills in the conventional `"X"`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    /// Creates a credential from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates a credential for API key authentication.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::new(key, API_KEY_PASSWORD)
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The value that must never appear in logs or error messages.
    ///
    /// For API key credentials that is the username.
    pub(crate) fn secret(&self) -> &str {
        if self.password == API_KEY_PASSWORD {
            &self.username
        } else {
            &self.password
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let username = if self.password == API_KEY_PASSWORD {
            "[REDACTED]"
        } else {
            self.username.as_str()
        };
        f.debug_struct("Credential")
            .field("username", &username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
