//! Authentication configuration types

use crate::constants::DEFAULT_AUTH_REALM;
use serde::{Deserialize, Serialize};
use shelf_domain::error::{Error, Result};
use std::fmt;

/// Authentication configuration
///
/// Both credentials are unset by default and must be provided through the
/// config file (`auth.username`, `auth.password`) or the environment
/// (`SHELF__AUTH__USERNAME`, `SHELF__AUTH__PASSWORD`).
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Expected Basic auth username
    #[serde(default)]
    pub username: Option<String>,

    /// Expected Basic auth password
    #[serde(default)]
    pub password: Option<String>,

    /// Realm advertised in `WWW-Authenticate` challenges
    #[serde(default = "default_realm")]
    pub realm: String,
}

fn default_realm() -> String {
    DEFAULT_AUTH_REALM.to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            realm: default_realm(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("realm", &self.realm)
            .finish()
    }
}

/// Resolved credentials the update endpoint checks against
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSettings {
    /// Expected username
    pub username: String,
    /// Expected password
    pub password: String,
}

impl AuthSettings {
    /// Create settings from explicit values
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build settings from configuration
    ///
    /// Fails when either credential is missing.
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        match (&config.username, &config.password) {
            (Some(username), Some(password)) => Ok(Self::new(username, password)),
            _ => Err(Error::configuration(
                "auth.username and auth.password must both be set \
                 (SHELF__AUTH__USERNAME / SHELF__AUTH__PASSWORD)",
            )),
        }
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
