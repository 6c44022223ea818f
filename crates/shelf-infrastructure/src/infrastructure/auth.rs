//! Credential Verification Adapter
//!
//! Compares caller credentials with the configured [`AuthSettings`].

use crate::config::AuthSettings;
use shelf_domain::error::Result;
use shelf_domain::ports::{AuthOutcome, CredentialVerifier, Credentials, UnauthorizedReason};
use std::sync::Arc;
use tracing::warn;

/// Verifies Basic credentials against resolved settings
pub struct SettingsCredentialVerifier {
    settings: Arc<AuthSettings>,
}

impl SettingsCredentialVerifier {
    /// Create a verifier for the given settings
    pub fn new(settings: Arc<AuthSettings>) -> Self {
        Self { settings }
    }
}

impl CredentialVerifier for SettingsCredentialVerifier {
    fn verify(&self, credentials: Option<&Credentials>) -> Result<AuthOutcome> {
        let Some(credentials) = credentials else {
            return Ok(AuthOutcome::Unauthorized(
                UnauthorizedReason::MissingCredentials,
            ));
        };

        if credentials.username == self.settings.username
            && credentials.password == self.settings.password
        {
            Ok(AuthOutcome::Authorized {
                username: credentials.username.clone(),
            })
        } else {
            warn!(username = %credentials.username, "Rejected credentials");
            Ok(AuthOutcome::Unauthorized(
                UnauthorizedReason::InvalidCredentials,
            ))
        }
    }
}
