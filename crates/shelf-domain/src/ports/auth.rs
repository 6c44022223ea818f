//! Credential Verification Port
//!
//! Verification never fails with an error for a bad password: the outcome is
//! a value the transport layer maps to its own "unauthorized" response.

use crate::error::Result;
use std::fmt;

/// Caller-supplied username and password
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username as sent by the caller
    pub username: String,
    /// Password as sent by the caller
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a request was not authorized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// No credentials were supplied
    MissingCredentials,
    /// Credentials were supplied but could not be decoded
    MalformedCredentials,
    /// Credentials did not match the configured ones
    InvalidCredentials,
}

impl UnauthorizedReason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing_credentials",
            Self::MalformedCredentials => "malformed_credentials",
            Self::InvalidCredentials => "invalid_credentials",
        }
    }
}

impl fmt::Display for UnauthorizedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingCredentials => "credentials required",
            Self::MalformedCredentials => "credentials could not be decoded",
            Self::InvalidCredentials => "invalid username or password",
        };
        f.write_str(text)
    }
}

/// Result of a credential check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The caller is who they claim to be
    Authorized {
        /// Authenticated username
        username: String,
    },
    /// The caller could not be authenticated
    Unauthorized(UnauthorizedReason),
}

impl AuthOutcome {
    /// Whether the outcome grants access
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }
}

/// Credential verification interface
///
/// `Err` is reserved for verifier faults (for example, no credentials are
/// configured); a mismatch is `Ok(AuthOutcome::Unauthorized(..))`.
pub trait CredentialVerifier: Send + Sync {
    /// Check caller credentials against the expected ones
    fn verify(&self, credentials: Option<&Credentials>) -> Result<AuthOutcome>;
}
