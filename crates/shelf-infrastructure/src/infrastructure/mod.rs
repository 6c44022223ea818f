//! Infrastructure service adapters

/// Settings-backed credential verification
pub mod auth;

pub use auth::SettingsCredentialVerifier;
