//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. Providers
//! implement [`BookRepository`]; infrastructure implements
//! [`CredentialVerifier`].

/// Credential verification port
pub mod auth;
/// Book persistence port
pub mod repository;

pub use auth::{AuthOutcome, Credentials, CredentialVerifier, UnauthorizedReason};
pub use repository::BookRepository;
