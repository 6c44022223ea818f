//! Application ports
//!
//! Repository contracts themselves live in `shelf_domain::ports`; this module
//! holds the registry that maps provider names to implementations.

pub mod registry;

pub use shelf_domain::ports::{BookRepository, CredentialVerifier};
