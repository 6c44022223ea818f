//! # Shelf - Provider Implementations
//!
//! User-selectable implementations of the ports defined in `shelf-domain`.
//! Each provider registers itself in the `shelf-application` registry, so it
//! can be chosen by name from configuration.
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `BookRepository` | InMemory (`memory`), Null (`null`) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! shelf-providers = { version = "0.1", default-features = false }
//! ```
//!
//! Disabling `repository-memory` leaves only the `null` repository.

pub use shelf_domain::error::{Error, Result};
pub use shelf_domain::ports::BookRepository;

/// Book repository implementations
pub mod repository;
