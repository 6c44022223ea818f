//! Domain layer constants
//!
//! Infrastructure-specific constants live in `shelf_infrastructure::constants`.

/// Resource label used in not-found errors for books
pub const BOOK_RESOURCE: &str = "book";

/// Name of the map-backed repository provider
pub const MEMORY_REPOSITORY_PROVIDER: &str = "memory";

/// Name of the placeholder repository provider that stores nothing
pub const NULL_REPOSITORY_PROVIDER: &str = "null";
