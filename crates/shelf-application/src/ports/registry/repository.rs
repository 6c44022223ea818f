//! Book Repository Provider Registry
//!
//! Repository implementations register themselves via
//! `#[linkme::distributed_slice(BOOK_REPOSITORY_PROVIDERS)]` and are
//! discovered by name at runtime.

use shelf_domain::entities::Book;
use shelf_domain::ports::BookRepository;
use std::sync::Arc;

/// Configuration for repository provider creation
///
/// Providers ignore the seed if they cannot hold records.
#[derive(Debug, Clone, Default)]
pub struct BookRepositoryConfig {
    /// Provider name (e.g., "memory", "null")
    pub provider: String,
    /// Records to load into the repository on creation
    pub seed: Vec<Book>,
}

impl BookRepositoryConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the seed records
    pub fn with_seed(mut self, seed: impl IntoIterator<Item = Book>) -> Self {
        self.seed = seed.into_iter().collect();
        self
    }
}

/// Registry entry for repository providers
pub struct BookRepositoryEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&BookRepositoryConfig) -> Result<Arc<dyn BookRepository>, String>,
}

#[linkme::distributed_slice]
pub static BOOK_REPOSITORY_PROVIDERS: [BookRepositoryEntry] = [..];

/// Resolve a repository provider by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn BookRepository>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_book_repository(
    config: &BookRepositoryConfig,
) -> Result<Arc<dyn BookRepository>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = BOOK_REPOSITORY_PROVIDERS
        .iter()
        .find(|entry| entry.name == provider_name)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = BOOK_REPOSITORY_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown repository provider '{}'. Available providers: {:?}",
        provider_name, available
    ))
}

/// List all registered repository providers as (name, description) pairs
pub fn list_book_repositories() -> Vec<(&'static str, &'static str)> {
    BOOK_REPOSITORY_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
