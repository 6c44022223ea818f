//! Repository Resolver
//!
//! ```text
//! AppConfig → BookRepositoryResolver → linkme registry → Arc<dyn BookRepository>
//! ```

use crate::config::AppConfig;
use shelf_application::ports::registry::{list_book_repositories, resolve_book_repository};
use shelf_domain::ports::BookRepository;
use std::sync::Arc;

/// Resolves book repositories from the provider registry
pub struct BookRepositoryResolver {
    config: Arc<AppConfig>,
}

impl BookRepositoryResolver {
    /// Create a new resolver with config
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Resolve the provider named in the application config
    pub fn resolve_from_config(&self) -> Result<Arc<dyn BookRepository>, String> {
        resolve_book_repository(&self.config.repository.to_registry_config())
    }

    /// List available repository providers
    pub fn list_available(&self) -> Vec<(&'static str, &'static str)> {
        list_book_repositories()
    }

    /// Whether the configured provider is registered
    pub fn is_configured_provider_available(&self) -> bool {
        let wanted = self.config.repository.provider.as_str();
        self.list_available().iter().any(|(name, _)| *name == wanted)
    }
}

impl std::fmt::Debug for BookRepositoryResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookRepositoryResolver")
            .field("provider", &self.config.repository.provider)
            .finish()
    }
}
