//! Repository configuration types

use serde::{Deserialize, Serialize};
use shelf_application::ports::registry::BookRepositoryConfig;
use shelf_domain::constants::MEMORY_REPOSITORY_PROVIDER;
use shelf_domain::entities::Book;

/// Repository provider selection
///
/// ```toml
/// [repository]
/// provider = "memory"
///
/// [[repository.seed]]
/// id = "1"
/// title = "Foo"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Registered provider name
    pub provider: String,

    /// Records loaded into the repository when it is first built
    #[serde(default)]
    pub seed: Vec<Book>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            provider: MEMORY_REPOSITORY_PROVIDER.to_string(),
            seed: Vec::new(),
        }
    }
}

impl RepositoryConfig {
    /// Registry configuration for this selection
    pub fn to_registry_config(&self) -> BookRepositoryConfig {
        BookRepositoryConfig::new(&self.provider).with_seed(self.seed.iter().cloned())
    }
}
