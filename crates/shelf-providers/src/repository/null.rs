//! Null book repository
//!
//! Stand-in for a storage backend that has not been configured. Writes are
//! acknowledged but discarded, reads see an empty repository.

use async_trait::async_trait;
use shelf_domain::constants::{BOOK_RESOURCE, NULL_REPOSITORY_PROVIDER};
use shelf_domain::entities::Book;
use shelf_domain::error::{Error, Result};
use shelf_domain::ports::BookRepository;

/// Null repository for tests and unconfigured deployments
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBookRepository;

impl NullBookRepository {
    /// Create a new null repository
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookRepository for NullBookRepository {
    async fn find(&self, id: &str) -> Result<Book> {
        Err(Error::not_found(format!("{BOOK_RESOURCE} {id}")))
    }

    async fn save(&self, book: Book) -> Result<Book> {
        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        NULL_REPOSITORY_PROVIDER
    }
}

use shelf_application::ports::registry::{
    BOOK_REPOSITORY_PROVIDERS, BookRepositoryConfig, BookRepositoryEntry,
};

#[linkme::distributed_slice(BOOK_REPOSITORY_PROVIDERS)]
static NULL_PROVIDER: BookRepositoryEntry = BookRepositoryEntry {
    name: NULL_REPOSITORY_PROVIDER,
    description: "Placeholder repository that stores nothing",
    factory: |_config: &BookRepositoryConfig| Ok(std::sync::Arc::new(NullBookRepository::new())),
};
