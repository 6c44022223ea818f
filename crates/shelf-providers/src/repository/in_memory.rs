//! In-memory book repository
//!
//! Books live in a concurrent hash map keyed by identifier. Data is not
//! persisted and disappears with the process.

use async_trait::async_trait;
use dashmap::DashMap;
use shelf_domain::constants::{BOOK_RESOURCE, MEMORY_REPOSITORY_PROVIDER};
use shelf_domain::entities::Book;
use shelf_domain::error::{Error, Result};
use shelf_domain::ports::BookRepository;

/// Map-backed book repository
///
/// Concurrent saves to the same identifier do not corrupt the map; the last
/// writer wins.
pub struct InMemoryBookRepository {
    items: DashMap<String, Book>,
}

impl InMemoryBookRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Create a repository pre-loaded with `books`
    ///
    /// Later entries replace earlier ones with the same identifier.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let items = books
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();
        Self { items }
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find(&self, id: &str) -> Result<Book> {
        self.items
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("{BOOK_RESOURCE} {id}")))
    }

    async fn save(&self, book: Book) -> Result<Book> {
        self.items.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        let mut books: Vec<Book> = self.items.iter().map(|e| e.value().clone()).collect();
        books.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(books)
    }

    fn provider_name(&self) -> &str {
        MEMORY_REPOSITORY_PROVIDER
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use shelf_application::ports::registry::{
    BOOK_REPOSITORY_PROVIDERS, BookRepositoryConfig, BookRepositoryEntry,
};

#[linkme::distributed_slice(BOOK_REPOSITORY_PROVIDERS)]
static MEMORY_PROVIDER: BookRepositoryEntry = BookRepositoryEntry {
    name: MEMORY_REPOSITORY_PROVIDER,
    description: "Map-backed in-memory book repository (non-persistent)",
    factory: |config: &BookRepositoryConfig| {
        let repo = InMemoryBookRepository::with_books(config.seed.iter().cloned());
        tracing::debug!(seeded = repo.len(), "Created in-memory book repository");
        Ok(std::sync::Arc::new(repo))
    },
};
