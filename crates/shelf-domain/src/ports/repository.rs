//! Book Repository Interface

use crate::entities::Book;
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Book Persistence
///
/// Capability set over stored books. Implementations are selected by name
/// through the provider registry and may be replaced at runtime.
///
/// # Example
///
/// ```ignore
/// use shelf_domain::ports::BookRepository;
///
/// let saved = repo.save(Book::new("2", "Bar")).await?;
/// let all = repo.find_all().await?;
/// let one = repo.find("2").await?;
/// ```
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Look up a single book
    ///
    /// Returns [`Error::NotFound`](crate::error::Error::NotFound) when no book
    /// has the given identifier.
    async fn find(&self, id: &str) -> Result<Book>;

    /// Store a book, replacing any record with the same identifier
    ///
    /// Returns the stored record unchanged.
    async fn save(&self, book: Book) -> Result<Book>;

    /// Snapshot of every stored book, ordered by identifier
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// Registry name of this implementation
    fn provider_name(&self) -> &str;
}
