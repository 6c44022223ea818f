//! Book service interface

use async_trait::async_trait;
use shelf_domain::entities::{Book, BookDraft};
use shelf_domain::error::Result;

/// Book management operations exposed to request handlers
#[async_trait]
pub trait BookServiceInterface: Send + Sync {
    /// All stored books
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// A single book by identifier
    async fn get_book(&self, id: &str) -> Result<Book>;

    /// Store a new book under a freshly generated identifier
    async fn create_book(&self, draft: BookDraft) -> Result<Book>;

    /// Store `draft` under the caller-supplied identifier, replacing any existing record
    async fn update_book(&self, id: &str, draft: BookDraft) -> Result<Book>;
}
