//! Book Service Use Case
//!
//! Each operation is a single delegated repository call. Identifiers for new
//! books are random UUIDv4 strings.

use crate::domain_services::BookServiceInterface;
use async_trait::async_trait;
use shelf_domain::entities::{Book, BookDraft};
use shelf_domain::error::Result;
use shelf_domain::ports::BookRepository;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Book service implementation over an injected repository
pub struct BookServiceImpl {
    repository: Arc<dyn BookRepository>,
}

impl BookServiceImpl {
    /// Create a new book service with the given repository
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl BookServiceInterface for BookServiceImpl {
    async fn list_books(&self) -> Result<Vec<Book>> {
        let books = self.repository.find_all().await?;
        debug!(
            count = books.len(),
            provider = self.repository.provider_name(),
            "Listed books"
        );
        Ok(books)
    }

    async fn get_book(&self, id: &str) -> Result<Book> {
        self.repository.find(id).await
    }

    async fn create_book(&self, draft: BookDraft) -> Result<Book> {
        let book = draft.into_book(Self::generate_id());
        debug!(book_id = %book.id, "Creating book");
        self.repository.save(book).await
    }

    async fn update_book(&self, id: &str, draft: BookDraft) -> Result<Book> {
        debug!(book_id = %id, "Updating book");
        self.repository.save(draft.into_book(id)).await
    }
}

impl std::fmt::Debug for BookServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookServiceImpl")
            .field("provider", &self.repository.provider_name())
            .finish()
    }
}
