//! Request and response bodies for the book endpoints

use serde::{Deserialize, Serialize};
use shelf_domain::entities::{Book, BookDraft};

/// Body of `POST /books` and `POST /books/<id>`
///
/// Any `id` sent by the client is ignored; the id comes from the path or
/// is generated.
#[derive(Debug, Clone, Deserialize)]
pub struct BookPayload {
    /// Book title
    pub title: String,
}

impl From<BookPayload> for BookDraft {
    fn from(payload: BookPayload) -> Self {
        BookDraft::new(payload.title)
    }
}

/// A book as returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    /// Book identifier
    pub id: String,
    /// Book title
    pub title: String,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
        }
    }
}
