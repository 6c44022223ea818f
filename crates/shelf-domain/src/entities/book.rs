//! Book entity
//!
//! A book is an identifier plus a title. Identifiers are unique within a
//! repository; no other invariant is enforced on either field.

use serde::{Deserialize, Serialize};

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned by the server on creation
    pub id: String,
    /// Book title
    pub title: String,
}

impl Book {
    /// Create a book from an identifier and a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Title-only payload used to create or update a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    /// Book title
    pub title: String,
}

impl BookDraft {
    /// Create a draft with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Attach an identifier, producing a storable record
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book::new(id, self.title)
    }
}
