//! Book endpoints
//!
//! | Path | Method | Auth | Description |
//! |------|--------|------|-------------|
//! | `/books` | GET | - | List all books |
//! | `/books/<id>` | GET | - | Fetch a single book |
//! | `/books` | POST | - | Create a book with a generated id |
//! | `/books/<id>` | POST | Basic | Create or replace the book stored at `id` |

pub mod handlers;
pub mod models;

pub use handlers::{create_book, get_book, list_books, update_book};
pub use models::{BookPayload, BookResponse};
