//! Domain entities

/// Book record and draft payload
pub mod book;

pub use book::{Book, BookDraft};
