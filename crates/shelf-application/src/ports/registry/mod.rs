//! Provider Registry
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  1. Registry declares: #[linkme::distributed_slice]            │
//! │     pub static BOOK_REPOSITORY_PROVIDERS: [Entry] = [..];      │
//! │  2. Provider defines:  #[linkme::distributed_slice(            │
//! │                            BOOK_REPOSITORY_PROVIDERS)]         │
//! │  3. Resolver looks entries up by name at runtime               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registration only happens for crates that are linked into the final
//! binary, so consumers reference `shelf_providers` explicitly.

pub mod repository;

pub use repository::{
    BOOK_REPOSITORY_PROVIDERS, BookRepositoryConfig, BookRepositoryEntry,
    list_book_repositories, resolve_book_repository,
};
