//! Use case interfaces consumed by the transport layer

pub mod books;

pub use books::BookServiceInterface;
