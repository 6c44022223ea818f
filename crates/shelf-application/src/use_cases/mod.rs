//! Use case implementations

pub mod book_service;

pub use book_service::BookServiceImpl;
