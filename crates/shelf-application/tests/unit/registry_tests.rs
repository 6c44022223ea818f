//! Tests for the repository provider registry
//!
//! `extern crate shelf_providers` in the suite root forces linkme
//! registration, so these tests resolve real providers.

use shelf_application::ports::registry::{
    BookRepositoryConfig, list_book_repositories, resolve_book_repository,
};
use shelf_domain::entities::Book;
use shelf_domain::ports::BookRepository;

#[test]
fn test_list_includes_memory_and_null() {
    let names: Vec<&str> = list_book_repositories()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert!(names.contains(&"memory"), "memory provider should be registered: {names:?}");
    assert!(names.contains(&"null"), "null provider should be registered: {names:?}");
}

#[tokio::test]
async fn test_resolve_memory_provider_with_seed() {
    let config = BookRepositoryConfig::new("memory").with_seed([Book::new("1", "Foo")]);
    let repo = resolve_book_repository(&config).expect("memory provider");

    assert_eq!(repo.provider_name(), "memory");
    assert_eq!(repo.find_all().await.expect("list"), vec![Book::new("1", "Foo")]);
}

#[test]
fn test_resolve_unknown_provider_lists_available() {
    let err = match resolve_book_repository(&BookRepositoryConfig::new("postgres")) {
        Ok(_) => panic!("unknown provider should not resolve"),
        Err(e) => e,
    };

    assert!(err.contains("postgres"));
    assert!(err.contains("memory"));
}
