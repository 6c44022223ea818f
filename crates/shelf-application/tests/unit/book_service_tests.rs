//! Tests for the book service use case

use shelf_application::domain_services::BookServiceInterface;
use shelf_application::use_cases::BookServiceImpl;
use shelf_domain::entities::{Book, BookDraft};
use shelf_domain::ports::BookRepository;
use shelf_providers::repository::InMemoryBookRepository;
use std::sync::Arc;

fn seeded_service() -> (BookServiceImpl, Arc<InMemoryBookRepository>) {
    let repo = Arc::new(InMemoryBookRepository::with_books([Book::new("1", "Foo")]));
    let service = BookServiceImpl::new(repo.clone());
    (service, repo)
}

#[tokio::test]
async fn test_list_books_returns_seeded_record() {
    let (service, _) = seeded_service();

    let books = service.list_books().await.expect("list");
    assert_eq!(books, vec![Book::new("1", "Foo")]);
}

#[tokio::test]
async fn test_create_book_generates_fresh_id() {
    let (service, repo) = seeded_service();

    let created = service
        .create_book(BookDraft::new("my book"))
        .await
        .expect("create");

    assert_eq!(created.title, "my book");
    assert_ne!(created.id, "1");
    assert!(uuid::Uuid::parse_str(&created.id).is_ok(), "id should be a UUID");
    assert_eq!(repo.find(&created.id).await.expect("stored"), created);
}

#[tokio::test]
async fn test_create_twice_yields_distinct_ids() {
    let (service, _) = seeded_service();

    let a = service.create_book(BookDraft::new("a")).await.expect("a");
    let b = service.create_book(BookDraft::new("a")).await.expect("b");
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_update_book_overwrites_title() {
    let (service, _) = seeded_service();

    let updated = service
        .update_book("1", BookDraft::new("bar"))
        .await
        .expect("update");
    assert_eq!(updated, Book::new("1", "bar"));

    let fetched = service.get_book("1").await.expect("get");
    assert_eq!(fetched.title, "bar");
}

#[tokio::test]
async fn test_update_unknown_id_inserts() {
    let (service, _) = seeded_service();

    service
        .update_book("99", BookDraft::new("new"))
        .await
        .expect("upsert");
    assert_eq!(service.list_books().await.expect("list").len(), 2);
}

#[tokio::test]
async fn test_get_missing_book_is_not_found() {
    let (service, _) = seeded_service();

    let err = service.get_book("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_service_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BookServiceImpl>();
}
