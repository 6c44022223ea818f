//! Tests for the in-memory book repository

use shelf_domain::entities::Book;
use shelf_domain::ports::BookRepository;
use shelf_providers::repository::InMemoryBookRepository;
use std::collections::HashSet;
use std::sync::Arc;

fn seeded() -> InMemoryBookRepository {
    InMemoryBookRepository::with_books([Book::new("1", "Foo")])
}

#[tokio::test]
async fn test_find_all_returns_seeded_record() {
    let repo = seeded();

    let books = repo.find_all().await.expect("find_all");
    assert_eq!(books, vec![Book::new("1", "Foo")]);
}

#[tokio::test]
async fn test_save_adds_second_record() {
    let repo = seeded();

    let saved = repo.save(Book::new("2", "Bar")).await.expect("save");
    assert_eq!(saved, Book::new("2", "Bar"));

    let books: HashSet<Book> = repo.find_all().await.expect("find_all").into_iter().collect();
    let expected: HashSet<Book> = [Book::new("1", "Foo"), Book::new("2", "Bar")].into();
    assert_eq!(books, expected);
}

#[tokio::test]
async fn test_save_existing_id_overwrites() {
    let repo = seeded();

    repo.save(Book::new("1", "Baz")).await.expect("save");

    assert_eq!(repo.find("1").await.expect("find"), Book::new("1", "Baz"));
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_find_missing_is_not_found() {
    let repo = seeded();

    let err = repo.find("42").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("42"));
}

#[tokio::test]
async fn test_find_all_is_ordered_by_id() {
    let repo = InMemoryBookRepository::with_books([
        Book::new("c", "3"),
        Book::new("a", "1"),
        Book::new("b", "2"),
    ]);

    let ids: Vec<String> = repo
        .find_all()
        .await
        .expect("find_all")
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_seed_with_duplicate_ids_keeps_last() {
    let repo = InMemoryBookRepository::with_books([Book::new("1", "Foo"), Book::new("1", "Bar")]);

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.find("1").await.expect("find").title, "Bar");
}

#[tokio::test]
async fn test_concurrent_saves_all_land() {
    let repo = Arc::new(InMemoryBookRepository::new());

    let saves = (0..32).map(|i| {
        let repo = repo.clone();
        async move { repo.save(Book::new(i.to_string(), format!("t{i}"))).await }
    });
    for result in futures::future::join_all(saves).await {
        result.expect("save");
    }

    assert_eq!(repo.find_all().await.expect("find_all").len(), 32);
}

#[test]
fn test_provider_name() {
    assert_eq!(InMemoryBookRepository::new().provider_name(), "memory");
    assert!(InMemoryBookRepository::default().is_empty());
}
