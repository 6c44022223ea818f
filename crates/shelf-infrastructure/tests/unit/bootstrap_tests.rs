//! Tests for the application context: lazy defaults, overrides and reset

use shelf_application::domain_services::BookServiceInterface;
use shelf_domain::entities::{Book, BookDraft};
use shelf_domain::ports::BookRepository;
use shelf_infrastructure::config::{AuthSettings, ConfigBuilder};
use shelf_infrastructure::di::{AppContext, init_app, init_test_app};
use shelf_providers::repository::{InMemoryBookRepository, NullBookRepository};
use std::sync::Arc;

#[tokio::test]
async fn test_default_repository_is_seeded_memory() {
    let config = ConfigBuilder::new()
        .with_seed_book(Book::new("1", "Foo"))
        .build();
    let context = init_app(config).await.expect("context");

    let repo = context.repository().expect("repository");
    assert_eq!(repo.provider_name(), "memory");
    assert_eq!(repo.find_all().await.expect("list"), vec![Book::new("1", "Foo")]);
}

#[tokio::test]
async fn test_repository_is_a_singleton() {
    let context = init_test_app().await.expect("context");

    let a = context.repository().expect("first");
    let b = context.repository().expect("second");
    assert!(Arc::ptr_eq(&a, &b));

    a.save(Book::new("x", "shared")).await.expect("save");
    assert_eq!(b.find("x").await.expect("find").title, "shared");
}

#[tokio::test]
async fn test_unknown_provider_fails_at_init() {
    let config = ConfigBuilder::new()
        .with_repository_provider("cassandra")
        .build();

    let err = init_app(config).await.unwrap_err();
    assert!(err.to_string().contains("cassandra"));
}

#[tokio::test]
async fn test_override_repository_is_seen_by_services() {
    let context = init_test_app().await.expect("context");
    let fake = Arc::new(InMemoryBookRepository::with_books([Book::new("1", "Foo")]));

    context.override_repository(fake.clone()).expect("override");

    let service = context.book_service().expect("service");
    service
        .update_book("1", BookDraft::new("Baz"))
        .await
        .expect("update");
    assert_eq!(fake.find_all().await.expect("list"), vec![Book::new("1", "Baz")]);
    assert!(context.has_overrides());
}

#[tokio::test]
async fn test_reset_restores_configured_default() {
    let context = init_test_app().await.expect("context");
    context
        .override_repository(Arc::new(NullBookRepository::new()))
        .expect("override");
    assert_eq!(context.repository().expect("repo").provider_name(), "null");

    context.reset().expect("reset");

    assert!(!context.has_overrides());
    assert_eq!(context.repository().expect("repo").provider_name(), "memory");
}

#[tokio::test]
async fn test_settings_missing_is_configuration_error() {
    let context = init_test_app().await.expect("context");

    let err = context.settings().unwrap_err();
    assert!(err.to_string().contains("auth.username"));
    assert!(context.credential_verifier().is_err());
}

#[tokio::test]
async fn test_settings_from_config_and_override() {
    let config = ConfigBuilder::new().with_credentials("admin", "pw").build();
    let context = AppContext::new(config);
    assert_eq!(context.settings().expect("settings").username, "admin");

    context
        .override_settings(AuthSettings::new("foo", "bar"))
        .expect("override");
    assert_eq!(
        *context.settings().expect("settings"),
        AuthSettings::new("foo", "bar")
    );

    context.reset().expect("reset");
    assert_eq!(context.settings().expect("settings").username, "admin");
}

#[tokio::test]
async fn test_contexts_are_isolated() {
    let first = init_test_app().await.expect("first");
    let second = init_test_app().await.expect("second");

    first
        .repository()
        .expect("repo")
        .save(Book::new("1", "only in first"))
        .await
        .expect("save");

    assert!(second.repository().expect("repo").find_all().await.expect("list").is_empty());
}
