//! Error responses: status codes and JSON bodies

use rocket::http::{ContentType, Status};
use serde_json::{Value, json};

use crate::test_utils::fixtures::{
    TEST_PASSWORD, TEST_USERNAME, basic_auth, client_for, seeded_context,
};

#[rocket::async_test]
async fn test_missing_book_returns_404() {
    let context = seeded_context();
    let client = client_for(context.clone()).await;

    let response = client.get("/books/does-not-exist").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body: Value = response.into_json().await.expect("error body");
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("does-not-exist"));

    context.reset().expect("reset");
}

#[rocket::async_test]
async fn test_unknown_route_returns_json_404() {
    let client = client_for(seeded_context()).await;

    let response = client.get("/authors").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
}

#[rocket::async_test]
async fn test_body_without_title_returns_422() {
    let context = seeded_context();
    let client = client_for(context.clone()).await;

    let response = client
        .post("/books")
        .json(&json!({ "name": "no title here" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let body: Value = response.into_json().await.expect("error body");
    assert_eq!(body["error"], "invalid_body");

    let books: Vec<Value> = client
        .get("/books")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("book list");
    assert_eq!(books.len(), 1);

    context.reset().expect("reset");
}

#[rocket::async_test]
async fn test_syntactically_invalid_body_returns_400() {
    let context = seeded_context();
    let client = client_for(context.clone()).await;

    let response = client
        .post("/books/1")
        .header(basic_auth(TEST_USERNAME, TEST_PASSWORD))
        .header(ContentType::JSON)
        .body("{\"title\": ")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let body: Value = response.into_json().await.expect("error body");
    assert_eq!(body["error"], "bad_request");

    context.reset().expect("reset");
}

#[rocket::async_test]
async fn test_oversized_body_returns_json_413() {
    let context = seeded_context();
    let client = client_for(context.clone()).await;

    // Twice Rocket's default 1 MiB JSON limit
    let title = "x".repeat(2 * 1024 * 1024);
    let response = client
        .post("/books")
        .json(&json!({ "title": title }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::PayloadTooLarge);
    assert_eq!(response.content_type(), Some(ContentType::JSON));

    let body: Value = response.into_json().await.expect("error body");
    assert_eq!(body["error"], "payload_too_large");

    let books: Vec<Value> = client
        .get("/books")
        .dispatch()
        .await
        .into_json()
        .await
        .expect("book list");
    assert_eq!(books.len(), 1);

    context.reset().expect("reset");
}
