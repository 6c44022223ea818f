//! Book route handlers
//!
//! Handlers resolve the book service from the managed [`AppContext`] on every
//! request, so a binding overridden on the context is seen by the next call.

use rocket::serde::json::Json;
use rocket::{State, get, post};
use shelf_infrastructure::di::AppContext;
use std::sync::Arc;
use tracing::info;

use super::models::{BookPayload, BookResponse};
use crate::auth::BasicAuth;
use crate::error::ApiResult;

/// List all books
#[get("/books")]
pub async fn list_books(context: &State<Arc<AppContext>>) -> ApiResult<Json<Vec<BookResponse>>> {
    let books = context.book_service()?.list_books().await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Fetch one book
///
/// Returns 404 when no book is stored at `id`.
#[get("/books/<id>")]
pub async fn get_book(id: &str, context: &State<Arc<AppContext>>) -> ApiResult<Json<BookResponse>> {
    let book = context.book_service()?.get_book(id).await?;
    Ok(Json(book.into()))
}

/// Create a book under a freshly generated id
#[post("/books", data = "<payload>")]
pub async fn create_book(
    payload: Json<BookPayload>,
    context: &State<Arc<AppContext>>,
) -> ApiResult<Json<BookResponse>> {
    let book = context
        .book_service()?
        .create_book(payload.into_inner().into())
        .await?;
    info!(book_id = %book.id, "Book created");
    Ok(Json(book.into()))
}

/// Create or replace the book stored at `id`
///
/// # Authentication
///
/// Requires HTTP Basic credentials matching the configured settings.
#[post("/books/<id>", data = "<payload>")]
pub async fn update_book(
    id: &str,
    auth: BasicAuth,
    payload: Json<BookPayload>,
    context: &State<Arc<AppContext>>,
) -> ApiResult<Json<BookResponse>> {
    let book = context
        .book_service()?
        .update_book(id, payload.into_inner().into())
        .await?;
    info!(book_id = %book.id, username = %auth.username, "Book updated");
    Ok(Json(book.into()))
}
