//! Book HTTP routes
//!
//! Endpoints for listing, fetching, and creating books, plus the landing
//! greeting. Each handler is a single request/response transaction with
//! no cross-request state.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::model::{Book, NewBook};
use crate::repo::BookRepository;

use super::errors::ApiError;

// ==================
// Shared State
// ==================

/// State shared across book handlers
pub struct BooksState {
    pub repo: BookRepository,
}

impl BooksState {
    pub fn new(repo: BookRepository) -> Self {
        Self { repo }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Routes
// ==================

/// Landing route at the root path
pub fn landing_routes() -> Router {
    Router::new().route("/", get(homepage_handler))
}

/// Book CRUD routes
pub fn book_routes(state: Arc<BooksState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(post_book_handler))
        .route("/books/:id", get(get_book_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// `GET /` - static greeting, doubles as a liveness check
async fn homepage_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "welcome to the book storage".to_string(),
    })
}

/// `GET /books` - all books as a JSON array, possibly empty
async fn list_books_handler(
    State(state): State<Arc<BooksState>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.repo.list().await?;
    Ok(Json(books))
}

/// `GET /books/:id` - one book, 404 when the id matches nothing
async fn get_book_handler(
    State(state): State<Arc<BooksState>>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, ApiError> {
    let book = state.repo.get(id).await?;
    Ok(Json(book))
}

/// `POST /books` - insert one book, 201 with the assigned id
///
/// Malformed JSON is rejected by the extractor before this body runs.
async fn post_book_handler(
    State(state): State<Arc<BooksState>>,
    Json(new_book): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let created = state.repo.add(new_book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
