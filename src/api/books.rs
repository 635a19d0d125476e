//! Book API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::book::{Book, BookCreated, CreateBook, MessageResponse, UpdateBook},
    AppState,
};

use super::{ApiJson, ApiPath};

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome to the Book Service API"))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookCreated),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<(StatusCode, Json<BookCreated>)> {
    let book = state.services.books.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(BookCreated {
            message: "Book added successfully".to_string(),
            id: book.id,
        }),
    ))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid field", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(id, &data).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage error", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
