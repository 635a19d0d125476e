//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Service API",
        version = "0.1.0",
        description = "CRUD REST API over a catalog of books"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::welcome,
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookCreated,
            crate::models::book::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_book_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/books", "/books/{id}", "/health", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {}", path);
        }
    }
}
