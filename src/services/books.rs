//! Book management service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::BookStore,
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book with id {} not found", id))
}

/// Log a storage failure and replace it with the caller-facing message.
/// Errors the caller can act on pass through untouched.
fn storage_failure(message: String) -> impl FnOnce(AppError) -> AppError {
    move |err| match err {
        AppError::NotFound(_) | AppError::Validation(_) | AppError::RouteNotFound => err,
        other => {
            tracing::error!("{}: {}", message, other);
            AppError::Storage(message)
        }
    }
}

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store
            .list()
            .await
            .map_err(storage_failure("An error occurred while fetching books".into()))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.store
            .get(id)
            .await
            .map_err(storage_failure(format!("An error occurred while fetching book {}", id)))?
            .ok_or_else(|| {
                tracing::warn!("Book {} not found", id);
                not_found(id)
            })
    }

    /// Validate and persist a new book, returning the stored record
    pub async fn create(&self, data: CreateBook) -> AppResult<Book> {
        let new_book = data.into_new_book().inspect_err(|e| {
            tracing::warn!("Rejected book creation: {}", e);
        })?;

        let book = self
            .store
            .insert(&new_book)
            .await
            .map_err(storage_failure("An error occurred while adding the book".into()))?;

        tracing::info!("Book added: {} (id={})", book.title, book.id);
        Ok(book)
    }

    /// Apply a partial update; fields absent from `changes` are kept
    pub async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Book> {
        changes.check().inspect_err(|e| {
            tracing::warn!("Rejected update of book {}: {}", id, e);
        })?;

        let book = self
            .store
            .update(id, changes)
            .await
            .map_err(storage_failure(format!("An error occurred while updating book {}", id)))?
            .ok_or_else(|| {
                tracing::warn!("Cannot update book {}: not found", id);
                not_found(id)
            })?;

        tracing::info!("Book updated: {} (id={})", book.title, book.id);
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let removed = self
            .store
            .delete(id)
            .await
            .map_err(storage_failure(format!("An error occurred while deleting book {}", id)))?;

        if !removed {
            tracing::warn!("Cannot delete book {}: not found", id);
            return Err(not_found(id));
        }

        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }

    /// Readiness probe for the underlying store
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
