//! Repository layer for database operations

pub mod books;
pub mod memory;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::book::{Book, NewBook, UpdateBook},
};

pub use memory::MemoryStore;

/// Storage accessor for book records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Insert a book and return it with its assigned id
    async fn insert(&self, book: &NewBook) -> AppResult<Book>;

    /// Apply the supplied fields; `None` when no book has this id
    async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Option<Book>>;

    /// Returns whether a book was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a connection pool using the database configuration
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }
}
