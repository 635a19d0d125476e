//! Book storage on PostgreSQL

use async_trait::async_trait;

use super::{BookStore, Repository};
use crate::{
    error::AppResult,
    models::book::{Book, NewBook, UpdateBook},
};

const CREATE_BOOKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id SERIAL PRIMARY KEY,
        title VARCHAR(100) NOT NULL,
        author VARCHAR(100) NOT NULL,
        published_year INTEGER NOT NULL
    )
"#;

impl Repository {
    /// Create the books table when it does not exist yet
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(CREATE_BOOKS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl BookStore for Repository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_year FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, published_year FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, book: &NewBook) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, published_year)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, published_year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.published_year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, changes: &UpdateBook) -> AppResult<Option<Book>> {
        // NULL parameters leave the column as it is
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                published_year = COALESCE($4, published_year)
            WHERE id = $1
            RETURNING id, title, author, published_year
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.author)
        .bind(changes.published_year)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
