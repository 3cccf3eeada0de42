//! SQL-backed book repository

use sqlx::SqlitePool;

use crate::model::{Book, NewBook};

use super::errors::{RepoError, RepoResult};

/// Repository over the `books` table.
///
/// Holds a cloned pool handle; cheap to clone and safe to share across
/// concurrent handler invocations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch all books, in store-determined order.
    ///
    /// An empty table yields an empty vec, not an error.
    pub async fn list(&self) -> RepoResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT id, title, author, price FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Fetch one book by id.
    ///
    /// Zero matching rows is `RepoError::NotFound`, distinct from any
    /// storage failure.
    pub async fn get(&self, id: i64) -> RepoResult<Book> {
        sqlx::query_as::<_, Book>("SELECT id, title, author, price FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound)
    }

    /// Insert one book and return it with the store-assigned id.
    ///
    /// Invariants are checked before the store is touched; a payload with
    /// an empty title/author or a negative price never reaches SQL.
    pub async fn add(&self, new_book: NewBook) -> RepoResult<Book> {
        new_book.validate().map_err(RepoError::Validation)?;

        let result = sqlx::query("INSERT INTO books (title, author, price) VALUES (?, ?, ?)")
            .bind(&new_book.title)
            .bind(&new_book.author)
            .bind(new_book.price)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, "book inserted");
        Ok(new_book.into_book(id))
    }
}
