//! Storage connector
//!
//! Opens and validates the SQLite connection pool and bootstraps the
//! `books` table. The pool is built once at startup and injected into the
//! repository; nothing in this crate holds it as global state.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors from opening or bootstrapping the store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database URL could not be parsed
    #[error("invalid database url: {0}")]
    InvalidUrl(sqlx::Error),

    /// Connection or bootstrap statement failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const BOOKS_TABLE_DDL: &str = "\
CREATE TABLE IF NOT EXISTS books (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    title  TEXT    NOT NULL,
    author TEXT    NOT NULL,
    price  REAL    NOT NULL
)";

/// Handle to the relational store
///
/// Cheap to clone (the pool is internally reference-counted) and safe for
/// concurrent use by in-flight handlers.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database at `url`, creating the file if missing,
    /// and ensure the `books` table exists.
    ///
    /// Fails fast: the pool establishes a connection eagerly, so an
    /// unreachable store is reported here rather than on first request.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(StoreError::InvalidUrl)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::bootstrap(pool).await
    }

    /// Connect to a private in-memory database.
    ///
    /// The pool is pinned to a single connection that never expires; an
    /// in-memory SQLite database lives and dies with its connection.
    pub async fn connect_in_memory() -> Result<Self, StoreError> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(StoreError::InvalidUrl)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::bootstrap(pool).await
    }

    async fn bootstrap(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(BOOKS_TABLE_DDL).execute(&pool).await?;
        tracing::info!("connected to the database");
        Ok(Self { pool })
    }

    /// The shared pool handle, for injection into the repository
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
