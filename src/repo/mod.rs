//! Book repository
//!
//! Translates entity operations into parameterized SQL against the store
//! and maps rows back into [`Book`](crate::model::Book) values.

mod book_repo;
mod errors;

pub use book_repo::BookRepository;
pub use errors::{RepoError, RepoResult};
