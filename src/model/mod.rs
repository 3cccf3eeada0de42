//! Data model for the bookstore
//!
//! A single entity: the `Book`. Rows are mapped to and from the
//! `books` table by the repository.

mod book;

pub use book::{Book, NewBook};
