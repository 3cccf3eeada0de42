//! HTTP server
//!
//! Router construction, route handlers, and the mapping from repository
//! errors to HTTP statuses. Handlers are pure translation: parse the
//! request, call the repository, render the result.

mod book_routes;
mod errors;
mod server;

pub use book_routes::{book_routes, landing_routes, BooksState};
pub use errors::ApiError;
pub use server::HttpServer;
