//! bookstore - a minimal HTTP book service backed by a relational table
//!
//! Request flow: handler -> repository -> store, with each layer
//! translating its errors into the vocabulary of the layer above.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod repo;
pub mod store;
