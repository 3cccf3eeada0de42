//! HTTP error translation
//!
//! Maps the repository error taxonomy onto HTTP statuses and the
//! `{"message": ...}` error body every endpoint uses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::repo::RepoError;

/// API errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// No book with the requested id
    #[error("Book not found")]
    NotFound,

    /// Request payload violates the entity invariants
    #[error("{0}")]
    Validation(String),

    /// Store access failed; carries the raw error text
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => ApiError::NotFound,
            RepoError::Validation(reason) => ApiError::Validation(reason),
            RepoError::Storage(cause) => ApiError::Internal(cause.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repo_error_mapping_is_tag_driven() {
        assert!(matches!(
            ApiError::from(RepoError::NotFound),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(RepoError::Validation("x".to_string())),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from(RepoError::Storage(sqlx::Error::PoolClosed)),
            ApiError::Internal(_)
        ));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound.to_string(), "Book not found");
    }
}
