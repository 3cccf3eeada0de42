//! The Book entity
//!
//! `Book` is a persisted row with a store-assigned id. `NewBook` is the
//! insert payload: same fields minus the id, which the caller never picks.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book as stored in the `books` table.
///
/// Invariant: every `Book` handed out by the repository has a non-zero
/// `id` and non-empty `title`/`author`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    /// Store-assigned identifier, immutable once assigned
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Insert payload for a book.
///
/// Carries no `id` field; an `id` present in the request body is dropped
/// during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl NewBook {
    /// Check the entity invariants before any store interaction.
    ///
    /// Returns a human-readable reason on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.author.is_empty() {
            return Err("author must not be empty".to_string());
        }
        if self.price < 0.0 {
            return Err("price must not be negative".to_string());
        }
        Ok(())
    }

    /// Promote the payload to a `Book` once the store has assigned an id.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload_passes() {
        let book = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            price: 15.5,
        };
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let book = NewBook {
            title: String::new(),
            author: "Herbert".to_string(),
            price: 15.5,
        };
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_empty_author_rejected() {
        let book = NewBook {
            title: "Dune".to_string(),
            author: String::new(),
            price: 15.5,
        };
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let book = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            price: -1.0,
        };
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_zero_price_allowed() {
        let book = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            price: 0.0,
        };
        assert!(book.validate().is_ok());
    }

    #[test]
    fn test_payload_ignores_id_field() {
        let payload = json!({
            "id": 42,
            "title": "Dune",
            "author": "Herbert",
            "price": 15.5
        });
        let book: NewBook = serde_json::from_value(payload).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.into_book(1).id, 1);
    }

    #[test]
    fn test_book_json_shape() {
        let book = Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            price: 15.5,
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Dune");
        assert_eq!(value["author"], "Herbert");
        assert_eq!(value["price"], 15.5);
    }
}
