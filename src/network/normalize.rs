//! Response normalization - turns a books payload into a typed list
//!
//! The API may answer with a bare array or with a paginated wrapper whose
//! `content` field holds the array. Both normalize to `Vec<Book>`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;
use crate::models::Book;

/// Parse a response body and normalize it to a book list
pub fn parse_book_list(body: &str) -> Result<Vec<Book>, LoadError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| LoadError::Transport(format!("Invalid JSON payload: {}", e)))?;
    normalize_books(&payload)
}

/// Normalize an already-parsed payload
pub fn normalize_books(payload: &Value) -> Result<Vec<Book>, LoadError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(items)) => items,
            _ => return Err(shape_error(payload)),
        },
        _ => return Err(shape_error(payload)),
    };

    items
        .iter()
        .map(Book::deserialize)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::debug!(error = %e, "Book record did not decode");
            shape_error(payload)
        })
}

fn shape_error(payload: &Value) -> LoadError {
    LoadError::Shape {
        payload: payload.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookId;

    const TWO_BOOKS: &str = r#"[
        {"id": 1, "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593", "price": 9.99, "description": "Spice"},
        {"id": 2, "title": "Emma", "author": "Jane Austen", "isbn": "9780141439587", "price": 7.5, "description": "Matchmaking"}
    ]"#;

    #[test]
    fn test_plain_array() {
        let books = parse_book_list(TWO_BOOKS).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, BookId::Number(1));
        assert_eq!(books[1].author, "Jane Austen");
        assert_eq!(books[1].price, Some(7.5));
    }

    #[test]
    fn test_page_wrapper_uses_content() {
        let body = format!(
            r#"{{"content": {}, "totalElements": 2, "number": 0, "size": 20}}"#,
            TWO_BOOKS
        );
        let books = parse_book_list(&body).unwrap();
        assert_eq!(books, parse_book_list(TWO_BOOKS).unwrap());
    }

    #[test]
    fn test_empty_object_is_shape_error() {
        let err = parse_book_list("{}").unwrap_err();
        assert_eq!(err, LoadError::Shape { payload: "{}".into() });
        assert_eq!(err.to_string(), "Unexpected response shape: {}");
    }

    #[test]
    fn test_content_not_array_is_shape_error() {
        let err = parse_book_list(r#"{"content": null}"#).unwrap_err();
        assert!(matches!(err, LoadError::Shape { ref payload } if payload.contains("content")));

        let err = parse_book_list(r#""hello""#).unwrap_err();
        assert!(matches!(err, LoadError::Shape { .. }));
    }

    #[test]
    fn test_array_of_non_books_is_shape_error() {
        let err = parse_book_list("[1, 2, 3]").unwrap_err();
        assert_eq!(err, LoadError::Shape { payload: "[1,2,3]".into() });
    }

    #[test]
    fn test_odd_stock_does_not_reject_the_list() {
        let body = r#"[
            {"id": 1, "title": "Dune", "stock": 4},
            {"id": 2, "title": "Emma", "stock": "3"},
            {"id": 3, "title": "Ulysses", "stock": "out of print"}
        ]"#;
        let books = parse_book_list(body).unwrap();
        let stock: Vec<_> = books.iter().map(|b| b.stock).collect();
        assert_eq!(stock, [Some(4), Some(3), None]);
    }

    #[test]
    fn test_shape_error_keeps_key_order() {
        let err = parse_book_list(r#"{"zeta": 1, "items": [], "alpha": 2}"#).unwrap_err();
        assert_eq!(err.to_string(), r#"Unexpected response shape: {"zeta":1,"items":[],"alpha":2}"#);
    }

    #[test]
    fn test_empty_array_is_fine() {
        assert!(parse_book_list("[]").unwrap().is_empty());
        assert!(parse_book_list(r#"{"content": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_transport_error() {
        let err = parse_book_list("<html>oops</html>").unwrap_err();
        assert!(matches!(err, LoadError::Transport(ref msg) if msg.starts_with("Invalid JSON payload")));
    }
}
