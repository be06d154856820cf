//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::net::TcpListener;

/// A port nothing is listening on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub const TWO_BOOKS: &str = r#"[
    {"id": 1, "title": "Dune", "author": "Frank Herbert", "isbn": "9780441013593", "price": 9.99, "description": "Spice must flow"},
    {"id": 2, "title": "Emma", "author": "Jane Austen", "isbn": "9780141439587", "price": 7.5, "description": "Matchmaking"}
]"#;
