//! Network layer - fetching and normalizing the book list
//!
//! The Network actor receives load commands and sends back outcomes.

pub mod actor;
pub mod client;
pub mod normalize;

pub use actor::NetworkActor;
pub use client::{create_client, execute_load, fetch_books};
pub use normalize::{normalize_books, parse_book_list};
