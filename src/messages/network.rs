//! Network messages - communication between App and Network layers

use reqwest::Url;

use crate::error::LoadError;
use crate::models::Book;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch and normalize the book list
    LoadBooks {
        id: u64,
        url: Url,
    },
    /// Cancel a pending load
    CancelRequest(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The load finished, with either the normalized list or the reason it failed
    BooksLoaded {
        id: u64,
        result: Result<Vec<Book>, LoadError>,
        time_ms: u64,
    },
    /// The load was cancelled before it finished
    Cancelled {
        id: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::BooksLoaded { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }
}
