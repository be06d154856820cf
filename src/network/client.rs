//! HTTP client wrapper - fetches the book list and reports the outcome

use std::time::Instant;
use reqwest::header::ACCEPT;
use reqwest::Url;

use crate::config::Config;
use crate::constants::NO_BODY;
use crate::error::LoadError;
use crate::messages::NetworkResponse;
use crate::models::Book;
use crate::network::normalize::parse_book_list;

/// Fetch `GET /api/books` and normalize the payload.
///
/// Non-2xx responses become `LoadError::Http` with the body text (or the
/// `<no-body>` placeholder if it can't be read). Nothing is retried.
pub async fn fetch_books(client: &reqwest::Client, url: &Url) -> Result<Vec<Book>, LoadError> {
    let resp = client
        .get(url.clone())
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_else(|_| NO_BODY.to_string());
        return Err(LoadError::Http {
            status: status.as_u16(),
            body,
        });
    }

    let body = resp.text().await?;
    parse_book_list(&body)
}

/// Run one load and wrap it as a network response
pub async fn execute_load(client: &reqwest::Client, url: &Url, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_books(client, url).await;
    let time_ms = start.elapsed().as_millis() as u64;

    log_outcome(request_id, url, &result);

    NetworkResponse::BooksLoaded {
        id: request_id,
        result,
        time_ms,
    }
}

fn log_outcome(id: u64, url: &Url, result: &Result<Vec<Book>, LoadError>) {
    match result {
        Ok(books) => tracing::debug!(id, %url, count = books.len(), "Books loaded"),
        Err(e @ LoadError::Shape { .. }) => {
            tracing::warn!(id, %url, error = %e, "Unexpected books response shape")
        }
        Err(e) => tracing::error!(id, %url, kind = e.kind(), error = %e, "Books load failed"),
    }
}

/// Create an HTTP client with the configured timeouts
pub fn create_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .user_agent(concat!("bookshelf/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
