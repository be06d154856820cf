//! Headless mode - one load, printed as plain text

use std::process::ExitCode;
use reqwest::Url;

use crate::config::Config;
use crate::models::LoadState;
use crate::network::client::{create_client, fetch_books};
use crate::ui::render_plain;

/// Perform the single load and return the settled state
pub async fn load_once(client: &reqwest::Client, url: &Url) -> LoadState {
    let mut state = LoadState::Loading;
    state.settle(fetch_books(client, url).await);
    state
}

pub async fn run(config: &Config, url: Url) -> anyhow::Result<ExitCode> {
    let client = create_client(config);
    tracing::info!(%url, "Headless load");

    let state = load_once(&client, &url).await;
    if let Some(error) = state.error() {
        tracing::error!(%url, error, "Headless load failed");
        eprintln!("{}", render_plain(&state));
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", render_plain(&state));
    Ok(ExitCode::SUCCESS)
}
