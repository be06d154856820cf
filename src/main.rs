//! Bookshelf TUI - Actor-based book list viewer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - owns the load state, mounts and tears down the view
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use bookshelf_tui::cli::Cli;
use bookshelf_tui::constants::APP_NAME;
use bookshelf_tui::{headless, logging};
use bookshelf_tui::messages::ui_events::key_to_ui_event;
use bookshelf_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use bookshelf_tui::network::{create_client, NetworkActor};
use bookshelf_tui::ui::draw_ui;
use bookshelf_tui::AppActor;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let books_url = config.books_url()?;

    let _log_guard = logging::init(&config)?;
    tracing::info!(url = %books_url, headless = cli.headless, "Starting {}", APP_NAME);

    if cli.headless {
        return headless::run(&config, books_url).await;
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(create_client(&config), net_resp_tx);
    let network_handle = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor (mounts the view and issues the load)
    let app_actor = AppActor::new(books_url, net_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    let result = run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await;

    // Let the app actor cancel the in-flight load before exiting
    let _ = tokio::time::timeout(Duration::from_millis(500), async {
        let _ = app_handle.await;
        let _ = network_handle.await;
    })
    .await;

    result?;
    tracing::info!("Exiting");
    Ok(ExitCode::SUCCESS)
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}
