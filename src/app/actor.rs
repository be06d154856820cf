//! App actor - message loop processing UI events and network responses

use reqwest::Url;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        books_url: Url,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(books_url),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Load on mount, then show the loading state
        if let Some(cmd) = self.state.mount() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // A closed UI channel means the view is gone
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
            }
        }

        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(cmd) = self.state.unmount() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.network_tx.send(NetworkCommand::Shutdown);
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectFirst => self.state.select_first(),
            UiEvent::SelectLast => self.state.select_last(),

            UiEvent::StartFilter => self.state.start_filter(),
            UiEvent::FilterInput(c) => self.state.filter_input(c),
            UiEvent::FilterBackspace => self.state.filter_backspace(),
            UiEvent::ApplyFilter => self.state.apply_filter(),
            UiEvent::ClearFilter => self.state.clear_filter(),

            UiEvent::ToggleDetails => self.state.toggle_details(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::ClosePopup => self.state.close_popup(),

            UiEvent::Quit => return true,
        }

        false
    }
}
