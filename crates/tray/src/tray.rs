//! Tray handle, events, and update types.
//!
//! The channel-based interface between the app core and whatever tray
//! backend is in use. The core holds a [`TrayHandle`]; the tray event loop
//! (main thread on some platforms) holds the matching sender/receiver pair.

use std::sync::mpsc;

use crate::menu::MenuState;

/// Configuration for the system tray.
#[derive(Debug, Clone)]
pub struct TrayConfig {
    /// Application name shown in the tray tooltip and menu header.
    pub app_name: String,
    /// Optional icon data (PNG bytes).
    pub icon_data: Option<Vec<u8>>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            app_name: "chantray".into(),
            icon_data: None,
        }
    }
}

/// Events emitted by the tray to the app core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayEvent {
    /// "Show all messages" checkbox flipped; payload is the new state.
    ShowAllMessages(bool),
    /// "Show Joins/Parts" checkbox flipped; payload is the new state.
    ShowJoinsParts(bool),
    /// User clicked "Disconnect" in the context menu.
    DisconnectRequested,
}

/// Updates sent from the app core to the tray.
#[derive(Debug, Clone)]
pub enum TrayUpdate {
    /// IRC connection state changed.
    ConnectionChanged(bool),
    /// Request tray shutdown.
    Shutdown,
}

/// Handle for communicating with the system tray from the app core.
///
/// Keeps a shadow copy of the menu state so the core can rebuild the menu
/// without round-tripping through the backend.
pub struct TrayHandle {
    /// Send updates to the tray.
    update_tx: mpsc::Sender<TrayUpdate>,
    /// Receive events from the tray.
    event_rx: mpsc::Receiver<TrayEvent>,
    /// Current menu state (for tracking).
    state: MenuState,
}

impl TrayHandle {
    /// Creates a new tray handle with its channel pair.
    ///
    /// Returns `(handle, event_sender, update_receiver)` — the sender and
    /// receiver go to the tray event loop.
    pub fn new(config: TrayConfig) -> (Self, mpsc::Sender<TrayEvent>, mpsc::Receiver<TrayUpdate>) {
        let (update_tx, update_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let handle = Self {
            update_tx,
            event_rx,
            state: MenuState {
                app_name: config.app_name,
                ..MenuState::default()
            },
        };

        (handle, event_tx, update_rx)
    }

    /// Updates the connection state shown in the menu header.
    pub fn set_connected(&mut self, connected: bool) {
        self.state.connected = connected;
        let _ = self
            .update_tx
            .send(TrayUpdate::ConnectionChanged(connected));
        tracing::debug!(connected, "tray connection state updated");
    }

    /// Records the "show all messages" checkbox state.
    pub fn set_show_all_messages(&mut self, on: bool) {
        self.state.show_all_messages = on;
    }

    /// Records the "show joins/parts" checkbox state.
    pub fn set_show_joins_parts(&mut self, on: bool) {
        self.state.show_joins_parts = on;
    }

    /// Requests the tray to shut down.
    pub fn shutdown(&self) {
        let _ = self.update_tx.send(TrayUpdate::Shutdown);
    }

    /// Tries to receive a tray event (non-blocking).
    pub fn try_recv_event(&self) -> Option<TrayEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Returns the current menu state.
    pub fn state(&self) -> &MenuState {
        &self.state
    }
}
