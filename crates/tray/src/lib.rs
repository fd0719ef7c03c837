//! System tray interface for the chantray notifier.
//!
//! Defines the context-menu model (two checkbox toggles plus Disconnect) and
//! the channel pair the app core uses to talk to the tray:
//! - [`TrayEvent`] — events from tray to core (toggle flipped, disconnect)
//! - [`TrayUpdate`] — updates from core to tray (connection state, shutdown)
//!
//! The actual icon rendering depends on `tray-icon`/`muda`, which pull in
//! platform system libraries; this crate stays backend-independent and only
//! models the menu and the channels.
//!
//! # Platform notes
//! - Linux: StatusNotifierItem (Wayland) or the X11 tray protocol
//! - Windows: Win32 Shell_NotifyIcon
//! - The tray event loop must run on the main thread on some platforms

mod menu;
mod tray;

pub use menu::{MenuAction, MenuItem, MenuState};
pub use tray::{TrayConfig, TrayEvent, TrayHandle, TrayUpdate};
