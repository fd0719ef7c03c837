//! Context menu model for the system tray.

/// Actions that can be triggered from the tray context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Flip the "show all messages" visibility gate.
    ToggleAllMessages,
    /// Flip the "show joins/parts" visibility gate.
    ToggleJoinsParts,
    /// Disconnect from the server and quit.
    Disconnect,
}

/// A single menu item.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Display text.
    pub label: String,
    /// Whether the item is enabled (clickable).
    pub enabled: bool,
    /// Checkbox state, for toggle items.
    pub checked: Option<bool>,
    /// Optional action triggered on click.
    pub action: Option<MenuAction>,
}

impl MenuItem {
    fn label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
            checked: None,
            action: None,
        }
    }

    fn separator() -> Self {
        Self::label("")
    }

    fn checkbox(label: impl Into<String>, checked: bool, action: MenuAction) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            checked: Some(checked),
            action: Some(action),
        }
    }
}

/// Current state used to build the context menu.
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Application display name.
    pub app_name: String,
    /// Whether the IRC session is connected.
    pub connected: bool,
    /// Checkbox state of the "show all messages" item.
    pub show_all_messages: bool,
    /// Checkbox state of the "show joins/parts" item.
    pub show_joins_parts: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            app_name: "chantray".into(),
            connected: false,
            show_all_messages: true,
            show_joins_parts: true,
        }
    }
}

impl MenuState {
    /// Builds the menu items from the current state.
    pub fn build_menu(&self) -> Vec<MenuItem> {
        let status = if self.connected {
            "Connected"
        } else {
            "Offline"
        };

        vec![
            MenuItem::label(format!("{} - {status}", self.app_name)),
            MenuItem::separator(),
            MenuItem::checkbox(
                "Show all messages",
                self.show_all_messages,
                MenuAction::ToggleAllMessages,
            ),
            MenuItem::checkbox(
                "Show Joins/Parts",
                self.show_joins_parts,
                MenuAction::ToggleJoinsParts,
            ),
            MenuItem::separator(),
            MenuItem {
                label: "Disconnect".into(),
                enabled: true,
                checked: None,
                action: Some(MenuAction::Disconnect),
            },
        ]
    }
}
