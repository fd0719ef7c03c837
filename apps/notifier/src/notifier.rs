//! Desktop notification sink backed by `notify-rust`.

use chantray_notify::NotificationSink;
use notify_rust::Notification;

#[cfg(all(unix, not(target_os = "macos")))]
use std::sync::Mutex;

/// Shows the rendered block as a desktop notification.
///
/// On freedesktop platforms the previous notification is replaced in place
/// by reusing its server-assigned ID; elsewhere each display posts a fresh
/// notification. Display failures are logged and swallowed — the adapter
/// treats the sink as infallible.
pub struct DesktopNotifier {
    app_name: String,
    #[cfg(all(unix, not(target_os = "macos")))]
    last_id: Mutex<Option<u32>>,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            #[cfg(all(unix, not(target_os = "macos")))]
            last_id: Mutex::new(None),
        }
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn show(&self, body: &str) -> Result<(), notify_rust::error::Error> {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(&self.app_name)
            .body(body);

        let mut last_id = self.last_id.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(id) = *last_id {
            notification.id(id);
        }

        let handle = notification.show()?;
        *last_id = Some(handle.id());
        Ok(())
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn show(&self, body: &str) -> Result<(), notify_rust::error::Error> {
        Notification::new()
            .appname(&self.app_name)
            .summary(&self.app_name)
            .body(body)
            .show()?;
        Ok(())
    }
}

impl NotificationSink for DesktopNotifier {
    fn display(&self, body: &str) {
        if let Err(e) = self.show(body) {
            tracing::warn!("failed to display notification: {e}");
        }
    }
}
