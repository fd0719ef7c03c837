use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;

use crate::buffer::AgingBuffer;

/// Destination for the rendered notification block.
///
/// `display` replaces whatever was shown before (not additive) and must not
/// block the caller meaningfully. Display failures are the sink's concern;
/// from the adapter's side the call is infallible.
pub trait NotificationSink: Send {
    fn display(&self, body: &str);
}

/// The two visibility gates, shared between the UI context (tray menu) and
/// the event-delivery context (IRC stream task).
///
/// Both default to on. Flipping a gate affects only future events; entries
/// already in the buffer stay until they age out.
#[derive(Debug)]
pub struct Toggles {
    joins_parts: AtomicBool,
    all_messages: AtomicBool,
}

impl Toggles {
    fn new(joins_parts: bool, all_messages: bool) -> Self {
        Self {
            joins_parts: AtomicBool::new(joins_parts),
            all_messages: AtomicBool::new(all_messages),
        }
    }

    /// Whether join/part events are surfaced.
    pub fn show_joins_parts(&self) -> bool {
        self.joins_parts.load(Ordering::SeqCst)
    }

    /// Whether channel messages are surfaced.
    pub fn show_all_messages(&self) -> bool {
        self.all_messages.load(Ordering::SeqCst)
    }

    /// Set the join/part gate. Idempotent; does not trigger a render.
    pub fn set_show_joins_parts(&self, on: bool) {
        self.joins_parts.store(on, Ordering::SeqCst);
    }

    /// Set the message gate. Idempotent; does not trigger a render.
    pub fn set_show_all_messages(&self, on: bool) {
        self.all_messages.store(on, Ordering::SeqCst);
    }
}

impl Default for Toggles {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Translates IRC channel events into buffer appends and sink displays.
///
/// Owns the [`AgingBuffer`] exclusively; the intake methods are meant to be
/// driven from a single event-delivery task, one event at a time. The
/// toggles are the only state shared with other contexts.
pub struct EventAdapter {
    buffer: AgingBuffer,
    toggles: Arc<Toggles>,
    sink: Box<dyn NotificationSink>,
}

impl EventAdapter {
    /// Create an adapter with both gates on and the given retention window.
    pub fn new(sink: Box<dyn NotificationSink>, retention_ms: u64) -> Self {
        Self {
            buffer: AgingBuffer::new(retention_ms),
            toggles: Arc::new(Toggles::default()),
            sink,
        }
    }

    /// Handle to the shared visibility gates, for the UI context.
    pub fn toggles(&self) -> Arc<Toggles> {
        Arc::clone(&self.toggles)
    }

    /// Set the join/part gate.
    pub fn set_show_joins_parts(&self, on: bool) {
        self.toggles.set_show_joins_parts(on);
    }

    /// Set the message gate.
    pub fn set_show_all_messages(&self, on: bool) {
        self.toggles.set_show_all_messages(on);
    }

    /// Someone joined the channel.
    pub fn on_join(&mut self, channel: &str, nick: &str) {
        if !self.toggles.show_joins_parts() {
            return;
        }
        self.show(format!("{nick} has joined {channel}"));
    }

    /// Someone left the channel.
    pub fn on_part(&mut self, channel: &str, nick: &str) {
        if !self.toggles.show_joins_parts() {
            return;
        }
        self.show(format!("{nick} has left {channel}"));
    }

    /// Someone said something in the channel.
    pub fn on_message(&mut self, _channel: &str, nick: &str, text: &str) {
        if !self.toggles.show_all_messages() {
            return;
        }
        self.show(format!("{nick}: {text}"));
    }

    /// Number of entries currently in the buffer.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn show(&mut self, line: String) {
        let block = self.buffer.append(line, Local::now());
        self.sink.display(&block);
    }
}
