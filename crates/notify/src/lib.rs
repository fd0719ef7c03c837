//! Core notification logic: the aging message buffer and the event adapter.
//!
//! [`AgingBuffer`] keeps a rolling time window of recent chat lines and
//! renders them into a single notification body. [`EventAdapter`] translates
//! join/part/message events into buffer appends, gated by two visibility
//! toggles, and pushes the rendered block to a [`NotificationSink`].
//!
//! Nothing in this crate performs I/O; the sink is supplied by the app.

pub mod adapter;
pub mod buffer;

pub use adapter::{EventAdapter, NotificationSink, Toggles};
pub use buffer::{AgingBuffer, DEFAULT_RETENTION_MS};
