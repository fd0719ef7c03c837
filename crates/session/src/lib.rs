//! IRC session glue over the `irc` crate.
//!
//! Owns the connection lifecycle the core does not: connect, identify, join
//! the configured channel, then drain the protocol stream on a single task
//! and feed channel activity to the [`EventAdapter`]. One task drains the
//! stream, so adapter calls stay strictly serialized.
//!
//! No reconnect or backoff: when the server closes the stream the session
//! ends and the app exits.
//!
//! [`EventAdapter`]: chantray_notify::EventAdapter

mod error;
mod events;
mod session;

pub use error::SessionError;
pub use events::{ChatEvent, chat_event, is_channel_name};
pub use session::{Session, SessionConfig};
