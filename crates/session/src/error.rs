//! Error types for the IRC session.

/// Errors produced while connecting to or draining the IRC session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("IRC error: {0}")]
    Irc(#[from] irc::error::Error),

    #[error("not a channel name: {0}")]
    InvalidChannel(String),
}
