//! Connection lifecycle and the single event-delivery loop.

use chantray_notify::EventAdapter;
use futures_util::StreamExt;
use irc::client::Client;
use tokio_util::sync::CancellationToken;

use crate::error::SessionError;
use crate::events::{ChatEvent, chat_event, is_channel_name};

/// Connection settings for one server and one channel.
///
/// The nickname doubles as username and realname, the way the original
/// desktop clients report a single identity.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server host name.
    pub server: String,
    /// Server port.
    pub port: u16,
    /// Whether to connect over TLS.
    pub use_tls: bool,
    /// Nickname (also used as username and realname).
    pub nickname: String,
    /// The single channel to join, including its prefix.
    pub channel: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            server: "irc.libera.chat".into(),
            port: 6697,
            use_tls: true,
            nickname: "chantray".into(),
            channel: "#chantray".into(),
        }
    }
}

/// A connected IRC session bound to one channel.
pub struct Session {
    client: Client,
}

impl Session {
    /// Connects to the server and registers; the configured channel is
    /// joined automatically once registration completes.
    pub async fn connect(config: SessionConfig) -> Result<Self, SessionError> {
        if !is_channel_name(&config.channel) {
            return Err(SessionError::InvalidChannel(config.channel));
        }

        let irc_config = irc::client::prelude::Config {
            server: Some(config.server.clone()),
            port: Some(config.port),
            use_tls: Some(config.use_tls),
            nickname: Some(config.nickname.clone()),
            username: Some(config.nickname.clone()),
            realname: Some(config.nickname.clone()),
            channels: vec![config.channel.clone()],
            version: Some(format!("chantray {}", env!("CARGO_PKG_VERSION"))),
            ..Default::default()
        };

        let client = Client::from_config(irc_config).await?;
        client.identify()?;

        tracing::info!(
            server = %config.server,
            port = config.port,
            channel = %config.channel,
            "IRC session registered"
        );

        Ok(Self { client })
    }

    /// Drains the protocol stream until cancellation or disconnect.
    ///
    /// All adapter calls happen here, one message at a time — this loop is
    /// the single event-delivery context the adapter assumes. Cancellation
    /// sends QUIT and returns cleanly; a server-side close ends the loop.
    pub async fn run(
        mut self,
        mut adapter: EventAdapter,
        cancel: CancellationToken,
    ) -> Result<(), SessionError> {
        let mut stream = self.client.stream()?;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("disconnect requested, sending QUIT");
                    self.client.send_quit("chantray signing off")?;
                    break;
                }
                message = stream.next() => match message {
                    Some(Ok(message)) => {
                        if let Some(event) = chat_event(&message) {
                            dispatch(&mut adapter, event);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::warn!("server closed the connection");
                        break;
                    }
                },
            }
        }

        Ok(())
    }
}

fn dispatch(adapter: &mut EventAdapter, event: ChatEvent) {
    match event {
        ChatEvent::Joined { channel, nick } => {
            tracing::debug!(%channel, %nick, "join");
            adapter.on_join(&channel, &nick);
        }
        ChatEvent::Parted { channel, nick } => {
            tracing::debug!(%channel, %nick, "part");
            adapter.on_part(&channel, &nick);
        }
        ChatEvent::Spoke {
            channel,
            nick,
            text,
        } => {
            tracing::debug!(%channel, %nick, "message");
            adapter.on_message(&channel, &nick, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chantray_notify::NotificationSink;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        blocks: Arc<Mutex<Vec<String>>>,
    }

    impl NotificationSink for RecordingSink {
        fn display(&self, body: &str) {
            self.blocks.lock().unwrap().push(body.to_string());
        }
    }

    #[test]
    fn default_config_is_tls_on_6697() {
        let config = SessionConfig::default();
        assert_eq!(config.port, 6697);
        assert!(config.use_tls);
        assert!(is_channel_name(&config.channel));
    }

    #[test]
    fn dispatch_routes_events_to_adapter() {
        let blocks = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingSink {
            blocks: Arc::clone(&blocks),
        };
        let mut adapter = EventAdapter::new(Box::new(sink), 5000);

        dispatch(
            &mut adapter,
            ChatEvent::Joined {
                channel: "#chan".into(),
                nick: "alice".into(),
            },
        );
        dispatch(
            &mut adapter,
            ChatEvent::Spoke {
                channel: "#chan".into(),
                nick: "bob".into(),
                text: "hi".into(),
            },
        );
        dispatch(
            &mut adapter,
            ChatEvent::Parted {
                channel: "#chan".into(),
                nick: "alice".into(),
            },
        );

        let blocks = blocks.lock().unwrap();
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].contains("alice has joined #chan"));
        assert!(blocks[1].contains("bob: hi"));
        assert!(blocks[2].contains("alice has left #chan"));
    }

    #[tokio::test]
    async fn connect_rejects_non_channel_target() {
        let config = SessionConfig {
            channel: "alice".into(),
            ..SessionConfig::default()
        };

        match Session::connect(config).await {
            Err(SessionError::InvalidChannel(name)) => assert_eq!(name, "alice"),
            Err(other) => panic!("expected InvalidChannel, got {other}"),
            Ok(_) => panic!("connect unexpectedly succeeded"),
        }
    }
}
