//! Mapping from raw IRC protocol messages to displayable channel events.

use irc::proto::{Command, Message};

/// Channel activity worth surfacing to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Someone joined the channel.
    Joined { channel: String, nick: String },
    /// Someone left the channel.
    Parted { channel: String, nick: String },
    /// Someone said something in the channel.
    Spoke {
        channel: String,
        nick: String,
        text: String,
    },
}

/// Whether `target` is an IRC channel name (RFC 2812 prefixes).
pub fn is_channel_name(target: &str) -> bool {
    target.starts_with(['#', '&', '+', '!'])
}

/// CTCP payloads are delimited by 0x01 and are not chat text.
fn is_ctcp(text: &str) -> bool {
    text.starts_with('\u{1}')
}

/// Maps a protocol message to a [`ChatEvent`], if it is one.
///
/// Only messages with a user prefix qualify; server notices, numerics, and
/// PINGs have no source nickname and are dropped. PRIVMSGs count only when
/// targeted at a channel — private messages and CTCP queries are not
/// surfaced.
pub fn chat_event(message: &Message) -> Option<ChatEvent> {
    let nick = message.source_nickname()?.to_string();

    match &message.command {
        Command::JOIN(channel, _, _) => Some(ChatEvent::Joined {
            channel: channel.clone(),
            nick,
        }),
        Command::PART(channel, _) => Some(ChatEvent::Parted {
            channel: channel.clone(),
            nick,
        }),
        Command::PRIVMSG(target, text) if is_channel_name(target) && !is_ctcp(text) => {
            Some(ChatEvent::Spoke {
                channel: target.clone(),
                nick,
                text: text.clone(),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Message {
        raw.parse().expect("valid IRC line")
    }

    #[test]
    fn join_maps_to_joined() {
        let msg = parse(":alice!user@host JOIN #chan\r\n");
        assert_eq!(
            chat_event(&msg),
            Some(ChatEvent::Joined {
                channel: "#chan".into(),
                nick: "alice".into(),
            })
        );
    }

    #[test]
    fn part_maps_to_parted() {
        let msg = parse(":alice!user@host PART #chan :bye\r\n");
        assert_eq!(
            chat_event(&msg),
            Some(ChatEvent::Parted {
                channel: "#chan".into(),
                nick: "alice".into(),
            })
        );
    }

    #[test]
    fn channel_privmsg_maps_to_spoke() {
        let msg = parse(":bob!user@host PRIVMSG #chan :hi there\r\n");
        assert_eq!(
            chat_event(&msg),
            Some(ChatEvent::Spoke {
                channel: "#chan".into(),
                nick: "bob".into(),
                text: "hi there".into(),
            })
        );
    }

    #[test]
    fn private_privmsg_is_dropped() {
        let msg = parse(":bob!user@host PRIVMSG carol :psst\r\n");
        assert_eq!(chat_event(&msg), None);
    }

    #[test]
    fn ctcp_is_dropped() {
        let msg = parse(":bob!user@host PRIVMSG #chan :\u{1}ACTION waves\u{1}\r\n");
        assert_eq!(chat_event(&msg), None);
    }

    #[test]
    fn server_sourced_messages_are_dropped() {
        let msg = parse(":irc.example.net NOTICE * :*** Looking up your hostname\r\n");
        assert_eq!(chat_event(&msg), None);
    }

    #[test]
    fn ping_is_dropped() {
        let msg = parse("PING :irc.example.net\r\n");
        assert_eq!(chat_event(&msg), None);
    }

    #[test]
    fn channel_name_prefixes() {
        assert!(is_channel_name("#chan"));
        assert!(is_channel_name("&local"));
        assert!(is_channel_name("+modeless"));
        assert!(is_channel_name("!safe"));
        assert!(!is_channel_name("carol"));
        assert!(!is_channel_name(""));
    }
}
