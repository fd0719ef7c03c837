//! Notifier configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/chantray/config.toml`
//! - Windows: `%APPDATA%/chantray/config.toml`

use std::path::PathBuf;

use chantray_notify::DEFAULT_RETENTION_MS;
use chantray_session::SessionConfig;
use serde::{Deserialize, Serialize};

/// Notifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// IRC server host name.
    #[serde(default = "default_server")]
    pub server: String,

    /// IRC server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect over TLS.
    #[serde(default = "default_true")]
    pub use_tls: bool,

    /// Nickname (hostname-derived by default; also used as username/realname).
    #[serde(default = "default_nickname")]
    pub nickname: String,

    /// The channel to watch, including its prefix.
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Surface join/part events on start.
    #[serde(default = "default_true")]
    pub show_joins_parts: bool,

    /// Surface channel messages on start.
    #[serde(default = "default_true")]
    pub show_all_messages: bool,

    /// How long an entry remains visible before eviction, in milliseconds.
    #[serde(default = "default_retention_ms")]
    pub retention_ms: u64,
}

fn default_server() -> String {
    "irc.libera.chat".into()
}

fn default_port() -> u16 {
    6697
}

fn default_true() -> bool {
    true
}

fn default_channel() -> String {
    "#chantray".into()
}

fn default_retention_ms() -> u64 {
    DEFAULT_RETENTION_MS
}

fn default_nickname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .map(|h| sanitize_nick(&h))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "chantray".into())
}

/// Reduce a raw host name to a usable IRC nickname: keep alphanumerics,
/// `-` and `_`, and drop anything before the first letter (nicks must not
/// start with a digit or `-`).
fn sanitize_nick(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        .collect();
    cleaned
        .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            use_tls: true,
            nickname: default_nickname(),
            channel: default_channel(),
            show_joins_parts: true,
            show_all_messages: true,
            retention_ms: default_retention_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from disk, or creates a default if not found.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        // Restrict permissions on Unix.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// The connection portion of the config.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            server: self.server.clone(),
            port: self.port,
            use_tls: self.use_tls,
            nickname: self.nickname.clone(),
            channel: self.channel.clone(),
        }
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata).join("chantray").join("config.toml"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join(".config")
            .join("chantray")
            .join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.server, "irc.libera.chat");
        assert_eq!(config.port, 6697);
        assert!(config.use_tls);
        assert!(!config.nickname.is_empty());
        assert_eq!(config.channel, "#chantray");
        assert!(config.show_joins_parts);
        assert!(config.show_all_messages);
        assert_eq!(config.retention_ms, 5000);
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = Config {
            server: "irc.example.net".into(),
            port: 6667,
            use_tls: false,
            nickname: "tester".into(),
            channel: "#testing".into(),
            show_joins_parts: false,
            show_all_messages: true,
            retention_ms: 8000,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.server, "irc.example.net");
        assert_eq!(parsed.port, 6667);
        assert!(!parsed.use_tls);
        assert_eq!(parsed.nickname, "tester");
        assert_eq!(parsed.channel, "#testing");
        assert!(!parsed.show_joins_parts);
        assert!(parsed.show_all_messages);
        assert_eq!(parsed.retention_ms, 8000);
    }

    #[test]
    fn config_partial_toml() {
        // Only specify the channel, rest should use defaults.
        let toml_str = r##"channel = "#rust""##;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.channel, "#rust");
        assert_eq!(config.server, "irc.libera.chat");
        assert_eq!(config.retention_ms, 5000);
        assert!(config.show_all_messages);
    }

    #[test]
    fn session_config_mirrors_connection_fields() {
        let config = Config {
            server: "irc.example.net".into(),
            port: 6667,
            use_tls: false,
            nickname: "tester".into(),
            channel: "#testing".into(),
            ..Config::default()
        };

        let session = config.session();
        assert_eq!(session.server, "irc.example.net");
        assert_eq!(session.port, 6667);
        assert!(!session.use_tls);
        assert_eq!(session.nickname, "tester");
        assert_eq!(session.channel, "#testing");
    }

    #[test]
    fn sanitize_nick_strips_invalid_chars() {
        assert_eq!(sanitize_nick("my-laptop"), "my-laptop");
        assert_eq!(sanitize_nick("box.local"), "boxlocal");
        assert_eq!(sanitize_nick("0042-node"), "node");
        assert_eq!(sanitize_nick("!!!"), "");
    }

    #[test]
    fn config_path_not_empty() {
        let path = config_path().unwrap();
        assert!(path.to_string_lossy().contains("chantray"));
    }

    #[test]
    fn config_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config {
            nickname: "savetest".into(),
            ..Config::default()
        };

        // Write manually since save() uses config_path().
        let content = toml::to_string_pretty(&config).unwrap();
        std::fs::write(&path, &content).unwrap();

        // Read back.
        let loaded_content = std::fs::read_to_string(&path).unwrap();
        let loaded: Config = toml::from_str(&loaded_content).unwrap();
        assert_eq!(loaded.nickname, "savetest");
    }
}
