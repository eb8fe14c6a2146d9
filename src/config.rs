//! Bot configuration loaded from a JSON file.
//!
//! Every field has a default, so an empty object `{}` is a valid file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::command::domain::{ChatUser, EmojiId, UserId};
use crate::command::services::DispatchSettings;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable single line output.
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,tuinbot=debug`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// A guild member known to the console runner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberConfig {
    /// Account identifier.
    pub id: u64,
    /// Name shown in the guild.
    pub display_name: String,
    /// Global account name.
    pub account_name: String,
    /// Whether the account is a bot.
    #[serde(default)]
    pub is_bot: bool,
}

impl MemberConfig {
    /// Converts the entry into a chat member.
    #[must_use]
    pub fn to_user(&self) -> ChatUser {
        let user = ChatUser::new(
            UserId::new(self.id),
            self.display_name.as_str(),
            self.account_name.as_str(),
        );
        if self.is_bot { user.as_bot() } else { user }
    }
}

/// A custom emoji available to the console runner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomEmojiConfig {
    /// Emoji name.
    pub name: String,
    /// Emoji identifier.
    pub id: u64,
}

impl CustomEmojiConfig {
    /// The emoji identifier.
    #[must_use]
    pub const fn emoji_id(&self) -> EmojiId {
        EmojiId::new(self.id)
    }
}

/// Top-level bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Character prefixing every command.
    pub trigger: char,
    /// Seconds before a reply and its trigger are deleted.
    pub reply_ttl_secs: u64,
    /// Seconds before a help page and its trigger are deleted.
    pub help_ttl_secs: u64,
    /// Most reactions other members may attach to one target.
    pub max_reactions_per_target: usize,
    /// Most recorded typing messages waiting for one target.
    pub max_typing_messages_per_target: usize,
    /// Name of the command listing every other command.
    pub overview_command: String,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Members known to the console runner.
    pub members: Vec<MemberConfig>,
    /// Custom emojis known to the console runner.
    pub custom_emojis: Vec<CustomEmojiConfig>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            trigger: '!',
            reply_ttl_secs: 10,
            help_ttl_secs: 40,
            max_reactions_per_target: 6,
            max_typing_messages_per_target: 1,
            overview_command: "tuin".to_owned(),
            logging: LoggingConfig::default(),
            members: Vec::new(),
            custom_emojis: Vec::new(),
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A value is outside its allowed range.
    #[error("invalid config value for '{field}': {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl BotConfig {
    /// Loads and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let raw = fs::read_to_string(file).map_err(|source| ConfigError::Read {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|error| match error {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: file.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is invalid or a value is out of
    /// range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a whitespace or alphanumeric
    /// trigger, zero TTLs, a zero per-target limit, or an empty overview
    /// command name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger.is_whitespace() || self.trigger.is_alphanumeric() {
            return Err(ConfigError::Invalid {
                field: "trigger",
                reason: format!("'{}' cannot prefix commands", self.trigger),
            });
        }
        if self.reply_ttl_secs == 0 {
            return Err(zero("reply_ttl_secs"));
        }
        if self.help_ttl_secs == 0 {
            return Err(zero("help_ttl_secs"));
        }
        if self.max_reactions_per_target == 0 {
            return Err(zero("max_reactions_per_target"));
        }
        if self.max_typing_messages_per_target == 0 {
            return Err(zero("max_typing_messages_per_target"));
        }
        if self.overview_command.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "overview_command",
                reason: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    /// Auto-deletion delay for ordinary replies.
    #[must_use]
    pub const fn reply_ttl(&self) -> Duration {
        Duration::from_secs(self.reply_ttl_secs)
    }

    /// Auto-deletion delay for help pages.
    #[must_use]
    pub const fn help_ttl(&self) -> Duration {
        Duration::from_secs(self.help_ttl_secs)
    }

    /// Settings for the command dispatcher.
    #[must_use]
    pub const fn dispatch_settings(&self) -> DispatchSettings {
        DispatchSettings {
            trigger: self.trigger,
            help_ttl: self.help_ttl(),
        }
    }
}

fn zero(field: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: "must be greater than zero".to_owned(),
    }
}
