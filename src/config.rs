use serenity::all::GuildId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://clanbot.sqlite?mode=rwc";

pub struct Config {
    pub discord_bot_token: String,
    /// The only guild whose clans this bot manages.
    pub guild_id: GuildId,

    pub database_url: String,
    /// Directory for the rolling log file, console only when unset.
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id = std::env::var("GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GUILD_ID".to_string()))?;

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            guild_id: parse_guild_id(&guild_id)?,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|dir| !dir.is_empty()),
        })
    }
}

/// Parses a guild snowflake, rejecting zero which Discord never assigns.
fn parse_guild_id(value: &str) -> Result<GuildId, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(GuildId::new)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "GUILD_ID".to_string(),
            value: value.to_string(),
        })
}
