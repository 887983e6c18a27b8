//! Application settings management
//! 
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Environment prefix for structured overrides, e.g. `STUDYBUDDY__BOT__TOKEN`
pub const ENV_PREFIX: &str = "STUDYBUDDY";

/// Plain variable names accepted for the two required settings
pub const LEGACY_TOKEN_VAR: &str = "BOT_TOKEN";
pub const LEGACY_OPERATOR_VAR: &str = "ADMIN_ID";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Chat (user or group) that receives forwarded forms and questions
    pub operator_chat_id: i64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub file_prefix: String,
    pub json: bool,
}

impl Settings {
    /// Load settings from `.env`, `config.toml` and environment variables
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::load(Some("config"))
    }

    /// Load settings from an optional config file plus the process environment
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let defaults = Settings::default();

        let mut builder = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.operator_chat_id", defaults.bot.operator_chat_id)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.file_prefix", defaults.logging.file_prefix)?
            .set_default("logging.json", defaults.logging.json)?;

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override_option("bot.token", std::env::var(LEGACY_TOKEN_VAR).ok())?
            .set_override_option("bot.operator_chat_id", std::env::var(LEGACY_OPERATOR_VAR).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                operator_chat_id: 0,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                file_prefix: "studybuddy.log".to_string(),
                json: false,
            },
        }
    }
}
