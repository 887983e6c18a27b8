//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use regex::Regex;
use crate::utils::errors::{StudyBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(StudyBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    let token_shape = Regex::new(r"^\d+:[A-Za-z0-9_-]+$")
        .map_err(|e| StudyBuddyError::Config(format!("Token pattern failed to compile: {}", e)))?;
    if !token_shape.is_match(&config.token) {
        return Err(StudyBuddyError::Config(
            "Bot token is malformed, expected <bot id>:<secret>".to_string()
        ));
    }

    if config.operator_chat_id == 0 {
        return Err(StudyBuddyError::Config(
            "Operator chat ID is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StudyBuddyError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StudyBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if config.directory.is_some() && config.file_prefix.is_empty() {
        return Err(StudyBuddyError::Config(
            "Log file prefix is required when a log directory is set".to_string()
        ));
    }
    
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "123456:ABC-DEF1234ghIkl-zyx57W2v1u123ew11".to_string();
        settings.bot.operator_chat_id = -1001234567890;
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_rejected() {
        let mut settings = valid_settings();
        settings.bot.token = String::new();
        assert_matches!(validate_settings(&settings), Err(StudyBuddyError::Config(_)));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let mut settings = valid_settings();
        settings.bot.token = "not a token".to_string();
        assert_matches!(validate_settings(&settings), Err(StudyBuddyError::Config(msg)) if msg.contains("malformed"));
    }

    #[test]
    fn test_missing_operator_rejected() {
        let mut settings = valid_settings();
        settings.bot.operator_chat_id = 0;
        assert_matches!(validate_settings(&settings), Err(StudyBuddyError::Config(msg)) if msg.contains("Operator"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(StudyBuddyError::Config(_)));
    }

    #[test]
    fn test_default_settings_are_incomplete() {
        assert!(Settings::default().validate().is_err());
    }
}
