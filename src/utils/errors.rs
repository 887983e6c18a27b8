//! Error handling for StudyBuddy
//! 
//! This module defines the main error types used throughout the application.
//! Only configuration failures are meant to reach `main`; operator delivery
//! problems are reported through [`crate::services::Delivery`] instead.

use thiserror::Error;

/// Main error type for StudyBuddy application
#[derive(Error, Debug)]
pub enum StudyBuddyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
    
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),
    
    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for StudyBuddy operations
pub type Result<T> = std::result::Result<T, StudyBuddyError>;

impl StudyBuddyError {
    /// Whether the process must stop because of this error
    pub fn is_fatal(&self) -> bool {
        match self {
            StudyBuddyError::Config(_) => true,
            StudyBuddyError::ConfigLoad(_) => true,
            StudyBuddyError::Logging(_) => true,
            StudyBuddyError::Io(_) => true,
            StudyBuddyError::Telegram(_) => false,
            StudyBuddyError::InvalidInput(_) => false,
        }
    }
    
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StudyBuddyError::Config(_) => ErrorSeverity::Critical,
            StudyBuddyError::ConfigLoad(_) => ErrorSeverity::Critical,
            StudyBuddyError::Logging(_) => ErrorSeverity::Critical,
            StudyBuddyError::Io(_) => ErrorSeverity::Error,
            // A failed reply affects one user; the next update may succeed
            StudyBuddyError::Telegram(_) => ErrorSeverity::Warning,
            StudyBuddyError::InvalidInput(_) => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
