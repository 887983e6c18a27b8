//! Helper functions and utilities
//! 
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc, Duration};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Human readable age of a timestamp, used when logging parked sessions
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let diff = now.signed_duration_since(timestamp);
    
    if diff < Duration::minutes(1) {
        "just now".to_string()
    } else if diff < Duration::hours(1) {
        format!("{} minutes ago", diff.num_minutes())
    } else if diff < Duration::days(1) {
        format!("{} hours ago", diff.num_hours())
    } else if diff < Duration::weeks(1) {
        format!("{} days ago", diff.num_days())
    } else {
        format_timestamp(timestamp)
    }
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("this is a long text", 10), "this is...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        // Cyrillic and emoji must never be split mid-codepoint
        assert_eq!(truncate_text("Привет, мир!", 8), "Приве...");
        assert_eq!(truncate_text("📅📅📅📅📅", 4), "📅...");
    }

    #[test]
    fn test_format_relative_time() {
        assert_eq!(format_relative_time(Utc::now()), "just now");
        let earlier = Utc::now() - Duration::minutes(5);
        assert_eq!(format_relative_time(earlier), "5 minutes ago");
    }
}
