//! Text formatting for feed items.

use crate::repos::RepositoryEntry;
use chrono::{DateTime, Utc};

/// Topics shown per repository card.
pub const MAX_DISPLAY_TOPICS: usize = 5;

/// Placeholder for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description available";

/// Formats milliseconds as `m:ss`.
#[must_use]
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{minutes}:{seconds:02}")
}

/// Coarse relative time: hours under a day, days under a week, then weeks.
/// Timestamps in the future read as `0h ago`.
#[must_use]
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_hours().max(0);
    if hours < 24 {
        format!("{hours}h ago")
    } else if hours < 24 * 7 {
        format!("{}d ago", hours / 24)
    } else {
        format!("{}w ago", hours / (24 * 7))
    }
}

/// "Updated 3d ago" style label for a repository card, relative to the current time.
#[must_use]
pub fn updated_label(entry: &RepositoryEntry) -> String {
    match entry.pushed_at {
        Some(pushed_at) => format!("Updated {}", format_time_ago(pushed_at, Utc::now())),
        None => "Never pushed".to_string(),
    }
}

/// The first few topics of `entry`.
#[must_use]
pub fn display_topics(entry: &RepositoryEntry) -> &[String] {
    &entry.topics[..entry.topics.len().min(MAX_DISPLAY_TOPICS)]
}

/// The description of `entry`, or a placeholder.
#[must_use]
pub fn describe(entry: &RepositoryEntry) -> &str {
    entry
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION)
}
