//! Repository listing entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the listing endpoint.
///
/// Field names match the GitHub REST payload so the upstream JSON
/// deserializes directly and the proxy re-emits the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository name.
    pub name: String,

    /// Short description, if any.
    #[serde(default)]
    pub description: Option<String>,

    /// Primary language, if detected.
    #[serde(default)]
    pub language: Option<String>,

    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,

    /// Fork count.
    #[serde(default)]
    pub forks_count: u64,

    /// Time of the last push. `None` for repositories never pushed to.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    /// Topic labels in upstream order.
    #[serde(default)]
    pub topics: Vec<String>,

    /// Canonical web URL.
    pub html_url: String,

    /// Whether visibility is restricted.
    #[serde(default)]
    pub private: bool,

    /// Whether this is a fork.
    #[serde(default)]
    pub fork: bool,
}

impl RepositoryEntry {
    /// Whether the entry belongs in the public feed.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        !self.fork && !self.private
    }
}
