//! Repository feed fetched from the GitHub REST API.
//!
//! One authenticated listing call, followed by two pure steps: drop forks and
//! private repositories, then order by popularity and recency.

mod entry;

pub use entry::RepositoryEntry;

use crate::error::{FeedError, Service};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Maximum entries requested from the listing endpoint.
const RESULTS_PER_PAGE: u8 = 50;

/// Authenticated client for one account's repository listing.
#[derive(Debug, Clone)]
pub struct RepoFeed {
    octocrab: Octocrab,
    user: String,
}

impl RepoFeed {
    /// Builds a feed for `user`, authenticating with a bearer `token` against
    /// the API rooted at `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if the client can't be constructed,
    /// e.g. when `api_base` is not a valid URI.
    pub fn new(token: String, user: String, api_base: &str) -> Result<Self, FeedError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_base)?
            .personal_token(token)
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self { octocrab, user })
    }

    /// Returns the account being listed.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Fetches the listing and returns the curated, ordered entries.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Upstream`] with the status code when GitHub
    /// answers with a non-success status, or [`FeedError::Transport`] on a
    /// network or decoding failure.
    pub async fn fetch(&self) -> Result<Vec<RepositoryEntry>, FeedError> {
        let span = info_span!("repo_feed", user = %self.user);

        async {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("sort", "updated")
                .append_pair("per_page", &RESULTS_PER_PAGE.to_string())
                .finish();
            let route = format!("/users/{}/repos?{query}", self.user);
            debug!(route = %route, "Requesting repository listing");

            // Status is checked before decoding so non-JSON error pages keep their code.
            let response = self.octocrab._get(route).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::Upstream {
                    service: Service::GitHub,
                    status: status.as_u16(),
                });
            }

            let body = self.octocrab.body_to_string(response).await?;
            let entries: Vec<RepositoryEntry> = serde_json::from_str(&body)
                .map_err(|e| FeedError::transport(Service::GitHub, e))?;
            let fetched = entries.len();
            let curated = curate(entries);

            info!(fetched, listed = curated.len(), "Repository feed ready");
            Ok(curated)
        }
        .instrument(span)
        .await
    }
}

/// Drops forks and private entries, then stable-sorts by stars descending,
/// breaking ties by most recent push. Entries without a push time sort last
/// within their star count.
#[must_use]
pub fn curate(entries: Vec<RepositoryEntry>) -> Vec<RepositoryEntry> {
    let mut listed: Vec<RepositoryEntry> = entries
        .into_iter()
        .filter(RepositoryEntry::is_listable)
        .collect();

    listed.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.pushed_at.cmp(&a.pushed_at))
    });

    listed
}
