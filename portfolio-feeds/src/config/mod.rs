//! Configuration loading.
//!
//! This module handles parsing the optional `portfolio.toml` file and
//! reading credentials from the environment. Every key has a default, so a
//! missing file yields a usable configuration once a GitHub user is set.

mod cache;
mod credentials;
mod error;

pub use cache::{CachePolicy, DEFAULT_MAX_AGE_SECS};
pub use credentials::{
    SpotifyCredentials, SPOTIFY_CLIENT_ID_VAR, SPOTIFY_CLIENT_SECRET_VAR,
    SPOTIFY_REFRESH_TOKEN_VAR,
};
pub use error::ConfigError;

use crate::view::Paging;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Repositories shown per carousel page when not configured.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct FeedsConfig {
    /// Account whose public repositories are listed.
    pub github_user: String,

    /// Address the proxy listens on.
    pub listen: SocketAddr,

    /// Cache policy applied to successful responses.
    pub cache: CachePolicy,

    /// Carousel layout.
    pub carousel: CarouselConfig,

    /// Upstream base URLs.
    pub upstream: UpstreamConfig,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            github_user: String::new(),
            listen: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cache: CachePolicy::default(),
            carousel: CarouselConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

/// Carousel layout settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Items per page.
    pub page_size: usize,

    /// Whether gestures move a whole page or a single item.
    pub paging: Paging,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            paging: Paging::default(),
        }
    }
}

/// Base URLs of the upstream APIs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// GitHub REST API root.
    pub github_api: String,

    /// Spotify accounts service root (token exchange).
    pub spotify_accounts: String,

    /// Spotify Web API root.
    pub spotify_api: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            github_api: "https://api.github.com".to_string(),
            spotify_accounts: "https://accounts.spotify.com".to_string(),
            spotify_api: "https://api.spotify.com".to_string(),
        }
    }
}

impl FeedsConfig {
    /// Loads configuration from a TOML file.
    ///
    /// The result is not validated; call [`FeedsConfig::validate`] after
    /// applying command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a given file can't be read or parsed.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_user.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "github-user",
                message: "must not be empty".to_string(),
            });
        }

        if self.carousel.page_size == 0 {
            return Err(ConfigError::ValidationError {
                field: "carousel.page-size",
                message: "must be at least 1".to_string(),
            });
        }

        self.upstream.validate()
    }
}

impl UpstreamConfig {
    /// Checks that every base URL is an http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("upstream.github-api", &self.github_api)?;
        validate_url("upstream.spotify-accounts", &self.spotify_accounts)?;
        validate_url("upstream.spotify-api", &self.spotify_api)
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::ValidationError {
            field,
            message: format!("not a valid http(s) URL: {value}"),
        }),
    }
}
