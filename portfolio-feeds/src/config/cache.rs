//! Cache-control policy for proxied responses.

use serde::Deserialize;

/// Default freshness window for [`CachePolicy::MaxAge`].
pub const DEFAULT_MAX_AGE_SECS: u64 = 300;

/// How clients and intermediaries may cache a successful feed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum CachePolicy {
    /// Always fetch fresh data.
    #[default]
    NoStore,

    /// Allow caching for a fixed window.
    MaxAge {
        #[serde(rename = "max-age-secs", default = "default_max_age_secs")]
        max_age_secs: u64,
    },
}

fn default_max_age_secs() -> u64 {
    DEFAULT_MAX_AGE_SECS
}

impl CachePolicy {
    /// Header name/value pairs implementing this policy.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::NoStore => vec![
                (
                    "cache-control",
                    "no-store, no-cache, must-revalidate, proxy-revalidate".to_string(),
                ),
                ("pragma", "no-cache".to_string()),
                ("expires", "0".to_string()),
                ("surrogate-control", "no-store".to_string()),
            ],
            Self::MaxAge { max_age_secs } => vec![(
                "cache-control",
                format!("public, max-age={max_age_secs}"),
            )],
        }
    }
}
