//! Feed error types.

use std::fmt;
use thiserror::Error;

/// Upstream service a fetcher talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Source-hosting API (repository listing).
    GitHub,
    /// Music-streaming API (token exchange and playback state).
    Spotify,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitHub => f.write_str("GitHub"),
            Self::Spotify => f.write_str("Spotify"),
        }
    }
}

/// Errors that can occur while fetching a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Upstream answered with a non-success status.
    #[error("{service} API returned status {status}")]
    Upstream { service: Service, status: u16 },

    /// Upstream answered but had nothing usable.
    #[error("No track data available")]
    NotFound,

    /// Network or decoding failure.
    #[error("{service} transport error: {message}")]
    Transport { service: Service, message: String },
}

impl FeedError {
    /// Keeps only the first line of `err`, since octocrab appends a backtrace.
    pub(crate) fn transport(service: Service, err: impl fmt::Display) -> Self {
        let message = err.to_string();
        Self::Transport {
            service,
            message: message.lines().next().unwrap_or_default().trim_end().to_string(),
        }
    }

    /// Returns the upstream status code, if the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for FeedError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::Upstream {
                service: Service::GitHub,
                status: source.status_code.as_u16(),
            },
            other => Self::transport(Service::GitHub, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_exposes_status() {
        let err = FeedError::Upstream {
            service: Service::Spotify,
            status: 401,
        };

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "Spotify API returned status 401");
        assert_eq!(FeedError::NotFound.status(), None);
    }

    #[test]
    fn transport_message_drops_trailing_backtrace() {
        let err = FeedError::transport(
            Service::GitHub,
            "Serde Error: EOF while parsing\nFound at:\n   0: octocrab::from_response\n",
        );

        assert_eq!(
            err.to_string(),
            "GitHub transport error: Serde Error: EOF while parsing"
        );
    }
}
