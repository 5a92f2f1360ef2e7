//! Now-playing status from the Spotify Web API.
//!
//! Each call exchanges the stored refresh token for a short-lived access
//! token, then asks for the currently playing item and falls back to the
//! most recently played track. Nothing is retried.

mod snapshot;
mod upstream;

pub use snapshot::{Album, Artist, Image, TrackSnapshot};

use crate::config::{SpotifyCredentials, UpstreamConfig};
use crate::error::{FeedError, Service};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, info_span, Instrument};
use upstream::{CurrentlyPlaying, RecentlyPlayed, TokenResponse};

/// Per-request timeout for every Spotify call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URLs of the two Spotify services involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyEndpoints {
    /// Accounts service root, hosting `/api/token`.
    pub accounts: String,
    /// Web API root, hosting `/v1/me/player/...`.
    pub api: String,
}

impl SpotifyEndpoints {
    fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts.trim_end_matches('/'))
    }

    fn player_url(&self, path: &str) -> String {
        format!("{}/v1/me/player/{path}", self.api.trim_end_matches('/'))
    }
}

impl Default for SpotifyEndpoints {
    fn default() -> Self {
        Self::from(&UpstreamConfig::default())
    }
}

impl From<&UpstreamConfig> for SpotifyEndpoints {
    fn from(upstream: &UpstreamConfig) -> Self {
        Self {
            accounts: upstream.spotify_accounts.clone(),
            api: upstream.spotify_api.clone(),
        }
    }
}

/// Client for the now-playing lookup.
#[derive(Debug, Clone)]
pub struct NowPlayingClient {
    http: Client,
    credentials: SpotifyCredentials,
    endpoints: SpotifyEndpoints,
}

impl NowPlayingClient {
    /// Builds a client.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Transport`] if the HTTP client can't be built.
    pub fn new(
        credentials: SpotifyCredentials,
        endpoints: SpotifyEndpoints,
    ) -> Result<Self, FeedError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;
        Ok(Self {
            http,
            credentials,
            endpoints,
        })
    }

    /// Returns the current or, failing that, the most recent track.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Upstream`] if the token exchange is rejected.
    /// - [`FeedError::NotFound`] if neither lookup yields a track.
    /// - [`FeedError::Transport`] on a network or decoding failure.
    pub async fn fetch(&self) -> Result<TrackSnapshot, FeedError> {
        let span = info_span!("now_playing");

        async {
            let access_token = self.access_token().await?;

            if let Some(snapshot) = self.currently_playing(&access_token).await? {
                info!(
                    track = %snapshot.name,
                    is_playing = snapshot.is_playing,
                    "Currently playing"
                );
                return Ok(snapshot);
            }

            if let Some(snapshot) = self.recently_played(&access_token).await? {
                info!(track = %snapshot.name, "Falling back to recently played");
                return Ok(snapshot);
            }

            info!("No track data available");
            Err(FeedError::NotFound)
        }
        .instrument(span)
        .await
    }

    /// Exchanges the refresh token for an access token.
    async fn access_token(&self) -> Result<String, FeedError> {
        let response = self
            .http
            .post(self.endpoints.token_url())
            .basic_auth(
                self.credentials.client_id(),
                Some(self.credentials.client_secret()),
            )
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.credentials.refresh_token()),
            ])
            .send()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Upstream {
                service: Service::Spotify,
                status: status.as_u16(),
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;
        debug!("Obtained access token");
        Ok(token.access_token)
    }

    /// `None` when nothing is active (204, any non-200 status, or no item).
    async fn currently_playing(
        &self,
        access_token: &str,
    ) -> Result<Option<TrackSnapshot>, FeedError> {
        let response = self
            .http
            .get(self.endpoints.player_url("currently-playing"))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(status = status.as_u16(), "Nothing currently playing");
            return Ok(None);
        }

        let current: CurrentlyPlaying = response
            .json()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;

        Ok(current
            .item
            .map(|track| track.into_snapshot(current.progress_ms, current.is_playing)))
    }

    /// `None` when history is unavailable or empty.
    async fn recently_played(
        &self,
        access_token: &str,
    ) -> Result<Option<TrackSnapshot>, FeedError> {
        let response = self
            .http
            .get(self.endpoints.player_url("recently-played"))
            .query(&[("limit", "1")])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Recently played unavailable");
            return Ok(None);
        }

        let recent: RecentlyPlayed = response
            .json()
            .await
            .map_err(|e| FeedError::transport(Service::Spotify, e))?;

        Ok(recent
            .items
            .into_iter()
            .next()
            .map(|history| history.track.into_snapshot(None, false)))
    }
}
