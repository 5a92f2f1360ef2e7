//! Spotify Web API payloads, reduced to the fields the proxy re-emits.

use super::snapshot::{Album, Artist, TrackSnapshot};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Track {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub album: Album,
    #[serde(default)]
    pub duration_ms: u64,
}

impl Track {
    pub fn into_snapshot(self, progress_ms: Option<u64>, is_playing: bool) -> TrackSnapshot {
        TrackSnapshot {
            name: self.name,
            artists: self.artists,
            album: self.album,
            duration_ms: self.duration_ms,
            progress_ms: progress_ms.map(|ms| ms.min(self.duration_ms)),
            is_playing,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentlyPlaying {
    #[serde(default)]
    pub is_playing: bool,
    #[serde(default)]
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub item: Option<Track>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayHistory {
    pub track: Track,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentlyPlayed {
    #[serde(default)]
    pub items: Vec<PlayHistory>,
}
