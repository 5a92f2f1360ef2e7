//! Playback snapshot types.

use serde::{Deserialize, Serialize};

/// An artist credited on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

/// Album artwork at one resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// The album a track belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Album {
    /// Returns the first (largest) artwork URL, if any.
    #[must_use]
    pub fn artwork_url(&self) -> Option<&str> {
        self.images.first().map(|image| image.url.as_str())
    }
}

/// The most recent playback state, replaced wholesale on each poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    /// Track title.
    pub name: String,

    /// Credited artists in upstream order.
    pub artists: Vec<Artist>,

    /// Album name and artwork.
    pub album: Album,

    /// Total duration in milliseconds.
    pub duration_ms: u64,

    /// Elapsed position; only reported for the currently playing item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_ms: Option<u64>,

    /// Whether playback is active.
    pub is_playing: bool,
}

impl TrackSnapshot {
    /// Artist names joined for display.
    #[must_use]
    pub fn artist_line(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
