#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod display;
pub mod error;
pub mod now_playing;
pub mod polling;
pub mod repos;
pub mod server;
pub mod view;

pub use config::{CachePolicy, ConfigError, FeedsConfig, SpotifyCredentials};
pub use error::{FeedError, Service};
pub use now_playing::{NowPlayingClient, SpotifyEndpoints, TrackSnapshot};
pub use polling::{PollHandle, NOW_PLAYING_POLL_INTERVAL, PROGRESS_TICK_INTERVAL};
pub use repos::{curate, RepoFeed, RepositoryEntry};
pub use server::{router, serve, serve_with_shutdown, AppState};
pub use view::{update, Action, CarouselWindow, Direction, Effect, Page, Paging, ViewState};
