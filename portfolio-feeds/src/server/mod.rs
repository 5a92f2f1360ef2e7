//! HTTP proxy exposing the two feeds.
//!
//! Upstream failures are logged and mapped to fixed error bodies; nothing
//! from the upstream error reaches the client.

mod response;

pub use response::{ApiError, NOW_PLAYING_ERROR, NO_TRACK_ERROR, REPOS_ERROR};

use crate::config::CachePolicy;
use crate::error::FeedError;
use crate::now_playing::NowPlayingClient;
use crate::repos::RepoFeed;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use response::cached_json;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    repos: RepoFeed,
    now_playing: NowPlayingClient,
    cache: CachePolicy,
}

impl AppState {
    /// Bundles the fetchers with the cache policy.
    pub fn new(repos: RepoFeed, now_playing: NowPlayingClient, cache: CachePolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                repos,
                now_playing,
                cache,
            }),
        }
    }
}

/// Builds the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/repos", get(get_repos))
        .route("/api/now-playing", get(get_now_playing))
        .with_state(state)
}

/// Serves until Ctrl-C.
///
/// # Errors
///
/// Returns an I/O error if the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    serve_with_shutdown(listener, state, ctrl_c()).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
///
/// # Errors
///
/// Returns an I/O error if the listener fails.
pub async fn serve_with_shutdown<S>(
    listener: TcpListener,
    state: AppState,
    shutdown: S,
) -> std::io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn get_repos(State(state): State<AppState>) -> Response {
    match state.inner.repos.fetch().await {
        Ok(repos) => cached_json(state.inner.cache, repos),
        Err(e) => {
            error!(error = %e, "Error fetching repositories");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, REPOS_ERROR).into_response()
        }
    }
}

async fn get_now_playing(State(state): State<AppState>) -> Response {
    match state.inner.now_playing.fetch().await {
        Ok(snapshot) => cached_json(state.inner.cache, snapshot),
        Err(FeedError::NotFound) => {
            ApiError::new(StatusCode::NOT_FOUND, NO_TRACK_ERROR).into_response()
        }
        Err(e) => {
            error!(error = %e, "Error fetching now-playing data");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, NOW_PLAYING_ERROR).into_response()
        }
    }
}
