//! Loopback fake of the GitHub and Spotify endpoints used by the fetchers.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use portfolio_feeds::config::UpstreamConfig;
use portfolio_feeds::{NowPlayingClient, RepoFeed, SpotifyCredentials, SpotifyEndpoints};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const GITHUB_TOKEN: &str = "test-token";
pub const ACCESS_TOKEN: &str = "short-lived";
/// base64("client-id:client-secret")
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

/// Installs one rustls provider, since both ring and aws-lc-rs may be linked.
pub fn init_crypto() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

/// A canned upstream response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl Reply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn empty(status: StatusCode) -> Self {
        Self { status, body: None }
    }
}

impl Default for Reply {
    fn default() -> Self {
        Self::empty(StatusCode::NOT_FOUND)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

/// A request as seen by the fake.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

/// Replies per endpoint plus a log of received requests.
#[derive(Debug, Default)]
pub struct Script {
    pub repos: Reply,
    pub token: Reply,
    pub current: Reply,
    pub recent: Reply,
    pub seen: Vec<Seen>,
}

type Shared = Arc<Mutex<Script>>;

pub struct FakeUpstream {
    pub base_url: String,
    pub script: Shared,
    task: JoinHandle<()>,
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl FakeUpstream {
    pub async fn start(script: Script) -> Self {
        let script = Arc::new(Mutex::new(script));
        let app = Router::new()
            .route("/users/{user}/repos", get(repos))
            .route("/api/token", post(token))
            .route("/v1/me/player/currently-playing", get(current))
            .route("/v1/me/player/recently-played", get(recent))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            script,
            task,
        }
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            github_api: self.base_url.clone(),
            spotify_accounts: self.base_url.clone(),
            spotify_api: self.base_url.clone(),
        }
    }

    pub fn repo_feed(&self) -> RepoFeed {
        init_crypto();
        RepoFeed::new(
            GITHUB_TOKEN.to_string(),
            "octocat".to_string(),
            &self.base_url,
        )
        .unwrap()
    }

    pub fn now_playing(&self) -> NowPlayingClient {
        init_crypto();
        NowPlayingClient::new(
            SpotifyCredentials::new("client-id", "client-secret", "refresh-me"),
            SpotifyEndpoints::from(&self.upstream_config()),
        )
        .unwrap()
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.script.lock().unwrap().seen.clone()
    }

    pub fn seen_paths(&self) -> Vec<String> {
        self.seen().into_iter().map(|s| s.path).collect()
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn record<'a>(
    script: &'a Shared,
    uri: &Uri,
    headers: &HeaderMap,
    body: String,
) -> std::sync::MutexGuard<'a, Script> {
    let mut script = script.lock().unwrap();
    script.seen.push(Seen {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    script
}

async fn repos(
    State(script): State<Shared>,
    Path(_user): Path<String>,
    uri: Uri,
    headers: HeaderMap,
) -> Reply {
    record(&script, &uri, &headers, String::new()).repos.clone()
}

async fn token(State(script): State<Shared>, uri: Uri, headers: HeaderMap, body: String) -> Reply {
    record(&script, &uri, &headers, body).token.clone()
}

async fn current(State(script): State<Shared>, uri: Uri, headers: HeaderMap) -> Reply {
    record(&script, &uri, &headers, String::new()).current.clone()
}

async fn recent(State(script): State<Shared>, uri: Uri, headers: HeaderMap) -> Reply {
    record(&script, &uri, &headers, String::new()).recent.clone()
}

// ---------- Payload builders ----------

pub fn repo_json(name: &str, stars: u64, pushed_at: &str, fork: bool, private: bool) -> Value {
    json!({
        "id": stars,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "description": format!("{name} description"),
        "language": "Rust",
        "stargazers_count": stars,
        "forks_count": 1,
        "pushed_at": pushed_at,
        "topics": ["rust"],
        "html_url": format!("https://github.com/octocat/{name}"),
        "private": private,
        "fork": fork
    })
}

pub fn sample_repos() -> Value {
    json!([
        repo_json("older", 5, "2024-01-01T00:00:00Z", false, false),
        repo_json("forked", 50, "2025-01-01T00:00:00Z", true, false),
        repo_json("newer", 5, "2025-02-01T00:00:00Z", false, false),
        repo_json("secret", 40, "2025-01-01T00:00:00Z", false, true),
        repo_json("star", 12, "2023-01-01T00:00:00Z", false, false)
    ])
}

pub fn github_error(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}

pub fn token_ok() -> Reply {
    Reply::ok(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "user-read-currently-playing user-read-recently-played"
    }))
}

pub fn track_json(name: &str, duration_ms: u64) -> Value {
    json!({
        "name": name,
        "duration_ms": duration_ms,
        "artists": [{"name": "Artist One", "id": "a1"}, {"name": "Artist Two", "id": "a2"}],
        "album": {
            "name": "The Album",
            "images": [
                {"url": "https://i.scdn.co/image/large", "width": 640, "height": 640},
                {"url": "https://i.scdn.co/image/small", "width": 64, "height": 64}
            ]
        }
    })
}

pub fn currently_playing(name: &str, progress_ms: u64) -> Reply {
    Reply::ok(json!({
        "is_playing": true,
        "progress_ms": progress_ms,
        "currently_playing_type": "track",
        "item": track_json(name, 180_000)
    }))
}

pub fn recently_played(name: &str) -> Reply {
    Reply::ok(json!({
        "items": [{"track": track_json(name, 200_000), "played_at": "2025-06-01T10:00:00Z"}]
    }))
}
