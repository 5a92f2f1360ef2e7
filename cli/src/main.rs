//! CLI for the portfolio feeds.
//!
//! Serves the proxy endpoints, or reads the feeds directly from a terminal
//! through the same view state the web client uses.

use clap::{Parser, Subcommand};
use portfolio_feeds::display::{describe, display_topics, format_duration, updated_label};
use portfolio_feeds::now_playing::SpotifyEndpoints;
use portfolio_feeds::view::{update, Action, DotState, Effect, Page, ViewState};
use portfolio_feeds::{
    AppState, ConfigError, FeedError, FeedsConfig, NowPlayingClient, PollHandle, RepoFeed,
    SpotifyCredentials, NOW_PLAYING_POLL_INTERVAL, PROGRESS_TICK_INTERVAL,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Portfolio feeds - repository listing and now-playing proxy.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GitHub account whose repositories are listed (overrides the config file).
    #[arg(long, global = true, env = "GITHUB_USER")]
    github_user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve `/api/repos` and `/api/now-playing`.
    Serve {
        /// Address to listen on (overrides the config file).
        #[arg(long)]
        listen: Option<SocketAddr>,

        /// GitHub Personal Access Token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Print one carousel page of the repository feed.
    Repos {
        /// GitHub Personal Access Token.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Zero-based carousel page.
        #[arg(long, default_value_t = 0)]
        page: usize,
    },

    /// Follow the now-playing status until Ctrl-C.
    Now,
}

/// Errors that end the process.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab and reqwest both pull in rustls; settle on one provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), CliError> {
    let mut config = FeedsConfig::load_or_default(args.config.as_deref())?;
    if let Some(user) = args.github_user {
        config.github_user = user;
    }

    match args.command {
        Command::Serve { listen, token } => {
            if let Some(listen) = listen {
                config.listen = listen;
            }
            config.validate()?;
            serve(&config, token).await
        }
        Command::Repos { token, page } => {
            config.validate()?;
            print_repos(&config, token, page).await
        }
        Command::Now => {
            config.upstream.validate()?;
            follow_now_playing(&config).await
        }
    }
}

fn now_playing_client(config: &FeedsConfig) -> Result<NowPlayingClient, CliError> {
    let credentials = SpotifyCredentials::from_env()?;
    Ok(NowPlayingClient::new(
        credentials,
        SpotifyEndpoints::from(&config.upstream),
    )?)
}

async fn serve(config: &FeedsConfig, token: String) -> Result<(), CliError> {
    let repos = RepoFeed::new(token, config.github_user.clone(), &config.upstream.github_api)?;
    let now_playing = now_playing_client(config)?;
    let listener = tokio::net::TcpListener::bind(config.listen).await?;

    info!(user = %config.github_user, cache = ?config.cache, "Starting proxy");
    portfolio_feeds::serve(listener, AppState::new(repos, now_playing, config.cache)).await?;
    Ok(())
}

async fn print_repos(config: &FeedsConfig, token: String, page: usize) -> Result<(), CliError> {
    let feed = RepoFeed::new(token, config.github_user.clone(), &config.upstream.github_api)?;
    let mut state = ViewState::new(config.carousel.page_size, config.carousel.paging);

    let transition = update(&mut state, Action::Navigate(Page::Featured));
    if transition.effects.contains(&Effect::LoadRepos) {
        let repos = feed.fetch().await?;
        update(&mut state, Action::ReposLoaded(repos));
    }
    update(&mut state, Action::JumpToPage(page));

    if state.repos().is_empty() {
        println!("No repositories to show.");
        return Ok(());
    }

    for repo in state.visible_repos() {
        println!(
            "\n{}  ★ {}  ⑂ {}{}",
            repo.name,
            repo.stargazers_count,
            repo.forks_count,
            repo.language
                .as_deref()
                .map(|l| format!("  [{l}]"))
                .unwrap_or_default()
        );
        println!("  {}", describe(repo));
        let topics = display_topics(repo);
        if !topics.is_empty() {
            println!("  #{}", topics.join(" #"));
        }
        println!("  {}  {}", updated_label(repo), repo.html_url);
    }

    let dots: String = state
        .indicator_dots()
        .iter()
        .map(|(_, dot)| match dot {
            DotState::Current => '●',
            DotState::Visited | DotState::Upcoming => '○',
        })
        .collect();
    let carousel = state.carousel();
    println!(
        "\n{dots}  {}/{}",
        carousel.current_page() + 1,
        carousel.page_count()
    );
    if carousel.remaining() > 0 {
        println!("{} more, use --page to scroll", carousel.remaining());
    }

    Ok(())
}

/// Polls until Ctrl-C, printing the track whenever it or its progress changes.
async fn follow_now_playing(config: &FeedsConfig) -> Result<(), CliError> {
    let client = now_playing_client(config)?;
    let state = Arc::new(Mutex::new(ViewState::new(
        config.carousel.page_size,
        config.carousel.paging,
    )));

    let enter = update(&mut *state.lock().await, Action::Navigate(Page::Now));
    let mut pollers = None;
    if enter.effects.contains(&Effect::StartNowPlayingPolling) {
        pollers = Some(start_pollers(client, Arc::clone(&state)));
    }

    tokio::signal::ctrl_c().await?;

    let leave = update(&mut *state.lock().await, Action::Navigate(Page::Home));
    if leave.effects.contains(&Effect::StopNowPlayingPolling) {
        if let Some((poll, tick)) = pollers.take() {
            poll.stop();
            tick.stop();
        }
    }
    Ok(())
}

fn start_pollers(
    client: NowPlayingClient,
    state: Arc<Mutex<ViewState>>,
) -> (PollHandle, PollHandle) {
    let poll_state = Arc::clone(&state);
    let poll = PollHandle::spawn("now-playing", NOW_PLAYING_POLL_INTERVAL, move || {
        let client = client.clone();
        let state = Arc::clone(&poll_state);
        async move {
            match client.fetch().await {
                Ok(snapshot) => {
                    let mut state = state.lock().await;
                    update(&mut state, Action::TrackLoaded(snapshot));
                    print_track(&state);
                }
                Err(FeedError::NotFound) => println!("Nothing played recently."),
                Err(e) => error!(error = %e, "Failed to fetch Spotify data"),
            }
        }
    });

    let tick = PollHandle::spawn("progress", PROGRESS_TICK_INTERVAL, move || {
        let state = Arc::clone(&state);
        async move {
            let mut state = state.lock().await;
            if update(&mut state, Action::Tick).changed {
                print_track(&state);
            }
        }
    });

    (poll, tick)
}

fn print_track(state: &ViewState) {
    let Some(track) = state.track() else {
        return;
    };
    let progress = state.progress();
    if track.is_playing {
        println!(
            "▶ {} - {}  {} / {} ({:.0}%)",
            track.name,
            track.artist_line(),
            format_duration(progress.elapsed_ms()),
            format_duration(track.duration_ms),
            progress.percent()
        );
    } else {
        println!(
            "⏸ {} - {}  {} (last played)",
            track.name,
            track.artist_line(),
            format_duration(track.duration_ms)
        );
    }
}
