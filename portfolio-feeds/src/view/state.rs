//! Client view state and its update function.
//!
//! All transitions go through [`update`]. Side effects (network loads, timer
//! lifecycle) are returned as [`Effect`]s for the caller to perform, so the
//! state machine can be driven without any rendering environment.

use super::carousel::{CarouselWindow, Direction, Paging};
use super::gesture::{swipe_direction, wheel_direction};
use super::indicator::{indicator_dots, DotState};
use super::progress::ProgressBar;
use crate::now_playing::TrackSnapshot;
use crate::repos::RepositoryEntry;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Now,
    Featured,
}

/// Inputs to [`update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch pages.
    Navigate(Page),
    /// Manual reload of the repository feed.
    Refresh,
    /// The feed arrived; replaces the list wholesale.
    ReposLoaded(Vec<RepositoryEntry>),
    /// The feed could not be loaded.
    ReposFailed,
    /// Mouse wheel over the carousel.
    Wheel { delta_y: f64 },
    /// Touch drag over the carousel.
    Swipe { start_y: f64, end_y: f64 },
    /// Arrow navigation.
    Step(Direction),
    /// Click on a page-indicator dot.
    JumpToPage(usize),
    /// A poll returned a snapshot; replaces the previous one.
    TrackLoaded(TrackSnapshot),
    /// One progress-bar timer tick.
    Tick,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the repository feed and dispatch the outcome.
    LoadRepos,
    /// Start the now-playing poll and progress timers.
    StartNowPlayingPolling,
    /// Cancel both timers.
    StopNowPlayingPolling,
}

/// Result of one [`update`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// Whether anything visible changed and a re-render is needed.
    pub changed: bool,
    /// Effects in the order they should run.
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed(changed: bool) -> Self {
        Self {
            changed,
            effects: Vec::new(),
        }
    }
}

/// Everything the client renders from.
#[derive(Debug, Clone)]
pub struct ViewState {
    page: Page,
    repos: Vec<RepositoryEntry>,
    carousel: CarouselWindow,
    loading: bool,
    track: Option<TrackSnapshot>,
    progress: ProgressBar,
}

impl ViewState {
    /// Initial state on the home page.
    #[must_use]
    pub fn new(page_size: usize, paging: Paging) -> Self {
        Self {
            page: Page::Home,
            repos: Vec::new(),
            carousel: CarouselWindow::new(0, page_size, paging),
            loading: false,
            track: None,
            progress: ProgressBar::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn repos(&self) -> &[RepositoryEntry] {
        &self.repos
    }

    /// Entries in the carousel window.
    pub fn visible_repos(&self) -> &[RepositoryEntry] {
        self.carousel.visible_slice(&self.repos)
    }

    pub fn carousel(&self) -> &CarouselWindow {
        &self.carousel
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn track(&self) -> Option<&TrackSnapshot> {
        self.track.as_ref()
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Dots to draw under the carousel.
    pub fn indicator_dots(&self) -> Vec<(usize, DotState)> {
        indicator_dots(self.carousel.current_page(), self.carousel.page_count())
    }
}

/// Applies `action` to `state`.
pub fn update(state: &mut ViewState, action: Action) -> Transition {
    match action {
        Action::Navigate(page) => navigate(state, page),
        Action::Refresh => {
            if state.page != Page::Featured || state.loading {
                return Transition::unchanged();
            }
            state.loading = true;
            Transition {
                changed: true,
                effects: vec![Effect::LoadRepos],
            }
        }
        Action::ReposLoaded(repos) => {
            state.carousel.reset(repos.len());
            state.repos = repos;
            state.loading = false;
            Transition::changed(true)
        }
        Action::ReposFailed => {
            state.carousel.reset(0);
            state.repos.clear();
            state.loading = false;
            Transition::changed(true)
        }
        Action::Wheel { delta_y } => move_carousel(state, wheel_direction(delta_y)),
        Action::Swipe { start_y, end_y } => {
            move_carousel(state, swipe_direction(start_y, end_y))
        }
        Action::Step(direction) => move_carousel(state, Some(direction)),
        Action::JumpToPage(page) => {
            if state.page != Page::Featured {
                return Transition::unchanged();
            }
            Transition::changed(state.carousel.jump_to_page(page))
        }
        Action::TrackLoaded(snapshot) => {
            state.progress.load(&snapshot);
            state.track = Some(snapshot);
            Transition::changed(true)
        }
        Action::Tick => Transition::changed(state.progress.tick()),
    }
}

fn navigate(state: &mut ViewState, page: Page) -> Transition {
    let previous = state.page;
    let mut transition = Transition::unchanged();

    if page == Page::Featured {
        transition.changed |= state.carousel.jump_to_page(0);
    }
    if page == previous {
        return transition;
    }

    state.page = page;
    transition.changed = true;

    if previous == Page::Now {
        transition.effects.push(Effect::StopNowPlayingPolling);
    }
    match page {
        Page::Featured => {
            state.loading = true;
            transition.effects.push(Effect::LoadRepos);
        }
        Page::Now => transition.effects.push(Effect::StartNowPlayingPolling),
        Page::Home | Page::About => {}
    }

    transition
}

fn move_carousel(state: &mut ViewState, direction: Option<Direction>) -> Transition {
    let Some(direction) = direction else {
        return Transition::unchanged();
    };
    if state.page != Page::Featured || state.repos.is_empty() {
        return Transition::unchanged();
    }
    Transition::changed(state.carousel.step(direction))
}
