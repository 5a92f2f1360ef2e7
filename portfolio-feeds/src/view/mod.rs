//! View-state logic for the portfolio client.
//!
//! The carousel window, page indicators, gesture mapping and progress bar
//! are plain values; [`update`] ties them together for the page-level
//! state.

mod carousel;
mod gesture;
mod indicator;
mod progress;
mod state;

pub use carousel::{CarouselWindow, Direction, Paging};
pub use gesture::{swipe_direction, wheel_direction, GESTURE_THRESHOLD_PX};
pub use indicator::{indicator_dots, visible_indicator_range, DotState, MAX_VISIBLE_DOTS};
pub use progress::{ProgressBar, TICK_STEP_MS};
pub use state::{update, Action, Effect, Page, Transition, ViewState};
