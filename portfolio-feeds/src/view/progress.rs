//! Client-side interpolation of playback progress between polls.

use crate::now_playing::TrackSnapshot;

/// Amount added per tick.
pub const TICK_STEP_MS: u64 = 1000;

/// Elapsed position of the current track.
///
/// `elapsed_ms` never exceeds `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressBar {
    elapsed_ms: u64,
    duration_ms: u64,
    playing: bool,
}

impl ProgressBar {
    /// Takes over a freshly polled snapshot.
    ///
    /// The elapsed position is only replaced while playing; a paused or
    /// recently played track keeps the last known position.
    pub fn load(&mut self, snapshot: &TrackSnapshot) {
        self.duration_ms = snapshot.duration_ms;
        self.playing = snapshot.is_playing;
        if let (true, Some(progress)) = (snapshot.is_playing, snapshot.progress_ms) {
            self.elapsed_ms = progress;
        }
        self.elapsed_ms = self.elapsed_ms.min(self.duration_ms);
    }

    /// Advances by [`TICK_STEP_MS`] while playing. Returns whether the
    /// position moved.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let next = self
            .elapsed_ms
            .saturating_add(TICK_STEP_MS)
            .min(self.duration_ms);
        if next == self.elapsed_ms {
            return false;
        }
        self.elapsed_ms = next;
        true
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Completion in percent, 0 for a zero-length track.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.duration_ms == 0 {
            0.0
        } else {
            self.elapsed_ms as f64 / self.duration_ms as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::now_playing::Album;

    fn snapshot(duration_ms: u64, progress_ms: Option<u64>, is_playing: bool) -> TrackSnapshot {
        TrackSnapshot {
            name: "Track".to_string(),
            artists: Vec::new(),
            album: Album::default(),
            duration_ms,
            progress_ms,
            is_playing,
        }
    }

    #[test]
    fn tick_clamps_at_duration() {
        let mut bar = ProgressBar::default();
        bar.load(&snapshot(180_000, Some(179_500), true));

        assert!(bar.tick());
        assert_eq!(bar.elapsed_ms(), 180_000);
        assert!(!bar.tick());
        assert_eq!(bar.elapsed_ms(), 180_000);
    }

    #[test]
    fn tick_advances_by_one_second() {
        let mut bar = ProgressBar::default();
        bar.load(&snapshot(180_000, Some(170_000), true));

        assert!(bar.tick());
        assert_eq!(bar.elapsed_ms(), 171_000);
        for _ in 0..20 {
            bar.tick();
        }
        assert_eq!(bar.elapsed_ms(), 180_000);
        assert!((bar.percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stops_ticking_once_not_playing() {
        let mut bar = ProgressBar::default();
        bar.load(&snapshot(60_000, Some(10_000), true));
        bar.tick();

        bar.load(&snapshot(60_000, None, false));

        assert!(!bar.tick());
        assert_eq!(bar.elapsed_ms(), 11_000);
        assert!(!bar.is_playing());
    }

    #[test]
    fn clamps_reported_progress() {
        let mut bar = ProgressBar::default();
        bar.load(&snapshot(1_000, Some(5_000), true));

        assert_eq!(bar.elapsed_ms(), 1_000);
    }

    #[test]
    fn zero_duration_has_zero_percent() {
        let bar = ProgressBar::default();
        assert_eq!(bar.percent(), 0.0);
    }
}
