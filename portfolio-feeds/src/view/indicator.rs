//! Page-indicator dots.

use std::ops::Range;

/// Maximum dots shown at once.
pub const MAX_VISIBLE_DOTS: usize = 5;

/// How a single dot renders relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    /// Already passed.
    Visited,
    /// The page on screen.
    Current,
    /// Not reached yet.
    Upcoming,
}

/// Pages whose dots are visible: at most [`MAX_VISIBLE_DOTS`], centred on
/// `current` and shifted so the range never runs past either end.
#[must_use]
pub fn visible_indicator_range(current: usize, page_count: usize) -> Range<usize> {
    let current = current.min(page_count.saturating_sub(1));
    let start = current.saturating_sub(MAX_VISIBLE_DOTS / 2);
    let end = (start + MAX_VISIBLE_DOTS).min(page_count);
    let start = end.saturating_sub(MAX_VISIBLE_DOTS);
    start..end
}

/// Visible dots paired with their state.
#[must_use]
pub fn indicator_dots(current: usize, page_count: usize) -> Vec<(usize, DotState)> {
    visible_indicator_range(current, page_count)
        .map(|page| {
            let state = match page.cmp(&current) {
                std::cmp::Ordering::Less => DotState::Visited,
                std::cmp::Ordering::Equal => DotState::Current,
                std::cmp::Ordering::Greater => DotState::Upcoming,
            };
            (page, state)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_on_current_page() {
        assert_eq!(visible_indicator_range(5, 10), 3..8);
    }

    #[test]
    fn clamps_at_both_ends() {
        assert_eq!(visible_indicator_range(0, 10), 0..5);
        assert_eq!(visible_indicator_range(1, 10), 0..5);
        assert_eq!(visible_indicator_range(9, 10), 5..10);
        assert_eq!(visible_indicator_range(8, 10), 5..10);
    }

    #[test]
    fn fewer_pages_than_dots() {
        assert_eq!(visible_indicator_range(1, 3), 0..3);
        assert_eq!(visible_indicator_range(0, 0), 0..0);
    }

    #[test]
    fn never_exceeds_limit() {
        for page_count in 0..20 {
            for current in 0..page_count.max(1) {
                let range = visible_indicator_range(current, page_count);
                assert!(range.len() <= MAX_VISIBLE_DOTS);
                assert!(range.end <= page_count);
                if page_count > 0 {
                    assert!(range.contains(&current));
                }
            }
        }
    }

    #[test]
    fn marks_dot_states() {
        let dots = indicator_dots(1, 3);

        assert_eq!(
            dots,
            [
                (0, DotState::Visited),
                (1, DotState::Current),
                (2, DotState::Upcoming)
            ]
        );
    }
}
