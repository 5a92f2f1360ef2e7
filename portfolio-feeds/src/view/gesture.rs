//! Wheel and touch input mapping.

use super::carousel::Direction;

/// Minimum wheel or drag distance, one page-dot equivalent.
pub const GESTURE_THRESHOLD_PX: f64 = 50.0;

/// Maps a vertical wheel delta to a direction. Positive scrolls forward.
#[must_use]
pub fn wheel_direction(delta_y: f64) -> Option<Direction> {
    direction_for(delta_y)
}

/// Maps a touch drag to a direction. Dragging up (start below end) moves
/// forward, like scrolling down.
#[must_use]
pub fn swipe_direction(start_y: f64, end_y: f64) -> Option<Direction> {
    direction_for(start_y - end_y)
}

fn direction_for(distance: f64) -> Option<Direction> {
    if !distance.is_finite() || distance.abs() < GESTURE_THRESHOLD_PX {
        None
    } else if distance > 0.0 {
        Some(Direction::Forward)
    } else {
        Some(Direction::Backward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_small_movements() {
        assert_eq!(wheel_direction(10.0), None);
        assert_eq!(wheel_direction(-49.9), None);
        assert_eq!(swipe_direction(300.0, 280.0), None);
        assert_eq!(wheel_direction(f64::NAN), None);
    }

    #[test]
    fn maps_beyond_threshold() {
        assert_eq!(wheel_direction(120.0), Some(Direction::Forward));
        assert_eq!(wheel_direction(-50.0), Some(Direction::Backward));
        assert_eq!(swipe_direction(400.0, 200.0), Some(Direction::Forward));
        assert_eq!(swipe_direction(200.0, 400.0), Some(Direction::Backward));
    }
}
