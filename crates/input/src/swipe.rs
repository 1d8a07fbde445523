//! Touch swipe classification.

use crate::types::Direction;

/// Direction of a swipe from its total delta, or `None` if it is too short
///
/// The axis with the larger magnitude wins; a tie goes to the horizontal
/// axis. Screen coordinates: positive `dy` is downward.
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax >= ay {
        if ax < threshold || ax == 0.0 {
            return None;
        }
        Some(if dx < 0.0 { Direction::Left } else { Direction::Right })
    } else {
        if ay < threshold {
            return None;
        }
        Some(if dy < 0.0 { Direction::Up } else { Direction::Down })
    }
}
