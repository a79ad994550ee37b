//! Timing and geometry policy
//!
//! Pure functions applying the interpreter's defaults, floors and clamps.
//! Everything here is deterministic; backend dispatch and screen queries stay
//! in the executor.

use std::time::Duration;

use gesture_model::GestureDirection;
use tapflow_core_types::{Point, ScreenRect};

/// Swipe distance when the descriptor does not give one.
pub const DEFAULT_DISTANCE_RATIO: f32 = 0.5;

/// Smallest usable swipe distance ratio.
pub const MIN_DISTANCE_RATIO: f32 = 0.1;

/// Largest usable swipe distance ratio.
pub const MAX_DISTANCE_RATIO: f32 = 1.5;

/// Swipe movement duration when the descriptor does not give one.
pub const DEFAULT_SWIPE_DURATION_MS: u64 = 350;

/// Shortest dispatchable swipe duration.
pub const MIN_SWIPE_DURATION_MS: u64 = 100;

/// Long-press hold duration when the descriptor does not give one.
pub const DEFAULT_HOLD_MS: u64 = 500;

/// Await deadline when the descriptor does not give one.
pub const DEFAULT_AWAIT_TIMEOUT_MS: u64 = 2000;

/// Shortest effective await deadline.
pub const MIN_AWAIT_TIMEOUT_MS: u64 = 200;

/// Fixed await poll interval. Not configurable.
pub const AWAIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Effective swipe distance ratio: default 0.5, clamped to [0.1, 1.5].
pub fn distance_ratio(requested: Option<f32>) -> f32 {
    requested
        .unwrap_or(DEFAULT_DISTANCE_RATIO)
        .clamp(MIN_DISTANCE_RATIO, MAX_DISTANCE_RATIO)
}

/// Effective swipe duration: default 350 ms, floored at 100 ms.
pub fn swipe_duration_ms(requested: Option<u64>) -> u64 {
    requested
        .unwrap_or(DEFAULT_SWIPE_DURATION_MS)
        .max(MIN_SWIPE_DURATION_MS)
}

/// Effective hold duration: default 500 ms, floored at the platform
/// long-press threshold.
pub fn hold_duration_ms(requested: Option<u64>, long_press_floor_ms: u64) -> u64 {
    requested.unwrap_or(DEFAULT_HOLD_MS).max(long_press_floor_ms)
}

/// Effective await deadline: default 2000 ms, floored at 200 ms.
pub fn await_timeout_ms(requested: Option<u64>) -> u64 {
    requested
        .unwrap_or(DEFAULT_AWAIT_TIMEOUT_MS)
        .max(MIN_AWAIT_TIMEOUT_MS)
}

/// Clamp a point into the screen, each axis independently.
pub fn clamp_point(point: Point, screen_width: f32, screen_height: f32) -> Point {
    Point::new(
        point.x.clamp(0.0, screen_width),
        point.y.clamp(0.0, screen_height),
    )
}

/// Start and end points of a relative swipe: start at the anchor's center,
/// end moved along exactly one axis by `ratio` of the matching dimension.
pub fn swipe_span(rect: &ScreenRect, direction: GestureDirection, ratio: f32) -> (Point, Point) {
    let start = rect.center();
    let end = match direction {
        GestureDirection::Up => Point::new(start.x, start.y - rect.height * ratio),
        GestureDirection::Down => Point::new(start.x, start.y + rect.height * ratio),
        GestureDirection::Left => Point::new(start.x - rect.width * ratio, start.y),
        GestureDirection::Right => Point::new(start.x + rect.width * ratio, start.y),
    };
    (start, end)
}

/// Tap point at a ratio offset inside the anchor rectangle.
pub fn offset_point(rect: &ScreenRect, x_ratio: f32, y_ratio: f32) -> Point {
    Point::new(
        rect.left + rect.width * x_ratio,
        rect.top + rect.height * y_ratio,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_ratio_defaults_and_clamps() {
        assert_eq!(distance_ratio(None), 0.5);
        assert_eq!(distance_ratio(Some(5.0)), 1.5);
        assert_eq!(distance_ratio(Some(0.01)), 0.1);
        assert_eq!(distance_ratio(Some(0.75)), 0.75);
    }

    #[test]
    fn swipe_duration_floors() {
        assert_eq!(swipe_duration_ms(None), 350);
        assert_eq!(swipe_duration_ms(Some(10)), 100);
        assert_eq!(swipe_duration_ms(Some(900)), 900);
    }

    #[test]
    fn hold_duration_floors_default_too() {
        assert_eq!(hold_duration_ms(None, 400), 500);
        assert_eq!(hold_duration_ms(None, 600), 600);
        assert_eq!(hold_duration_ms(Some(100), 400), 400);
        assert_eq!(hold_duration_ms(Some(800), 400), 800);
    }

    #[test]
    fn await_timeout_floors() {
        assert_eq!(await_timeout_ms(None), 2000);
        assert_eq!(await_timeout_ms(Some(50)), 200);
        assert_eq!(await_timeout_ms(Some(3000)), 3000);
    }

    #[test]
    fn clamp_point_clamps_each_axis() {
        assert_eq!(
            clamp_point(Point::new(-50.0, 100.0), 1080.0, 1920.0),
            Point::new(0.0, 100.0)
        );
        assert_eq!(
            clamp_point(Point::new(1500.0, 2000.0), 1080.0, 1920.0),
            Point::new(1080.0, 1920.0)
        );
        assert_eq!(
            clamp_point(Point::new(540.0, 960.0), 1080.0, 1920.0),
            Point::new(540.0, 960.0)
        );
    }

    #[test]
    fn swipe_span_moves_one_axis() {
        // Centered at (250, 300), 100 wide, 200 tall.
        let rect = ScreenRect::new(200.0, 200.0, 100.0, 200.0);

        let (start, end) = swipe_span(&rect, GestureDirection::Down, 0.5);
        assert_eq!(start, Point::new(250.0, 300.0));
        assert_eq!(end, Point::new(250.0, 400.0));

        let (_, end) = swipe_span(&rect, GestureDirection::Up, 0.5);
        assert_eq!(end, Point::new(250.0, 200.0));

        let (_, end) = swipe_span(&rect, GestureDirection::Left, 1.0);
        assert_eq!(end, Point::new(150.0, 300.0));

        let (_, end) = swipe_span(&rect, GestureDirection::Right, 1.0);
        assert_eq!(end, Point::new(350.0, 300.0));
    }

    #[test]
    fn offset_point_scales_into_rect() {
        let rect = ScreenRect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(offset_point(&rect, 0.5, 0.5), Point::new(100.0, 50.0));
        assert_eq!(offset_point(&rect, 0.0, 1.0), Point::new(0.0, 100.0));
    }
}
