//! Handle-driven resize.
//!
//! # Algorithm
//!
//! Given the rectangle at gesture start and the cumulative pointer delta
//! `(dx, dy)` in canvas pixels:
//!
//! - Corner handles clamp the new width to `[min_size, max_size]` and derive
//!   the height from the start aspect ratio. The corner opposite the handle
//!   is the anchor and does not move.
//! - Edge handles clamp one dimension to `[min_size, max_size]`, anchoring
//!   the opposite edge.
//! - The candidate is then contained in the canvas. Edge handles truncate
//!   the overflowing axis; corner handles shrink uniformly about the anchor
//!   so the aspect ratio survives truncation.
//!
//! Containment can push a dimension below `min_size` when the anchor sits
//! close to the canvas edge. Staying inside the canvas takes priority.

use crate::canvas::{clamp, CanvasConfig};
use crate::geometry::{Point, Rect};

use super::ResizeHandle;

/// Compute the rectangle for a resize gesture.
///
/// # Arguments
///
/// * `start` - Photo rectangle when the gesture began (canvas pixels)
/// * `handle` - Handle that started the gesture
/// * `delta` - Cumulative pointer movement since gesture start (canvas pixels)
/// * `config` - Canvas size and size limits
///
/// # Example
///
/// ```
/// use scrapbook_core::canvas::CanvasConfig;
/// use scrapbook_core::geometry::{Point, Rect};
/// use scrapbook_core::transform::{resize_rect, ResizeHandle};
///
/// let start = Rect::new(100.0, 100.0, 300.0, 300.0);
/// let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(100.0, 0.0), &CanvasConfig::default());
/// assert_eq!(r, Rect::new(100.0, 100.0, 400.0, 400.0));
/// ```
pub fn resize_rect(start: Rect, handle: ResizeHandle, delta: Point, config: &CanvasConfig) -> Rect {
    if handle.is_corner() {
        resize_corner(start, handle, delta, config)
    } else {
        contain_rect(resize_edge(start, handle, delta, config), config)
    }
}

fn resize_corner(start: Rect, handle: ResizeHandle, delta: Point, config: &CanvasConfig) -> Rect {
    let aspect_ratio = start.aspect_ratio();

    // Which way the free corner moves away from the anchor.
    let (grows_right, grows_down) = match handle {
        ResizeHandle::BottomRight => (true, true),
        ResizeHandle::BottomLeft => (false, true),
        ResizeHandle::TopRight => (true, false),
        _ => (false, false),
    };

    let anchor_x = if grows_right { start.x } else { start.right() };
    let anchor_y = if grows_down { start.y } else { start.bottom() };

    let grow = if grows_right { delta.x } else { -delta.x };
    let width = clamp(start.width + grow, config.min_size, config.max_size);

    let room_x = if grows_right {
        config.width - anchor_x
    } else {
        anchor_x
    };
    let room_y = if grows_down {
        config.height - anchor_y
    } else {
        anchor_y
    };
    let width = width.min(room_x).min(room_y * aspect_ratio).max(0.0);
    let height = width / aspect_ratio;

    let x = if grows_right { anchor_x } else { anchor_x - width };
    let y = if grows_down { anchor_y } else { anchor_y - height };
    Rect::new(x, y, width, height)
}

fn resize_edge(start: Rect, handle: ResizeHandle, delta: Point, config: &CanvasConfig) -> Rect {
    let size = |v: f64| clamp(v, config.min_size, config.max_size);
    let mut rect = start;

    match handle {
        ResizeHandle::MiddleRight => {
            rect.width = size(start.width + delta.x);
        }
        ResizeHandle::MiddleLeft => {
            rect.width = size(start.width - delta.x);
            rect.x = start.x + (start.width - rect.width);
        }
        ResizeHandle::MiddleBottom => {
            rect.height = size(start.height + delta.y);
        }
        ResizeHandle::MiddleTop => {
            rect.height = size(start.height - delta.y);
            rect.y = start.y + (start.height - rect.height);
        }
        _ => {}
    }
    rect
}

/// Truncate a rectangle so it lies inside the canvas.
///
/// An edge past the origin is moved to 0 and the size shrinks by the
/// overflow; an edge past the far side is pulled back to the canvas edge.
/// The opposite edge never moves.
pub fn contain_rect(rect: Rect, config: &CanvasConfig) -> Rect {
    let mut r = rect;
    if r.x < 0.0 {
        r.width += r.x;
        r.x = 0.0;
    }
    if r.y < 0.0 {
        r.height += r.y;
        r.y = 0.0;
    }
    if r.right() > config.width {
        r.width = config.width - r.x;
    }
    if r.bottom() > config.height {
        r.height = config.height - r.y;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config() -> CanvasConfig {
        CanvasConfig::default()
    }

    fn assert_rect_eq(actual: Rect, expected: Rect) {
        assert!(
            (actual.x - expected.x).abs() < EPS
                && (actual.y - expected.y).abs() < EPS
                && (actual.width - expected.width).abs() < EPS
                && (actual.height - expected.height).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_bottom_right_grows() {
        let start = Rect::new(100.0, 100.0, 300.0, 300.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(100.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 100.0, 400.0, 400.0));
    }

    #[test]
    fn test_bottom_right_ignores_dy() {
        let start = Rect::new(100.0, 100.0, 300.0, 300.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(0.0, 250.0), &config());
        assert_rect_eq(r, start);
    }

    #[test]
    fn test_corner_clamps_to_max_size() {
        let start = Rect::new(100.0, 100.0, 300.0, 150.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(1000.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 100.0, 600.0, 300.0));
    }

    #[test]
    fn test_corner_clamps_to_min_size() {
        let start = Rect::new(100.0, 100.0, 300.0, 300.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(-1000.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 100.0, 80.0, 80.0));
    }

    #[test]
    fn test_bottom_left_anchors_top_right() {
        let start = Rect::new(400.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::BottomLeft, Point::new(-60.0, 0.0), &config());
        // width 360, height 240, right edge stays at 700, top stays at 100
        assert_rect_eq(r, Rect::new(340.0, 100.0, 360.0, 240.0));
    }

    #[test]
    fn test_top_right_anchors_bottom_left() {
        let start = Rect::new(400.0, 400.0, 200.0, 100.0);
        let r = resize_rect(start, ResizeHandle::TopRight, Point::new(100.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(400.0, 350.0, 300.0, 150.0));
    }

    #[test]
    fn test_top_left_anchors_bottom_right() {
        let start = Rect::new(400.0, 400.0, 200.0, 200.0);
        let r = resize_rect(start, ResizeHandle::TopLeft, Point::new(-50.0, -50.0), &config());
        assert_rect_eq(r, Rect::new(350.0, 350.0, 250.0, 250.0));
    }

    #[test]
    fn test_top_left_at_origin_cannot_grow_outward() {
        let start = Rect::new(0.0, 0.0, 300.0, 300.0);
        let r = resize_rect(start, ResizeHandle::TopLeft, Point::new(-50.0, -50.0), &config());
        assert_rect_eq(r, Rect::new(0.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn test_corner_truncation_keeps_aspect() {
        // Right edge room is 100, so width stops at 100 and height follows.
        let start = Rect::new(1000.0, 100.0, 100.0, 50.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(300.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(1000.0, 100.0, 200.0, 100.0));
        assert!((r.aspect_ratio() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_corner_truncated_by_vertical_room() {
        // Tall photo near the bottom: vertical room limits the width.
        let start = Rect::new(100.0, 1400.0, 100.0, 150.0);
        let r = resize_rect(start, ResizeHandle::BottomRight, Point::new(200.0, 0.0), &config());
        // room_y = 200 -> width = 200 * (100/150)
        let expected_w = 200.0 * (100.0 / 150.0);
        assert_rect_eq(r, Rect::new(100.0, 1400.0, expected_w, 200.0));
    }

    #[test]
    fn test_middle_right_changes_width_only() {
        let start = Rect::new(100.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::MiddleRight, Point::new(50.0, 80.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 100.0, 350.0, 200.0));
    }

    #[test]
    fn test_middle_left_anchors_right_edge() {
        let start = Rect::new(100.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::MiddleLeft, Point::new(50.0, 0.0), &config());
        assert_rect_eq(r, Rect::new(150.0, 100.0, 250.0, 200.0));
    }

    #[test]
    fn test_middle_top_anchors_bottom_edge() {
        let start = Rect::new(100.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::MiddleTop, Point::new(0.0, -40.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 60.0, 300.0, 240.0));
    }

    #[test]
    fn test_middle_bottom_changes_height_only() {
        let start = Rect::new(100.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::MiddleBottom, Point::new(70.0, 30.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 100.0, 300.0, 230.0));
    }

    #[test]
    fn test_middle_left_truncated_at_origin() {
        let start = Rect::new(20.0, 100.0, 300.0, 200.0);
        let r = resize_rect(start, ResizeHandle::MiddleLeft, Point::new(-100.0, 0.0), &config());
        // candidate x = -80, width = 400 -> truncated to x = 0, width = 320
        assert_rect_eq(r, Rect::new(0.0, 100.0, 320.0, 200.0));
    }

    #[test]
    fn test_middle_bottom_truncated_at_far_edge() {
        let start = Rect::new(100.0, 1300.0, 300.0, 250.0);
        let r = resize_rect(start, ResizeHandle::MiddleBottom, Point::new(0.0, 200.0), &config());
        assert_rect_eq(r, Rect::new(100.0, 1300.0, 300.0, 300.0));
    }

    #[test]
    fn test_contain_rect() {
        let c = config();
        assert_rect_eq(
            contain_rect(Rect::new(-10.0, -20.0, 100.0, 100.0), &c),
            Rect::new(0.0, 0.0, 90.0, 80.0),
        );
        assert_rect_eq(
            contain_rect(Rect::new(1150.0, 1550.0, 100.0, 100.0), &c),
            Rect::new(1150.0, 1550.0, 50.0, 50.0),
        );
        let inside = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert_rect_eq(contain_rect(inside, &c), inside);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
