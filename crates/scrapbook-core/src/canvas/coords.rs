//! Conversions between screen pixels and canvas pixels, and clamping.
//!
//! All functions here are pure and total. Degenerate inputs (an unmeasured
//! viewport, a zero scale) fall back to identity scaling instead of
//! dividing by zero.

use super::CanvasConfig;
use crate::geometry::Point;

/// Scale factor that fits the canvas inside a viewport, or `None` when the
/// viewport has not been measured yet (zero, negative or non-finite).
///
/// The result is `min(viewport_width / W, viewport_height / H, 1)` and
/// therefore always in `(0, 1]`.
pub fn try_canvas_scale(
    viewport_width: f64,
    viewport_height: f64,
    config: &CanvasConfig,
) -> Option<f64> {
    let measured = |v: f64| v.is_finite() && v > 0.0;
    if !measured(viewport_width) || !measured(viewport_height) {
        return None;
    }
    let scale_x = viewport_width / config.width;
    let scale_y = viewport_height / config.height;
    Some(scale_x.min(scale_y).min(1.0))
}

/// Scale factor that fits the canvas inside a viewport.
///
/// An unmeasured viewport yields `1.0`.
///
/// # Example
///
/// ```
/// use scrapbook_core::canvas::{canvas_scale, CanvasConfig};
///
/// let config = CanvasConfig::default();
/// assert_eq!(canvas_scale(600.0, 1600.0, &config), 0.5);
/// assert_eq!(canvas_scale(4000.0, 4000.0, &config), 1.0);
/// ```
pub fn canvas_scale(viewport_width: f64, viewport_height: f64, config: &CanvasConfig) -> f64 {
    try_canvas_scale(viewport_width, viewport_height, config).unwrap_or(1.0)
}

/// Convert a screen-space offset into canvas pixels, rounded to whole pixels.
///
/// A non-positive or non-finite `scale` is treated as `1.0`.
pub fn screen_to_canvas(screen_x: f64, screen_y: f64, scale: f64) -> Point {
    let scale = usable_scale(scale);
    Point::new((screen_x / scale).round(), (screen_y / scale).round())
}

fn usable_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the lower
/// bound wins.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Clamp a rectangle's top-left corner so the rectangle lies inside the canvas.
///
/// `x` is clamped to `[0, W - width]` and `y` to `[0, H - height]`. A
/// rectangle larger than the canvas is pinned to the origin on that axis.
pub fn clamp_to_canvas(x: f64, y: f64, width: f64, height: f64, config: &CanvasConfig) -> Point {
    Point::new(
        clamp(x, 0.0, config.width - width),
        clamp(y, 0.0, config.height - height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CanvasConfig {
        CanvasConfig::default()
    }

    #[test]
    fn test_canvas_scale_fits_width() {
        // 600 / 1200 = 0.5, 1600 / 1600 = 1.0
        assert_eq!(canvas_scale(600.0, 1600.0, &config()), 0.5);
    }

    #[test]
    fn test_canvas_scale_fits_height() {
        // 1200 / 1200 = 1.0, 400 / 1600 = 0.25
        assert_eq!(canvas_scale(1200.0, 400.0, &config()), 0.25);
    }

    #[test]
    fn test_canvas_scale_never_above_one() {
        assert_eq!(canvas_scale(5000.0, 5000.0, &config()), 1.0);
    }

    #[test]
    fn test_canvas_scale_unmeasured_viewport() {
        assert_eq!(try_canvas_scale(0.0, 800.0, &config()), None);
        assert_eq!(try_canvas_scale(800.0, -1.0, &config()), None);
        assert_eq!(try_canvas_scale(f64::NAN, 800.0, &config()), None);
        assert_eq!(canvas_scale(0.0, 0.0, &config()), 1.0);
    }

    #[test]
    fn test_screen_to_canvas_divides_and_rounds() {
        assert_eq!(screen_to_canvas(50.0, 50.0, 1.0), Point::new(50.0, 50.0));
        assert_eq!(screen_to_canvas(50.0, -25.0, 0.5), Point::new(100.0, -50.0));
        // 10 / 0.3 = 33.33.. -> 33
        assert_eq!(screen_to_canvas(10.0, 10.0, 0.3), Point::new(33.0, 33.0));
    }

    #[test]
    fn test_screen_to_canvas_bad_scale() {
        assert_eq!(screen_to_canvas(40.0, 40.0, 0.0), Point::new(40.0, 40.0));
        assert_eq!(screen_to_canvas(40.0, 40.0, f64::INFINITY), Point::new(40.0, 40.0));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_clamp_inverted_bounds_lower_wins() {
        assert_eq!(clamp(5.0, 0.0, -100.0), 0.0);
    }

    #[test]
    fn test_clamp_to_canvas() {
        let c = config();
        assert_eq!(
            clamp_to_canvas(-20.0, 50.0, 300.0, 300.0, &c),
            Point::new(0.0, 50.0)
        );
        assert_eq!(
            clamp_to_canvas(1000.0, 1500.0, 300.0, 300.0, &c),
            Point::new(900.0, 1300.0)
        );
    }

    #[test]
    fn test_clamp_to_canvas_oversized_pins_to_origin() {
        let c = config();
        assert_eq!(
            clamp_to_canvas(50.0, 50.0, 1300.0, 1700.0, &c),
            Point::new(0.0, 0.0)
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
