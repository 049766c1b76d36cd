//! Scale multiplier controls.
//!
//! The scale is a uniform multiplier applied on top of the stored
//! width/height; it never rewrites them.

use crate::canvas::{clamp, CanvasConfig};

/// Apply an increment from the scale buttons, clamped to the configured range.
///
/// The result is rounded to hundredths so repeated `±0.1` steps land on
/// exact tenths.
pub fn step_scale(current: f64, delta: f64, config: &CanvasConfig) -> f64 {
    let next = clamp(current + delta, config.min_scale, config.max_scale);
    (next * 100.0).round() / 100.0
}

/// Width and height after applying the scale multiplier.
pub fn scaled_size(width: f64, height: f64, scale: f64) -> (f64, f64) {
    (width * scale, height * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_steps_up() {
        let config = CanvasConfig::default();
        let mut scale = 1.0;
        for _ in 0..4 {
            scale = step_scale(scale, config.scale_step, &config);
        }
        assert_eq!(scale, 1.4);
    }

    #[test]
    fn test_saturates_at_max() {
        let config = CanvasConfig::default();
        let mut scale = 1.4;
        for _ in 0..20 {
            scale = step_scale(scale, config.scale_step, &config);
            assert!(scale <= 3.0);
        }
        assert_eq!(scale, 3.0);
    }

    #[test]
    fn test_saturates_at_min() {
        let config = CanvasConfig::default();
        let mut scale = 1.0;
        for _ in 0..20 {
            scale = step_scale(scale, -config.scale_step, &config);
        }
        assert_eq!(scale, 0.3);
    }

    #[test]
    fn test_scaled_size() {
        assert_eq!(scaled_size(300.0, 200.0, 1.5), (450.0, 300.0));
    }
}
