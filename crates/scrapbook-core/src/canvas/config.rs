//! Canvas configuration.
//!
//! The defaults reproduce the scrapbook design: a 1200×1600 canvas with
//! photos between 80 and 600 pixels on a side. Hosts may override any
//! field; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Logical canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
/// Logical canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1600.0;

/// Constants governing canvas size and photo transform limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Canvas width in canvas pixels
    pub width: f64,
    /// Canvas height in canvas pixels
    pub height: f64,
    /// Smallest width/height a resize handle produces
    pub min_size: f64,
    /// Largest width/height a resize handle produces
    pub max_size: f64,
    /// Lower bound of the scale multiplier
    pub min_scale: f64,
    /// Upper bound of the scale multiplier
    pub max_scale: f64,
    /// Increment applied by one scale button press
    pub scale_step: f64,
    /// Increment applied by one rotate button press, in degrees
    pub rotation_step: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            min_size: 80.0,
            max_size: 600.0,
            min_scale: 0.3,
            max_scale: 3.0,
            scale_step: 0.1,
            rotation_step: 15.0,
        }
    }
}

impl CanvasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration for degenerate values.
    ///
    /// The editor's math assumes a positive canvas, `0 < min_size <= max_size`
    /// with `max_size` fitting inside the canvas, and a positive scale range.
    pub fn validate(&self) -> Result<(), EditorError> {
        let invalid = |msg: String| Err(EditorError::InvalidConfig(msg));

        let all_finite = [
            self.width,
            self.height,
            self.min_size,
            self.max_size,
            self.min_scale,
            self.max_scale,
            self.scale_step,
            self.rotation_step,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return invalid("all values must be finite".into());
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.min_size <= 0.0 {
            return invalid(format!("minSize must be positive, got {}", self.min_size));
        }
        if self.min_size > self.max_size {
            return invalid(format!(
                "minSize {} exceeds maxSize {}",
                self.min_size, self.max_size
            ));
        }
        if self.max_size > self.width.min(self.height) {
            return invalid(format!(
                "maxSize {} does not fit a {}x{} canvas",
                self.max_size, self.width, self.height
            ));
        }
        if self.min_scale <= 0.0 || self.min_scale > self.max_scale {
            return invalid(format!(
                "scale range [{}, {}] is empty or not positive",
                self.min_scale, self.max_scale
            ));
        }
        if self.scale_step <= 0.0 || self.rotation_step <= 0.0 {
            return invalid("steps must be positive".into());
        }
        Ok(())
    }
}
