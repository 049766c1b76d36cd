//! WASM bindings for canvas coordinate conversions.
//!
//! These use the default 1200×1600 canvas. Hosts with a custom canvas go
//! through [`JsBoard`](crate::JsBoard), which carries its own configuration.

use scrapbook_core::canvas::{self, CanvasConfig};
use wasm_bindgen::prelude::*;

use crate::types::JsPoint;

/// Logical canvas width in pixels.
#[wasm_bindgen]
pub fn canvas_width() -> f64 {
    canvas::DEFAULT_CANVAS_WIDTH
}

/// Logical canvas height in pixels.
#[wasm_bindgen]
pub fn canvas_height() -> f64 {
    canvas::DEFAULT_CANVAS_HEIGHT
}

/// Scale that fits the canvas in a container, never above 1.
///
/// Returns 1 when the container has not been measured yet.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const scale = canvas_scale(el.clientWidth, el.clientHeight);
/// canvasEl.style.transform = `scale(${scale})`;
/// ```
#[wasm_bindgen]
pub fn canvas_scale(container_width: f64, container_height: f64) -> f64 {
    canvas::canvas_scale(container_width, container_height, &CanvasConfig::default())
}

/// Convert a screen-space offset to whole canvas pixels.
#[wasm_bindgen]
pub fn screen_to_canvas(screen_x: f64, screen_y: f64, scale: f64) -> JsPoint {
    canvas::screen_to_canvas(screen_x, screen_y, scale).into()
}

/// Clamp a value into `[min, max]`; the lower bound wins if they cross.
#[wasm_bindgen]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    canvas::clamp(value, min, max)
}

/// Clamp a photo's top-left corner so the photo stays on the canvas.
#[wasm_bindgen]
pub fn clamp_to_canvas(x: f64, y: f64, width: f64, height: f64) -> JsPoint {
    canvas::clamp_to_canvas(x, y, width, height, &CanvasConfig::default()).into()
}
