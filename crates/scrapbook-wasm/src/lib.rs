//! Scrapbook WASM - WebAssembly bindings for the scrapbook canvas editor
//!
//! This crate exposes the scrapbook-core placement model to the
//! TypeScript front end.
//!
//! # Module Structure
//!
//! - `canvas` - Canvas scale fitting, coordinate conversion and clamping
//! - `board` - `JsBoard`, the page editor driven by pointer events
//! - `types` - WASM-compatible geometry and update types
//! - `logger` - `log` backend writing to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBoard, set_log_level } from '@scrapbook/wasm';
//!
//! await init();
//! set_log_level('debug');
//!
//! const board = new JsBoard(undefined);
//! photos.forEach((p) => board.add_photo(p));
//! ```

use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod board;
mod canvas;
mod logger;
mod types;

// Re-export public types
pub use board::JsBoard;
pub use canvas::{
    canvas_height, canvas_scale, canvas_width, clamp, clamp_to_canvas, screen_to_canvas,
};
pub use types::{JsPoint, JsRect, JsTransformUpdate};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(LevelFilter::Info);
}

/// Change the console log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logger::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    logger::install(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
