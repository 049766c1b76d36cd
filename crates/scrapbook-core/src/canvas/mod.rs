//! Fixed logical canvas and the conversions into and out of it.
//!
//! Every persisted photo geometry is expressed in canvas pixels so a
//! layout renders identically at any viewport size. The canvas is shown
//! scaled down to fit its container, never scaled up.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the canvas
//! - X grows to the right, Y grows downward
//! - Screen pixels = canvas pixels × canvas scale

mod config;
mod coords;

pub use config::{CanvasConfig, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use coords::{canvas_scale, clamp, clamp_to_canvas, screen_to_canvas, try_canvas_scale};
