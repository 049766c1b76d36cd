//! Transform math for placed photos: resize, rotation and scale.
//!
//! Every function here is a pure function of a gesture-start snapshot plus
//! the cumulative pointer delta (in canvas pixels). Replaying the same
//! delta always yields the same geometry, so dropped or duplicated pointer
//! events cannot make a photo drift.
//!
//! # Handles
//!
//! - Corner handles (`tl`, `tr`, `bl`, `br`) resize with the aspect ratio locked
//! - Edge handles (`mt`, `mb`, `ml`, `mr`) change one dimension only
//! - The rotate handle sets the angle from the pointer's bearing
//!
//! # Angles
//!
//! Rotation is in degrees, clockwise, with 0° pointing up. Stored angles
//! are always normalized into `[0, 360)`.

mod handle;
mod resize;
mod rotation;
mod scale;

pub use handle::{Handle, ResizeHandle};
pub use resize::{contain_rect, resize_rect};
pub use rotation::{normalize_degrees, pointer_angle, step_rotation};
pub use scale::{scaled_size, step_scale};
