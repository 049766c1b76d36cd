//! Rotation angles.
//!
//! Angles are degrees, clockwise on screen (Y grows downward), with 0°
//! pointing straight up. All results are normalized into `[0, 360)`.

use crate::geometry::Point;

/// Normalize an angle into `[0, 360)`.
///
/// Non-finite input yields `0.0`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Angle of the rotate handle for a pointer at `pointer`, rotating about `center`.
///
/// `atan2(dy, dx)` measures from the +X axis; the 90° offset makes a
/// pointer directly above the center read as 0°.
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    let d = pointer.delta_from(center);
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    normalize_degrees(d.y.atan2(d.x).to_degrees() + 90.0)
}

/// Apply an increment from the rotate buttons.
pub fn step_rotation(current: f64, delta: f64) -> f64 {
    normalize_degrees(current + delta)
}
