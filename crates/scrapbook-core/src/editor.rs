//! Per-photo transform state machine.
//!
//! A [`PhotoEditor`] owns one photo's committed geometry plus the transient
//! geometry shown while a gesture is in progress. It cycles between idle
//! and one of three active states:
//!
//! ```text
//!            pointer-down (body)         pointer-move
//!   Idle ─────────────────────────▶ Dragging ◀────┐
//!    ▲  ─── pointer-down (handle) ─▶ Resizing ◀───┤
//!    │  ─── pointer-down (rotate) ─▶ Rotating ◀───┘
//!    │                                   │
//!    └──────── pointer-up (commit) ──────┘
//!    └──────── cancel (revert) ──────────┘
//! ```
//!
//! Each gesture keeps an immutable snapshot taken at pointer-down. Every
//! pointer-move recomputes from that snapshot plus the cumulative delta,
//! never from the previous frame. Only pointer-up writes to the committed
//! photo, and it returns exactly one [`TransformUpdate`] for the host to
//! persist.

use log::{debug, trace, warn};

use crate::canvas::{clamp_to_canvas, screen_to_canvas, try_canvas_scale, CanvasConfig};
use crate::geometry::{Point, Rect};
use crate::photo::{CropRect, PhotoId, PlacedPhoto};
use crate::transform::{
    pointer_angle, resize_rect, scaled_size, step_rotation, step_scale, ResizeHandle,
};
use crate::update::TransformUpdate;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    /// The photo itself: starts a drag.
    Body,
    /// One of the eight resize handles.
    Handle(ResizeHandle),
    /// The rotate handle. `center` is the photo's bounding-box center in
    /// screen pixels at pointer-down.
    Rotate { center: Point },
}

/// Snapshot taken when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down (screen pixels)
    pub pointer: Point,
    /// Photo top-left at pointer-down (canvas pixels)
    pub origin: Point,
}

/// Snapshot taken when a resize starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub handle: ResizeHandle,
    /// Pointer position at pointer-down (screen pixels)
    pub pointer: Point,
    /// Photo rectangle at pointer-down (canvas pixels)
    pub start: Rect,
}

/// Snapshot taken when a rotation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateSession {
    /// Rotation origin (screen pixels)
    pub center: Point,
    /// Rotation at pointer-down, in degrees
    pub start_rotation: f64,
}

/// Interaction state of one photo.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
    Rotating(RotateSession),
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    fn name(&self) -> &'static str {
        match self {
            Gesture::Idle => "idle",
            Gesture::Dragging(_) => "drag",
            Gesture::Resizing(_) => "resize",
            Gesture::Rotating(_) => "rotate",
        }
    }
}

/// Transform editor for a single placed photo.
#[derive(Debug, Clone)]
pub struct PhotoEditor {
    photo: PlacedPhoto,
    live: Rect,
    live_rotation: f64,
    gesture: Gesture,
    config: CanvasConfig,
    canvas_scale: f64,
    edit_mode: bool,
}

impl PhotoEditor {
    /// Create an editor for `photo`. Edit mode starts off and the canvas
    /// scale starts at 1 until a viewport is measured.
    pub fn new(photo: PlacedPhoto, config: CanvasConfig) -> Self {
        let photo = photo.normalized(&config);
        Self {
            live: photo.rect(),
            live_rotation: photo.rotation,
            photo,
            gesture: Gesture::Idle,
            config,
            canvas_scale: 1.0,
            edit_mode: false,
        }
    }

    pub fn id(&self) -> &PhotoId {
        &self.photo.id
    }

    /// Committed geometry.
    pub fn photo(&self) -> &PlacedPhoto {
        &self.photo
    }

    /// Geometry currently shown, including any gesture in progress.
    pub fn live_rect(&self) -> Rect {
        self.live
    }

    pub fn live_rotation(&self) -> f64 {
        self.live_rotation
    }

    /// Live rectangle in screen pixels, with the scale multiplier applied
    /// about the top-left corner.
    pub fn screen_rect(&self) -> Rect {
        let (width, height) = scaled_size(self.live.width, self.live.height, self.photo.scale);
        Rect::new(self.live.x, self.live.y, width, height).scaled(self.canvas_scale)
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn canvas_scale(&self) -> f64 {
        self.canvas_scale
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Toggle edit mode. Leaving edit mode cancels any gesture in progress.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if !enabled {
            self.cancel();
        }
        self.edit_mode = enabled;
    }

    /// Recompute the canvas scale from the container size.
    ///
    /// An unmeasured container keeps the previous scale. Returns the scale
    /// in effect afterwards.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> f64 {
        match try_canvas_scale(width, height, &self.config) {
            Some(scale) => self.canvas_scale = scale,
            None => warn!(
                "photo {}: viewport {}x{} not measured, keeping scale {}",
                self.photo.id, width, height, self.canvas_scale
            ),
        }
        self.canvas_scale
    }

    pub(crate) fn set_canvas_scale(&mut self, scale: f64) {
        self.canvas_scale = scale;
    }

    /// Replace the committed geometry with a fresh copy from the store.
    ///
    /// Ignored while a gesture is in progress; returns whether it applied.
    pub fn sync(&mut self, photo: PlacedPhoto) -> bool {
        if !self.gesture.is_idle() {
            debug!("photo {}: sync ignored during {}", self.photo.id, self.gesture.name());
            return false;
        }
        self.photo = photo.normalized(&self.config);
        self.live = self.photo.rect();
        self.live_rotation = self.photo.rotation;
        true
    }

    /// Start a gesture. Returns `false` when the event is ignored: edit
    /// mode is off, or a gesture is already in progress.
    pub fn pointer_down(&mut self, target: PointerTarget, pointer: Point) -> bool {
        if !self.edit_mode {
            return false;
        }
        if !self.gesture.is_idle() {
            trace!(
                "photo {}: pointer-down ignored during {}",
                self.photo.id,
                self.gesture.name()
            );
            return false;
        }

        self.gesture = match target {
            PointerTarget::Body => Gesture::Dragging(DragSession {
                pointer,
                origin: self.live.origin(),
            }),
            PointerTarget::Handle(handle) => Gesture::Resizing(ResizeSession {
                handle,
                pointer,
                start: self.live,
            }),
            PointerTarget::Rotate { center } => Gesture::Rotating(RotateSession {
                center,
                start_rotation: self.live_rotation,
            }),
        };
        debug!(
            "photo {}: {} started at ({:.1}, {:.1})",
            self.photo.id,
            self.gesture.name(),
            pointer.x,
            pointer.y
        );
        true
    }

    /// Update the live geometry for the current pointer position.
    pub fn pointer_move(&mut self, pointer: Point) {
        match self.gesture {
            Gesture::Idle => return,
            Gesture::Dragging(session) => {
                let delta = self.canvas_delta(session.pointer, pointer);
                let candidate = Point::new(session.origin.x + delta.x, session.origin.y + delta.y);
                let position = clamp_to_canvas(
                    candidate.x,
                    candidate.y,
                    self.live.width,
                    self.live.height,
                    &self.config,
                );
                self.live.x = position.x;
                self.live.y = position.y;
            }
            Gesture::Resizing(session) => {
                let delta = self.canvas_delta(session.pointer, pointer);
                self.live = resize_rect(session.start, session.handle, delta, &self.config);
            }
            Gesture::Rotating(session) => {
                self.live_rotation = pointer_angle(session.center, pointer);
            }
        }
        trace!("photo {}: {} -> {:?}", self.photo.id, self.gesture.name(), self.live);
    }

    /// Finish the gesture, commit the live geometry and return the update
    /// for the persistence callback. Returns `None` while idle.
    pub fn pointer_up(&mut self) -> Option<TransformUpdate> {
        let update = match self.gesture {
            Gesture::Idle => return None,
            Gesture::Dragging(_) => TransformUpdate::position(self.live.origin()),
            Gesture::Resizing(_) => TransformUpdate::rect(self.live),
            Gesture::Rotating(_) => TransformUpdate::rotation(self.live_rotation),
        };
        debug!(
            "photo {}: {} finished, committing {:?}",
            self.photo.id,
            self.gesture.name(),
            update
        );
        self.gesture = Gesture::Idle;
        update.apply_to(&mut self.photo);
        Some(update)
    }

    /// Abandon the gesture in progress and revert the live geometry to
    /// the committed photo. Returns whether a gesture was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.gesture.is_idle() {
            return false;
        }
        debug!("photo {}: {} cancelled", self.photo.id, self.gesture.name());
        if let Gesture::Rotating(session) = self.gesture {
            self.live_rotation = session.start_rotation;
        }
        self.gesture = Gesture::Idle;
        self.live = self.photo.rect();
        true
    }

    /// Step the scale multiplier by `delta` (typically `±scale_step`).
    ///
    /// Only applies in edit mode while idle.
    pub fn adjust_scale(&mut self, delta: f64) -> Option<TransformUpdate> {
        if !self.ready_for_control() {
            return None;
        }
        let update = TransformUpdate::scale(step_scale(self.photo.scale, delta, &self.config));
        update.apply_to(&mut self.photo);
        Some(update)
    }

    /// Step the rotation by `delta` degrees (typically `±rotation_step`).
    pub fn adjust_rotation(&mut self, delta: f64) -> Option<TransformUpdate> {
        if !self.ready_for_control() {
            return None;
        }
        let update = TransformUpdate::rotation(step_rotation(self.photo.rotation, delta));
        update.apply_to(&mut self.photo);
        self.live_rotation = self.photo.rotation;
        Some(update)
    }

    /// Set the crop, clamped into an image of the given natural size.
    pub fn set_crop(
        &mut self,
        crop: CropRect,
        natural_width: f64,
        natural_height: f64,
    ) -> Option<TransformUpdate> {
        if !self.ready_for_control() {
            return None;
        }
        let update = TransformUpdate::crop(crop.clamp_to(natural_width, natural_height));
        update.apply_to(&mut self.photo);
        Some(update)
    }

    fn ready_for_control(&self) -> bool {
        self.edit_mode && self.gesture.is_idle()
    }

    fn canvas_delta(&self, from: Point, to: Point) -> Point {
        let d = to.delta_from(from);
        screen_to_canvas(d.x, d.y, self.canvas_scale)
    }
}
