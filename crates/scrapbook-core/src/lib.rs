//! Scrapbook Core - Canvas layout and photo transform editor
//!
//! This crate provides the placement model behind the scrapbook page
//! editor: a fixed logical canvas, conversions between screen and canvas
//! pixels, and the gesture state machine that drags, resizes and rotates
//! photos on it.
//!
//! # Module Structure
//!
//! - `canvas` - Canvas configuration, scale fitting, coordinate conversion and clamping
//! - `geometry` - Point and rectangle value types
//! - `photo` - Placed photo model, crop rectangle and default placement
//! - `transform` - Resize, rotation and scale math
//! - `editor` - Per-photo gesture state machine
//! - `board` - Photos sharing a canvas, selection, and the persistence callback
//! - `update` - Finalized transform payloads
//!
//! # Usage
//!
//! ```
//! use scrapbook_core::{
//!     Board, CanvasConfig, PhotoId, Point, PointerTarget, StoredPhoto, TransformUpdate,
//! };
//!
//! let mut board = Board::new(CanvasConfig::default())?;
//! let id = board.add_photo(StoredPhoto { id: "p1".into(), ..Default::default() })?;
//! board.set_edit_mode(true);
//! board.set_viewport(1200.0, 1600.0);
//!
//! board.pointer_down(&id, PointerTarget::Body, Point::new(0.0, 0.0))?;
//! board.pointer_move(Point::new(50.0, 50.0));
//!
//! let mut commits: Vec<(PhotoId, TransformUpdate)> = Vec::new();
//! board.pointer_up(&mut commits);
//! assert_eq!(commits[0].1.position_x, Some(150.0));
//! # Ok::<(), scrapbook_core::EditorError>(())
//! ```

pub mod board;
pub mod canvas;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod photo;
pub mod transform;
pub mod update;

pub use board::{Board, TransformSink};
pub use canvas::{canvas_scale, clamp, clamp_to_canvas, screen_to_canvas, CanvasConfig};
pub use editor::{Gesture, PhotoEditor, PointerTarget};
pub use error::EditorError;
pub use geometry::{Point, Rect};
pub use photo::{default_position, CropRect, PhotoId, PlacedPhoto, StoredPhoto};
pub use transform::{Handle, ResizeHandle};
pub use update::{PhotoPatch, TransformUpdate};
